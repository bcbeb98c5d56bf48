pub mod cart_cleanup;
pub mod dependency_injection;
pub mod server;
