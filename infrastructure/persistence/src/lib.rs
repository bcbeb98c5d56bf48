pub mod db;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod collection {
    pub mod entity;
    pub mod repository;
}
pub mod customer {
    pub mod entity;
    pub mod repository;
}
pub mod notification {
    pub mod entity;
    pub mod repository;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod review {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
#[cfg(test)]
pub(crate) mod test_support;
