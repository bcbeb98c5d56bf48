use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Auth,
    Users,
    Customers,
    Collections,
    Products,
    Reviews,
    Carts,
    Orders,
    Notifications,
}
