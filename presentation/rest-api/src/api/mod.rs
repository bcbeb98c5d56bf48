pub mod error;
pub mod security;
pub mod tags;

pub mod health {
    pub mod routes;
}

pub mod auth {
    pub mod dto;
    pub mod routes;
}

pub mod user {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

pub mod customer {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

pub mod collection {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

pub mod review {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

pub mod cart {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

pub mod order {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}

pub mod notification {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
