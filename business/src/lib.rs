pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clean_expired;
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod remove_item;
        pub mod update_item;
    }
    pub mod collection {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod customer {
        pub mod get_profile;
        pub mod update_profile;
    }
    pub mod notification {
        pub mod create;
        pub mod delete;
        pub mod dispatch;
        pub mod get_all;
        pub mod mark_read;
    }
    pub mod order {
        pub mod get_all;
        pub mod get_by_id;
        pub mod place;
        pub mod update_status;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod review {
        pub mod create;
        pub mod delete;
        pub mod get_all;
    }
    pub mod user {
        pub mod get_me;
        pub mod login;
        pub mod refresh;
        pub mod register;
        pub mod update_me;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod pagination;
        pub mod permissions;
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clean_expired;
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod remove_item;
            pub mod update_item;
        }
    }
    pub mod collection {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod customer {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_profile;
            pub mod update_profile;
        }
    }
    pub mod notification {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod mark_read;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod place;
            pub mod update_status;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod review {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod get_me;
            pub mod login;
            pub mod refresh;
            pub mod register;
            pub mod update_me;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_utils;
