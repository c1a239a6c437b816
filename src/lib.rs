pub mod data {
    pub mod datasources {
        pub mod currency_datasource;
    }
    pub mod models {
        pub mod billing_client {
            pub mod billing_config_model;
            pub mod billing_result_model;
            pub mod product_details_model;
            pub mod purchase_model;
            pub mod user_choice_details_model;
        }
        pub(crate) mod iso_4217 {
            pub(crate) mod currency_model;
        }
    }
}

pub mod domain {
    pub mod entities {
        pub mod message_map;
        pub mod platform_billing_result;
        pub mod platform_error;
        pub mod platform_product_type;
        pub mod platform_purchase;
        pub mod platform_purchase_state;
        pub mod platform_query_product;
        pub mod platform_user_choice_details;
    }
}

pub mod translator {
    mod billing;
    mod currency;
    mod product_details;
    mod product_type;
    mod purchases;
    mod user_choice;

    pub use billing::*;
    pub use currency::*;
    pub use product_details::*;
    pub use product_type::*;
    pub use purchases::*;
    pub use user_choice::*;
}

pub mod config;
pub mod constants;
pub mod errors;
pub mod util;
