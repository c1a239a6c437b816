use crate::{
    constants::{PRODUCT_TYPE_INAPP, PRODUCT_TYPE_SUBS},
    data::models::billing_client::product_details_model::QueryProductModel,
    domain::entities::{
        platform_product_type::PlatformProductType, platform_query_product::PlatformQueryProduct,
    },
};

pub fn to_product_list(queries: &[PlatformQueryProduct]) -> Vec<QueryProductModel> {
    queries.iter().map(to_product).collect()
}

pub fn to_product(query: &PlatformQueryProduct) -> QueryProductModel {
    QueryProductModel {
        product_id: query.product_id.clone(),
        product_type: to_product_type_string(query.product_type),
    }
}

/// Indexes outside the enum never reach this point: they are rejected with
/// `TranslatorError::UnknownProductType` when decoded into
/// `PlatformProductType`.
pub fn to_product_type_string(product_type: PlatformProductType) -> &'static str {
    match product_type {
        PlatformProductType::Inapp => PRODUCT_TYPE_INAPP,
        PlatformProductType::Subs => PRODUCT_TYPE_SUBS,
    }
}

/// Unrecognised strings map to `Inapp`, so that product types introduced by
/// later billing client versions do not fail the whole query.
pub fn to_platform_product_type(product_type: &str) -> PlatformProductType {
    match product_type {
        PRODUCT_TYPE_SUBS => PlatformProductType::Subs,
        PRODUCT_TYPE_INAPP => PlatformProductType::Inapp,
        unknown => {
            tracing::debug!(product_type = unknown, "Unknown product type, treating as inapp.");
            PlatformProductType::Inapp
        }
    }
}
