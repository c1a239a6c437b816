use crate::{
    data::models::billing_client::user_choice_details_model::{
        UserChoiceDetailsModel, UserChoiceProductModel,
    },
    domain::entities::platform_user_choice_details::{
        PlatformUserChoiceDetails, PlatformUserChoiceProduct,
    },
};

use super::product_type::to_platform_product_type;

pub fn from_user_choice_details(details: &UserChoiceDetailsModel) -> PlatformUserChoiceDetails {
    PlatformUserChoiceDetails {
        original_external_transaction_id: details.original_external_transaction_id.clone(),
        external_transaction_token: details.external_transaction_token.clone(),
        products: from_user_choice_products_list(&details.products),
    }
}

pub fn from_user_choice_products_list(
    products: &[UserChoiceProductModel],
) -> Vec<PlatformUserChoiceProduct> {
    if products.is_empty() {
        return Vec::new();
    }
    products.iter().map(from_user_choice_product).collect()
}

pub fn from_user_choice_product(product: &UserChoiceProductModel) -> PlatformUserChoiceProduct {
    PlatformUserChoiceProduct {
        id: product.id.clone(),
        offer_token: product.offer_token.clone(),
        product_type: to_platform_product_type(&product.product_type),
    }
}
