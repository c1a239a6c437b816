use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::platform_product_type::PlatformProductType;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformUserChoiceDetails {
    pub original_external_transaction_id: Option<String>,
    pub external_transaction_token: String,
    pub products: Vec<PlatformUserChoiceProduct>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformUserChoiceProduct {
    pub id: String,
    pub offer_token: Option<String>,
    #[serde(rename = "type")]
    pub product_type: PlatformProductType,
}
