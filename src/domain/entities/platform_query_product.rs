use serde::{Deserialize, Serialize};

use super::platform_product_type::PlatformProductType;

/// A product to look up, as requested by the framework side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformQueryProduct {
    pub product_id: String,
    pub product_type: PlatformProductType,
}
