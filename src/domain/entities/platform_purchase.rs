use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::platform_purchase_state::PlatformPurchaseState;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformPurchase {
    pub order_id: Option<String>,
    pub package_name: String,
    /// Milliseconds since the epoch.
    pub purchase_time: i64,
    pub purchase_token: String,
    pub signature: String,
    pub products: Vec<String>,
    pub is_auto_renewing: bool,
    pub original_json: String,
    pub developer_payload: String,
    pub is_acknowledged: bool,
    pub quantity: i64,
    pub purchase_state: PlatformPurchaseState,
    /// Omitted for purchases made without obfuscated account or profile ids.
    pub account_identifiers: Option<PlatformAccountIdentifiers>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformAccountIdentifiers {
    pub obfuscated_account_id: Option<String>,
    pub obfuscated_profile_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformPurchaseHistoryRecord {
    pub quantity: i64,
    /// Milliseconds since the epoch.
    pub purchase_time: i64,
    pub developer_payload: Option<String>,
    pub original_json: String,
    pub purchase_token: String,
    pub signature: String,
    pub products: Vec<String>,
}
