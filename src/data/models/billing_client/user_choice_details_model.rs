use serde::Deserialize;

/// Details of a purchase the user chose to complete through the developer's
/// alternative billing system.
///
/// https://developer.android.com/reference/com/android/billingclient/api/UserChoiceDetails
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserChoiceDetailsModel {
    /// Token used to report the external transaction to Google.
    pub external_transaction_token: String,
    /// Only present for subscription replacements.
    pub original_external_transaction_id: Option<String>,
    #[serde(default)]
    pub products: Vec<UserChoiceProductModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserChoiceProductModel {
    pub id: String,
    pub offer_token: Option<String>,
    /// One of the `PRODUCT_TYPE_*` constants.
    #[serde(rename = "type")]
    pub product_type: String,
}
