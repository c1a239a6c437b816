use serde::Deserialize;

/// Outcome of a billing client call.
///
/// https://developer.android.com/reference/com/android/billingclient/api/BillingResult
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingResultModel {
    /// One of the `BILLING_RESPONSE_*` constants.
    pub response_code: i32,
    #[serde(default)]
    pub debug_message: String,
}
