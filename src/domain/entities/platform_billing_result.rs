use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformBillingResult {
    pub response_code: i64,
    pub debug_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformBillingConfigResponse {
    pub billing_result: PlatformBillingResult,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformAlternativeBillingOnlyReportingDetailsResponse {
    pub billing_result: PlatformBillingResult,
    pub external_transaction_token: String,
}
