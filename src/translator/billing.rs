use crate::{
    data::models::billing_client::{
        billing_config_model::{AlternativeBillingOnlyReportingDetailsModel, BillingConfigModel},
        billing_result_model::BillingResultModel,
    },
    domain::entities::platform_billing_result::{
        PlatformAlternativeBillingOnlyReportingDetailsResponse, PlatformBillingConfigResponse,
        PlatformBillingResult,
    },
};

pub fn from_billing_result(result: &BillingResultModel) -> PlatformBillingResult {
    PlatformBillingResult {
        response_code: i64::from(result.response_code),
        debug_message: result.debug_message.clone(),
    }
}

pub fn from_billing_config(
    result: &BillingResultModel,
    config: &BillingConfigModel,
) -> PlatformBillingConfigResponse {
    PlatformBillingConfigResponse {
        billing_result: from_billing_result(result),
        country_code: config.country_code.clone(),
    }
}

pub fn from_alternative_billing_only_reporting_details(
    result: &BillingResultModel,
    details: &AlternativeBillingOnlyReportingDetailsModel,
) -> PlatformAlternativeBillingOnlyReportingDetailsResponse {
    PlatformAlternativeBillingOnlyReportingDetailsResponse {
        billing_result: from_billing_result(result),
        external_transaction_token: details.external_transaction_token.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::constants::{BILLING_RESPONSE_OK, BILLING_RESPONSE_SERVICE_TIMEOUT};

    fn ok() -> BillingResultModel {
        BillingResultModel {
            response_code: BILLING_RESPONSE_OK,
            debug_message: String::new(),
        }
    }

    #[test]
    fn copies_negative_response_codes() {
        let result = from_billing_result(&BillingResultModel {
            response_code: BILLING_RESPONSE_SERVICE_TIMEOUT,
            debug_message: "Timeout communicating with service.".to_string(),
        });
        assert_eq!(result.response_code, -3);
        assert_eq!(result.debug_message, "Timeout communicating with service.");
    }

    #[test]
    fn billing_config_envelope() {
        let response = from_billing_config(
            &ok(),
            &BillingConfigModel {
                country_code: "US".to_string(),
            },
        );
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "billingResult": { "responseCode": 0, "debugMessage": "" },
                "countryCode": "US",
            })
        );
    }

    #[test]
    fn reporting_details_envelope() {
        let response = from_alternative_billing_only_reporting_details(
            &ok(),
            &AlternativeBillingOnlyReportingDetailsModel {
                external_transaction_token: "ext-token".to_string(),
            },
        );
        assert_eq!(response.billing_result, from_billing_result(&ok()));
        assert_eq!(response.external_transaction_token, "ext-token");
    }
}
