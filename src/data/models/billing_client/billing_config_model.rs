use rust_iso3166::CountryCode;
use serde::Deserialize;

use crate::errors::{TranslatorError, TranslatorResult};

/// Billing configuration of the user's Play account.
///
/// https://developer.android.com/reference/com/android/billingclient/api/BillingConfig
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingConfigModel {
    /// ISO 3166-1 alpha-2 code of the country the user's Play account is
    /// registered in.
    pub country_code: String,
}

impl BillingConfigModel {
    pub fn from_json(json: &str) -> TranslatorResult<Self> {
        serde_json::from_str(json).map_err(|e| TranslatorError::invalid_json("BillingConfig", &e))
    }

    /// `None` if the billing client reported a code unknown to ISO 3166.
    pub fn country(&self) -> Option<CountryCode> {
        rust_iso3166::from_alpha2(&self.country_code)
    }
}

/// Details needed to report a transaction made through alternative billing
/// only.
///
/// https://developer.android.com/reference/com/android/billingclient/api/AlternativeBillingOnlyReportingDetails
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeBillingOnlyReportingDetailsModel {
    pub external_transaction_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_country() {
        let m = BillingConfigModel::from_json(r#"{"countryCode":"NL"}"#).unwrap();
        assert_eq!(m.country().unwrap().alpha3, "NLD");
    }

    #[test]
    fn unknown_country_is_none() {
        let m = BillingConfigModel {
            country_code: "XX".to_string(),
        };
        assert!(m.country().is_none());
    }
}
