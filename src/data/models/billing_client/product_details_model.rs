use serde::Deserialize;

use crate::errors::{TranslatorError, TranslatorResult};

/// Details of a product available in the Play Store catalog, as returned by
/// `BillingClient.queryProductDetailsAsync`.
///
/// https://developer.android.com/reference/com/android/billingclient/api/ProductDetails
///
/// The billing client builds this object from a JSON payload; `from_json`
/// accepts the same payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailsModel {
    /// The product's id.
    pub product_id: String,
    /// The product's type, either `inapp` or `subs`. Other values may appear
    /// with future billing client versions.
    #[serde(rename = "type")]
    pub product_type: String,
    /// The title of the product, including the app name in parentheses.
    pub title: String,
    /// The name of the product, without the app name.
    pub name: String,
    /// The description of the product.
    #[serde(default)]
    pub description: String,
    /// Only present for one-time products.
    pub one_time_purchase_offer_details: Option<OneTimePurchaseOfferDetailsModel>,
    /// Only present for subscriptions. Contains the base plans and offers the
    /// user is eligible for.
    pub subscription_offer_details: Option<Vec<SubscriptionOfferDetailsModel>>,
}

impl ProductDetailsModel {
    pub fn from_json(json: &str) -> TranslatorResult<Self> {
        serde_json::from_str(json).map_err(|e| TranslatorError::invalid_json("ProductDetails", &e))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneTimePurchaseOfferDetailsModel {
    /// Price in micro-units, where 1,000,000 micro-units equal one unit of the
    /// currency.
    pub price_amount_micros: i64,
    /// ISO 4217 currency code for the price.
    pub price_currency_code: String,
    /// Formatted price including its currency sign.
    pub formatted_price: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionOfferDetailsModel {
    /// Not present for the base plan itself.
    pub offer_id: Option<String>,
    pub base_plan_id: String,
    #[serde(default)]
    pub offer_tags: Vec<String>,
    /// Token passed to the billing flow to purchase this offer.
    #[serde(rename = "offerIdToken")]
    pub offer_token: String,
    #[serde(default)]
    pub pricing_phases: PricingPhasesModel,
}

/// Ordered pricing phases of a subscription offer, e.g. a free trial followed
/// by an introductory price followed by the regular price.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PricingPhasesModel {
    pub pricing_phase_list: Vec<PricingPhaseModel>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPhaseModel {
    pub formatted_price: String,
    pub price_currency_code: String,
    pub price_amount_micros: i64,
    /// Number of cycles the phase repeats for. Zero for infinitely recurring
    /// phases.
    #[serde(default)]
    pub billing_cycle_count: i32,
    /// ISO 8601 duration, e.g. `P1W` or `P1M`.
    pub billing_period: String,
    /// One of the `RECURRENCE_MODE_*` constants.
    pub recurrence_mode: i32,
}

/// Product to query, as built for `QueryProductDetailsParams`.
///
/// https://developer.android.com/reference/com/android/billingclient/api/QueryProductDetailsParams.Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryProductModel {
    pub product_id: String,
    /// One of the `PRODUCT_TYPE_*` constants.
    pub product_type: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{RECURRENCE_MODE_INFINITE_RECURRING, RECURRENCE_MODE_NON_RECURRING};

    #[test]
    fn parses_subscription_json() {
        let m = ProductDetailsModel::from_json(
            r#"{
                "productId": "premium",
                "type": "subs",
                "title": "Premium (Example)",
                "name": "Premium",
                "description": "All features",
                "subscriptionOfferDetails": [{
                    "offerIdToken": "tok",
                    "basePlanId": "monthly",
                    "offerTags": ["intro"],
                    "pricingPhases": [{
                        "priceAmountMicros": 4990000,
                        "priceCurrencyCode": "USD",
                        "formattedPrice": "$4.99",
                        "billingPeriod": "P1M",
                        "recurrenceMode": 1
                    }]
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(m.product_type, "subs");
        assert!(m.one_time_purchase_offer_details.is_none());
        let offers = m.subscription_offer_details.unwrap();
        assert_eq!(offers[0].offer_id, None);
        assert_eq!(offers[0].offer_token, "tok");
        let phase = &offers[0].pricing_phases.pricing_phase_list[0];
        assert_eq!(phase.billing_cycle_count, 0);
        assert_eq!(phase.recurrence_mode, RECURRENCE_MODE_INFINITE_RECURRING);
    }

    #[test]
    fn parses_prepaid_plan_phase() {
        let m = ProductDetailsModel::from_json(
            r#"{
                "productId": "premium",
                "type": "subs",
                "title": "Premium (Example)",
                "name": "Premium",
                "subscriptionOfferDetails": [{
                    "offerIdToken": "tok",
                    "basePlanId": "prepaid-year",
                    "offerTags": [],
                    "pricingPhases": [{
                        "priceAmountMicros": 39990000,
                        "priceCurrencyCode": "USD",
                        "formattedPrice": "$39.99",
                        "billingPeriod": "P1Y",
                        "recurrenceMode": 3
                    }]
                }]
            }"#,
        )
        .unwrap();
        let offers = m.subscription_offer_details.unwrap();
        let phase = &offers[0].pricing_phases.pricing_phase_list[0];
        assert_eq!(phase.recurrence_mode, RECURRENCE_MODE_NON_RECURRING);
        assert_eq!(phase.billing_cycle_count, 0);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ProductDetailsModel::from_json("{\"productId\": 1}").unwrap_err();
        assert_eq!(err.code(), "INVALID_JSON");
    }
}
