//! Product catalog entries are sent as plain maps rather than typed messages.

use serde_json::Value;

use crate::{
    data::models::billing_client::product_details_model::{
        OneTimePurchaseOfferDetailsModel, PricingPhaseModel, PricingPhasesModel,
        ProductDetailsModel, SubscriptionOfferDetailsModel,
    },
    domain::entities::message_map::MessageMap,
};

/// Both offer keys are attached independently; each is omitted only when the
/// billing client did not provide it.
pub fn from_product_detail(detail: &ProductDetailsModel) -> MessageMap {
    let mut info = MessageMap::new();
    info.insert("title".into(), detail.title.clone().into());
    info.insert("description".into(), detail.description.clone().into());
    info.insert("productId".into(), detail.product_id.clone().into());
    info.insert("productType".into(), detail.product_type.clone().into());
    info.insert("name".into(), detail.name.clone().into());

    if let Some(offer) = &detail.one_time_purchase_offer_details {
        info.insert(
            "oneTimePurchaseOfferDetails".into(),
            Value::Object(from_one_time_purchase_offer_details(Some(offer))),
        );
    }
    if let Some(offers) = &detail.subscription_offer_details {
        info.insert(
            "subscriptionOfferDetails".into(),
            maps_to_value(from_subscription_offer_details_list(Some(offers.as_slice()))),
        );
    }
    info
}

pub fn from_product_details_list(details: Option<&[ProductDetailsModel]>) -> Vec<MessageMap> {
    details
        .unwrap_or_default()
        .iter()
        .map(from_product_detail)
        .collect()
}

pub fn from_one_time_purchase_offer_details(
    offer: Option<&OneTimePurchaseOfferDetailsModel>,
) -> MessageMap {
    let mut serialized = MessageMap::new();
    let Some(offer) = offer else {
        return serialized;
    };
    serialized.insert("priceAmountMicros".into(), offer.price_amount_micros.into());
    serialized.insert(
        "priceCurrencyCode".into(),
        offer.price_currency_code.clone().into(),
    );
    serialized.insert("formattedPrice".into(), offer.formatted_price.clone().into());
    serialized
}

pub fn from_subscription_offer_details_list(
    offers: Option<&[SubscriptionOfferDetailsModel]>,
) -> Vec<MessageMap> {
    offers
        .unwrap_or_default()
        .iter()
        .map(|offer| from_subscription_offer_details(Some(offer)))
        .collect()
}

/// A base plan has no offer id; `offerId` is then sent as null.
pub fn from_subscription_offer_details(
    offer: Option<&SubscriptionOfferDetailsModel>,
) -> MessageMap {
    let mut serialized = MessageMap::new();
    let Some(offer) = offer else {
        return serialized;
    };
    serialized.insert("offerId".into(), offer.offer_id.clone().into());
    serialized.insert("basePlanId".into(), offer.base_plan_id.clone().into());
    serialized.insert("offerTags".into(), offer.offer_tags.clone().into());
    serialized.insert("offerIdToken".into(), offer.offer_token.clone().into());
    serialized.insert(
        "pricingPhases".into(),
        maps_to_value(from_pricing_phases(&offer.pricing_phases)),
    );
    serialized
}

pub fn from_pricing_phases(phases: &PricingPhasesModel) -> Vec<MessageMap> {
    phases
        .pricing_phase_list
        .iter()
        .map(|phase| from_pricing_phase(Some(phase)))
        .collect()
}

pub fn from_pricing_phase(phase: Option<&PricingPhaseModel>) -> MessageMap {
    let mut serialized = MessageMap::new();
    let Some(phase) = phase else {
        return serialized;
    };
    serialized.insert("formattedPrice".into(), phase.formatted_price.clone().into());
    serialized.insert(
        "priceCurrencyCode".into(),
        phase.price_currency_code.clone().into(),
    );
    serialized.insert("priceAmountMicros".into(), phase.price_amount_micros.into());
    serialized.insert("billingCycleCount".into(), phase.billing_cycle_count.into());
    serialized.insert("billingPeriod".into(), phase.billing_period.clone().into());
    serialized.insert("recurrenceMode".into(), phase.recurrence_mode.into());
    serialized
}

fn maps_to_value(maps: Vec<MessageMap>) -> Value {
    Value::Array(maps.into_iter().map(Value::Object).collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::constants::{RECURRENCE_MODE_FINITE_RECURRING, RECURRENCE_MODE_INFINITE_RECURRING};

    fn phase(formatted_price: &str, micros: i64, cycles: i32, mode: i32) -> PricingPhaseModel {
        PricingPhaseModel {
            formatted_price: formatted_price.to_string(),
            price_currency_code: "EUR".to_string(),
            price_amount_micros: micros,
            billing_cycle_count: cycles,
            billing_period: "P1M".to_string(),
            recurrence_mode: mode,
        }
    }

    fn bare_detail() -> ProductDetailsModel {
        ProductDetailsModel {
            product_id: "gems".to_string(),
            product_type: "inapp".to_string(),
            title: "Gems (Example)".to_string(),
            name: "Gems".to_string(),
            description: "A pile of gems".to_string(),
            one_time_purchase_offer_details: None,
            subscription_offer_details: None,
        }
    }

    #[test]
    fn omits_absent_offers() {
        let info = from_product_detail(&bare_detail());
        assert!(!info.contains_key("oneTimePurchaseOfferDetails"));
        assert!(!info.contains_key("subscriptionOfferDetails"));
        assert_eq!(
            Value::Object(info),
            json!({
                "title": "Gems (Example)",
                "description": "A pile of gems",
                "productId": "gems",
                "productType": "inapp",
                "name": "Gems",
            })
        );
    }

    #[test]
    fn attaches_both_offer_kinds_when_present() {
        let mut detail = bare_detail();
        detail.one_time_purchase_offer_details = Some(OneTimePurchaseOfferDetailsModel {
            price_amount_micros: 990_000,
            price_currency_code: "EUR".to_string(),
            formatted_price: "€0.99".to_string(),
        });
        detail.subscription_offer_details = Some(vec![]);
        let info = from_product_detail(&detail);
        assert_eq!(
            info["oneTimePurchaseOfferDetails"],
            json!({
                "priceAmountMicros": 990_000,
                "priceCurrencyCode": "EUR",
                "formattedPrice": "€0.99",
            })
        );
        assert_eq!(info["subscriptionOfferDetails"], json!([]));
    }

    #[test]
    fn subscription_offer_keeps_phase_order() {
        let offer = SubscriptionOfferDetailsModel {
            offer_id: Some("intro".to_string()),
            base_plan_id: "monthly".to_string(),
            offer_tags: vec!["promo".to_string()],
            offer_token: "token".to_string(),
            pricing_phases: PricingPhasesModel {
                pricing_phase_list: vec![
                    phase("€1.99", 1_990_000, 3, RECURRENCE_MODE_FINITE_RECURRING),
                    phase("€4.99", 4_990_000, 0, RECURRENCE_MODE_INFINITE_RECURRING),
                ],
            },
        };
        let serialized = from_subscription_offer_details(Some(&offer));
        assert_eq!(serialized["offerId"], json!("intro"));
        assert_eq!(serialized["offerTags"], json!(["promo"]));
        assert_eq!(serialized["offerIdToken"], json!("token"));
        assert_eq!(
            serialized["pricingPhases"],
            json!([
                {
                    "formattedPrice": "€1.99",
                    "priceCurrencyCode": "EUR",
                    "priceAmountMicros": 1_990_000,
                    "billingCycleCount": 3,
                    "billingPeriod": "P1M",
                    "recurrenceMode": 2,
                },
                {
                    "formattedPrice": "€4.99",
                    "priceCurrencyCode": "EUR",
                    "priceAmountMicros": 4_990_000,
                    "billingCycleCount": 0,
                    "billingPeriod": "P1M",
                    "recurrenceMode": 1,
                },
            ])
        );
    }

    #[test]
    fn base_plan_sends_null_offer_id() {
        let offer = SubscriptionOfferDetailsModel {
            offer_id: None,
            base_plan_id: "monthly".to_string(),
            offer_tags: vec![],
            offer_token: "token".to_string(),
            pricing_phases: PricingPhasesModel::default(),
        };
        let serialized = from_subscription_offer_details(Some(&offer));
        assert_eq!(serialized["offerId"], Value::Null);
        assert_eq!(serialized["pricingPhases"], json!([]));
    }

    #[test]
    fn pricing_phases_preserve_length() {
        let phases = PricingPhasesModel {
            pricing_phase_list: (1..=4)
                .map(|i| {
                    phase(&format!("€{i}"), i * 1_000_000, 1, RECURRENCE_MODE_FINITE_RECURRING)
                })
                .collect(),
        };
        let serialized = from_pricing_phases(&phases);
        assert_eq!(serialized.len(), 4);
        let prices: Vec<_> = serialized.iter().map(|p| p["formattedPrice"].clone()).collect();
        assert_eq!(prices, vec![json!("€1"), json!("€2"), json!("€3"), json!("€4")]);
        assert!(from_pricing_phases(&PricingPhasesModel::default()).is_empty());
    }

    #[test]
    fn absent_inputs_give_empty_outputs() {
        assert!(from_product_details_list(None).is_empty());
        assert!(from_one_time_purchase_offer_details(None).is_empty());
        assert!(from_subscription_offer_details_list(None).is_empty());
        assert!(from_subscription_offer_details(None).is_empty());
        assert!(from_pricing_phase(None).is_empty());
    }

    #[test]
    fn list_maps_each_detail() {
        let details = vec![bare_detail(), bare_detail()];
        assert_eq!(from_product_details_list(Some(details.as_slice())).len(), 2);
    }
}
