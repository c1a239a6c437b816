use chrono::{serde::ts_milliseconds_option, DateTime, Utc};
use serde::Deserialize;

use crate::{
    constants::{
        ORIGINAL_JSON_PURCHASE_STATE_PENDING, PURCHASE_STATE_PENDING, PURCHASE_STATE_PURCHASED,
    },
    errors::{TranslatorError, TranslatorResult},
};

/// An in-app purchase, as delivered to `PurchasesUpdatedListener` or returned
/// by `BillingClient.queryPurchasesAsync`.
///
/// https://developer.android.com/reference/com/android/billingclient/api/Purchase
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseModel {
    /// Unique order identifier for the transaction. Not present for pending
    /// purchases.
    pub order_id: Option<String>,
    /// Application package from which the purchase originated.
    pub package_name: String,
    pub purchase_time: DateTime<Utc>,
    /// Token that uniquely identifies the purchase for a given item and user.
    pub purchase_token: String,
    /// Signature of the purchase data, signed with the developer's private
    /// key.
    pub signature: String,
    pub products: Vec<String>,
    pub is_auto_renewing: bool,
    /// The JSON the purchase was built from.
    pub original_json: String,
    pub developer_payload: String,
    pub is_acknowledged: bool,
    /// One of the `PURCHASE_STATE_*` constants.
    pub purchase_state: i32,
    pub quantity: i32,
    /// Only present when the ids were specified in `BillingFlowParams` when the
    /// purchase was made.
    pub account_identifiers: Option<AccountIdentifiersModel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountIdentifiersModel {
    pub obfuscated_account_id: Option<String>,
    pub obfuscated_profile_id: Option<String>,
}

/// The most recent purchase made by the user for each product, as returned
/// by `BillingClient.queryPurchaseHistoryAsync`. Unlike `PurchaseModel`, it
/// carries no state or acknowledgement.
///
/// https://developer.android.com/reference/com/android/billingclient/api/PurchaseHistoryRecord
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseHistoryRecordModel {
    pub purchase_time: DateTime<Utc>,
    pub purchase_token: String,
    pub signature: String,
    pub products: Vec<String>,
    pub developer_payload: String,
    pub original_json: String,
    pub quantity: i32,
}

impl PurchaseModel {
    /// Builds the purchase the same way the billing client does, from the
    /// original purchase JSON and its signature.
    pub fn from_original_json(original_json: &str, signature: &str) -> TranslatorResult<Self> {
        let raw: OriginalPurchaseJson = serde_json::from_str(original_json)
            .map_err(|e| TranslatorError::invalid_json("Purchase", &e))?;
        Ok(Self {
            order_id: raw.order_id.clone(),
            package_name: raw.package_name.clone(),
            purchase_time: raw.purchase_time(),
            purchase_token: raw.purchase_token(),
            signature: signature.to_string(),
            products: raw.products(),
            is_auto_renewing: raw.auto_renewing,
            original_json: original_json.to_string(),
            developer_payload: raw.developer_payload.clone(),
            is_acknowledged: raw.acknowledged,
            purchase_state: raw.purchase_state(),
            quantity: raw.quantity(),
            account_identifiers: raw.account_identifiers(),
        })
    }
}

impl PurchaseHistoryRecordModel {
    pub fn from_original_json(original_json: &str, signature: &str) -> TranslatorResult<Self> {
        let raw: OriginalPurchaseJson = serde_json::from_str(original_json)
            .map_err(|e| TranslatorError::invalid_json("PurchaseHistoryRecord", &e))?;
        Ok(Self {
            purchase_time: raw.purchase_time(),
            purchase_token: raw.purchase_token(),
            signature: signature.to_string(),
            products: raw.products(),
            developer_payload: raw.developer_payload.clone(),
            original_json: original_json.to_string(),
            quantity: raw.quantity(),
        })
    }
}

/// Purchase payload as issued by the Play Store. Older payloads carry a single
/// `productId` and `purchaseToken`; newer ones `productIds` and `token`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OriginalPurchaseJson {
    order_id: Option<String>,
    #[serde(default)]
    package_name: String,
    product_id: Option<String>,
    product_ids: Option<Vec<String>>,
    #[serde(default, with = "ts_milliseconds_option")]
    purchase_time: Option<DateTime<Utc>>,
    purchase_state: Option<i32>,
    token: Option<String>,
    purchase_token: Option<String>,
    quantity: Option<i32>,
    #[serde(default)]
    auto_renewing: bool,
    #[serde(default = "default_acknowledged")]
    acknowledged: bool,
    #[serde(default)]
    developer_payload: String,
    obfuscated_account_id: Option<String>,
    obfuscated_profile_id: Option<String>,
}

fn default_acknowledged() -> bool {
    true
}

impl OriginalPurchaseJson {
    /// Absent and null quantities both count as one.
    fn quantity(&self) -> i32 {
        self.quantity.unwrap_or(1)
    }

    fn purchase_time(&self) -> DateTime<Utc> {
        self.purchase_time.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    fn purchase_token(&self) -> String {
        self.token
            .clone()
            .or_else(|| self.purchase_token.clone())
            .unwrap_or_default()
    }

    fn products(&self) -> Vec<String> {
        match (&self.product_ids, &self.product_id) {
            (Some(ids), _) => ids.clone(),
            (None, Some(id)) => vec![id.clone()],
            (None, None) => Vec::new(),
        }
    }

    fn purchase_state(&self) -> i32 {
        match self.purchase_state {
            Some(ORIGINAL_JSON_PURCHASE_STATE_PENDING) => PURCHASE_STATE_PENDING,
            _ => PURCHASE_STATE_PURCHASED,
        }
    }

    fn account_identifiers(&self) -> Option<AccountIdentifiersModel> {
        if self.obfuscated_account_id.is_none() && self.obfuscated_profile_id.is_none() {
            return None;
        }
        Some(AccountIdentifiersModel {
            obfuscated_account_id: self.obfuscated_account_id.clone(),
            obfuscated_profile_id: self.obfuscated_profile_id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PURCHASE_JSON: &str = r#"{
        "orderId": "GPA.1234-5678-9012-34567",
        "packageName": "io.fractic.example",
        "productId": "coins_100",
        "purchaseTime": 1700000000123,
        "purchaseState": 0,
        "purchaseToken": "legacy-token",
        "acknowledged": false
    }"#;

    #[test]
    fn legacy_payload_fields() {
        let m = PurchaseModel::from_original_json(PURCHASE_JSON, "sig").unwrap();
        assert_eq!(m.order_id.as_deref(), Some("GPA.1234-5678-9012-34567"));
        assert_eq!(m.products, vec!["coins_100".to_string()]);
        assert_eq!(m.purchase_token, "legacy-token");
        assert_eq!(m.purchase_time.timestamp_millis(), 1_700_000_000_123);
        assert_eq!(m.purchase_state, PURCHASE_STATE_PURCHASED);
        assert_eq!(m.quantity, 1);
        assert!(!m.is_acknowledged);
        assert!(!m.is_auto_renewing);
        assert_eq!(m.developer_payload, "");
        assert_eq!(m.signature, "sig");
        assert_eq!(m.original_json, PURCHASE_JSON);
        assert!(m.account_identifiers.is_none());
    }

    #[test]
    fn current_payload_fields() {
        let m = PurchaseModel::from_original_json(
            r#"{
                "packageName": "io.fractic.example",
                "productIds": ["a", "b"],
                "purchaseTime": 1,
                "purchaseState": 4,
                "token": "new-token",
                "purchaseToken": "legacy-token",
                "quantity": 3,
                "obfuscatedProfileId": "profile"
            }"#,
            "sig",
        )
        .unwrap();
        assert_eq!(m.order_id, None);
        assert_eq!(m.products, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(m.purchase_token, "new-token");
        assert_eq!(m.purchase_state, PURCHASE_STATE_PENDING);
        assert_eq!(m.quantity, 3);
        assert!(m.is_acknowledged);
        assert_eq!(
            m.account_identifiers,
            Some(AccountIdentifiersModel {
                obfuscated_account_id: None,
                obfuscated_profile_id: Some("profile".to_string()),
            })
        );
    }

    #[test]
    fn history_record_from_json() {
        let m = PurchaseHistoryRecordModel::from_original_json(PURCHASE_JSON, "sig").unwrap();
        assert_eq!(m.products, vec!["coins_100".to_string()]);
        assert_eq!(m.purchase_token, "legacy-token");
        assert_eq!(m.quantity, 1);
    }

    #[test]
    fn null_quantity_counts_as_one() {
        let json = r#"{"productId":"coins_100","purchaseToken":"t","purchaseState":0,"quantity":null}"#;
        let purchase = PurchaseModel::from_original_json(json, "sig").unwrap();
        assert_eq!(purchase.quantity, 1);
        let record = PurchaseHistoryRecordModel::from_original_json(json, "sig").unwrap();
        assert_eq!(record.quantity, 1);
    }

    #[test]
    fn rejects_non_object() {
        let err = PurchaseModel::from_original_json("[]", "sig").unwrap_err();
        assert!(matches!(
            err,
            TranslatorError::InvalidJson {
                model: "Purchase",
                ..
            }
        ));
    }
}
