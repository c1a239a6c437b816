use crate::{
    constants::{PURCHASE_STATE_PENDING, PURCHASE_STATE_PURCHASED, PURCHASE_STATE_UNSPECIFIED},
    data::models::billing_client::purchase_model::{PurchaseHistoryRecordModel, PurchaseModel},
    domain::entities::{
        platform_purchase::{
            PlatformAccountIdentifiers, PlatformPurchase, PlatformPurchaseHistoryRecord,
        },
        platform_purchase_state::PlatformPurchaseState,
    },
};

/// States the billing client may add in the future are reported as
/// `Unspecified`.
pub fn to_platform_purchase_state(state: i32) -> PlatformPurchaseState {
    match state {
        PURCHASE_STATE_PURCHASED => PlatformPurchaseState::Purchased,
        PURCHASE_STATE_PENDING => PlatformPurchaseState::Pending,
        PURCHASE_STATE_UNSPECIFIED => PlatformPurchaseState::Unspecified,
        unknown => {
            tracing::debug!(state = unknown, "Unknown purchase state, treating as unspecified.");
            PlatformPurchaseState::Unspecified
        }
    }
}

pub fn from_purchase(purchase: &PurchaseModel) -> PlatformPurchase {
    PlatformPurchase {
        order_id: purchase.order_id.clone(),
        package_name: purchase.package_name.clone(),
        purchase_time: purchase.purchase_time.timestamp_millis(),
        purchase_token: purchase.purchase_token.clone(),
        signature: purchase.signature.clone(),
        products: purchase.products.clone(),
        is_auto_renewing: purchase.is_auto_renewing,
        original_json: purchase.original_json.clone(),
        developer_payload: purchase.developer_payload.clone(),
        is_acknowledged: purchase.is_acknowledged,
        quantity: i64::from(purchase.quantity),
        purchase_state: to_platform_purchase_state(purchase.purchase_state),
        account_identifiers: purchase.account_identifiers.as_ref().map(|ids| {
            PlatformAccountIdentifiers {
                obfuscated_account_id: ids.obfuscated_account_id.clone(),
                obfuscated_profile_id: ids.obfuscated_profile_id.clone(),
            }
        }),
    }
}

pub fn from_purchase_history_record(
    record: &PurchaseHistoryRecordModel,
) -> PlatformPurchaseHistoryRecord {
    PlatformPurchaseHistoryRecord {
        quantity: i64::from(record.quantity),
        purchase_time: record.purchase_time.timestamp_millis(),
        developer_payload: Some(record.developer_payload.clone()),
        original_json: record.original_json.clone(),
        purchase_token: record.purchase_token.clone(),
        signature: record.signature.clone(),
        products: record.products.clone(),
    }
}

pub fn from_purchases_list(purchases: Option<&[PurchaseModel]>) -> Vec<PlatformPurchase> {
    purchases
        .unwrap_or_default()
        .iter()
        .map(from_purchase)
        .collect()
}

pub fn from_purchase_history_record_list(
    records: Option<&[PurchaseHistoryRecordModel]>,
) -> Vec<PlatformPurchaseHistoryRecord> {
    records
        .unwrap_or_default()
        .iter()
        .map(from_purchase_history_record)
        .collect()
}
