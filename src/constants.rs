// Values mirror the constants exposed by the Google Play Billing client:
// https://developer.android.com/reference/com/android/billingclient/api/BillingClient

// BillingClient.ProductType
pub const PRODUCT_TYPE_INAPP: &str = "inapp";
pub const PRODUCT_TYPE_SUBS: &str = "subs";

// Purchase.PurchaseState
pub const PURCHASE_STATE_UNSPECIFIED: i32 = 0;
pub const PURCHASE_STATE_PURCHASED: i32 = 1;
pub const PURCHASE_STATE_PENDING: i32 = 2;

/// Value of `purchaseState` in a purchase's original JSON that marks a
/// pending purchase. Any other value is reported as purchased.
pub(crate) const ORIGINAL_JSON_PURCHASE_STATE_PENDING: i32 = 4;

// ProductDetails.RecurrenceMode
pub const RECURRENCE_MODE_INFINITE_RECURRING: i32 = 1;
pub const RECURRENCE_MODE_FINITE_RECURRING: i32 = 2;
pub const RECURRENCE_MODE_NON_RECURRING: i32 = 3;

// BillingClient.BillingResponseCode (response codes pass through unchanged;
// only the ones the crate refers to are listed)
pub const BILLING_RESPONSE_SERVICE_TIMEOUT: i32 = -3;
pub const BILLING_RESPONSE_OK: i32 = 0;
pub const BILLING_RESPONSE_ITEM_ALREADY_OWNED: i32 = 7;

// Display locale configuration, checked in order.
pub(crate) const DISPLAY_LOCALE_ENV_VARS: [&str; 4] =
    ["BILLING_DISPLAY_LOCALE", "LC_ALL", "LC_MESSAGES", "LANG"];
pub(crate) const FALLBACK_DISPLAY_LOCALE: &str = "en-US";
