use serde_repr::{Deserialize_repr, Serialize_repr};

/// Purchase state as exposed over the message channel. Encoded as its enum
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum PlatformPurchaseState {
    Unspecified = 0,
    Purchased = 1,
    Pending = 2,
}
