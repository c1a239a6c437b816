/// Loosely typed message, keyed by camelCase field names. Used for the
/// product details family, which the channel transports as plain maps.
pub type MessageMap = serde_json::Map<String, serde_json::Value>;
