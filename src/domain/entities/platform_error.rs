use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::errors::TranslatorError;

/// Error record sent back over the message channel in place of a reply.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformError {
    pub code: String,
    pub message: Option<String>,
    pub details: Option<serde_json::Value>,
}

impl From<TranslatorError> for PlatformError {
    fn from(e: TranslatorError) -> Self {
        let details = match &e {
            TranslatorError::InvalidJson { model, details } => Some(serde_json::json!({
                "model": model,
                "details": details,
            })),
            _ => None,
        };
        PlatformError {
            code: e.code().to_string(),
            message: Some(e.to_string()),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_code_and_message() {
        let e = PlatformError::from(TranslatorError::InvalidCurrencyCode("ABCD".to_string()));
        assert_eq!(e.code, "INVALID_CURRENCY_CODE");
        assert_eq!(
            e.message.as_deref(),
            Some("Unsupported ISO 4217 currency code: ABCD")
        );
        assert_eq!(
            serde_json::to_value(&e).unwrap(),
            serde_json::json!({
                "code": "INVALID_CURRENCY_CODE",
                "message": "Unsupported ISO 4217 currency code: ABCD",
            })
        );
    }
}
