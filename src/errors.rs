pub type TranslatorResult<T> = Result<T, TranslatorError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslatorError {
    /// A product type index received over the channel does not correspond to
    /// any known `PlatformProductType`.
    #[error("Unknown product type: {0}")]
    UnknownProductType(i64),

    #[error("Currency code is missing.")]
    MissingCurrencyCode,

    /// Not one of the ISO 4217 codes known to the currency table. Codes are
    /// case-sensitive.
    #[error("Unsupported ISO 4217 currency code: {0}")]
    InvalidCurrencyCode(String),

    /// Billing client JSON could not be parsed into the corresponding model.
    #[error("Failed to parse {model} JSON: {details}")]
    InvalidJson {
        model: &'static str,
        details: String,
    },
}

impl TranslatorError {
    /// Machine-readable code, as carried by `PlatformError::code`.
    pub fn code(&self) -> &'static str {
        match self {
            TranslatorError::UnknownProductType(_) => "UNKNOWN_TYPE",
            TranslatorError::MissingCurrencyCode => "NULL_CURRENCY_CODE",
            TranslatorError::InvalidCurrencyCode(_) => "INVALID_CURRENCY_CODE",
            TranslatorError::InvalidJson { .. } => "INVALID_JSON",
        }
    }

    pub(crate) fn invalid_json(model: &'static str, e: &serde_json::Error) -> Self {
        TranslatorError::InvalidJson {
            model,
            details: e.to_string(),
        }
    }
}
