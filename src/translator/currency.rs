use crate::{errors::TranslatorResult, util::CurrencyUtil};

/// Symbol of an ISO 4217 currency in the process-wide display locale. For
/// example, the US dollar is '$' when the display locale is in the US and
/// 'US$' in most other regions. Currencies without a dedicated symbol are
/// returned as their code.
///
/// Fails with `MissingCurrencyCode` when no code is given and with
/// `InvalidCurrencyCode` when the code is not a supported ISO 4217 code.
pub fn currency_symbol_from_code(currency_code: Option<&str>) -> TranslatorResult<String> {
    CurrencyUtil::new().currency_symbol_from_code(currency_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TranslatorError;

    #[test]
    fn failure_modes_do_not_depend_on_locale() {
        assert_eq!(
            currency_symbol_from_code(None),
            Err(TranslatorError::MissingCurrencyCode)
        );
        assert_eq!(
            currency_symbol_from_code(Some("XXX_INVALID")),
            Err(TranslatorError::InvalidCurrencyCode(
                "XXX_INVALID".to_string()
            ))
        );
    }

    #[test]
    fn euro_symbol_is_the_same_everywhere() {
        assert_eq!(currency_symbol_from_code(Some("EUR")).unwrap(), "€");
    }
}
