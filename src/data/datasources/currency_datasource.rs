use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{
    config::DisplayLocale,
    data::models::iso_4217::currency_model::{CurrencyModel, CURRENCY_TABLE, LANGUAGE_SYMBOL_TABLE},
    errors::{TranslatorError, TranslatorResult},
};

static CURRENCIES_BY_CODE: Lazy<HashMap<&'static str, &'static CurrencyModel>> =
    Lazy::new(|| CURRENCY_TABLE.iter().map(|c| (c.code, c)).collect());

static SYMBOLS_BY_LANGUAGE: Lazy<HashMap<&'static str, HashMap<&'static str, &'static str>>> =
    Lazy::new(|| {
        let mut by_language: HashMap<_, HashMap<_, _>> = HashMap::new();
        for s in LANGUAGE_SYMBOL_TABLE {
            by_language
                .entry(s.language)
                .or_default()
                .insert(s.code, s.symbol);
        }
        by_language
    });

pub trait CurrencyDatasource: Send + Sync {
    /// Display symbol of an ISO 4217 currency in the given locale.
    ///
    /// currency_code:
    ///   Upper-case ISO 4217 code (for example, 'USD').
    /// locale:
    ///   Locale the symbol will be displayed in. Both the region and the
    ///   language matter: the US dollar is displayed as '$' in the US, as
    ///   'US$' in the UK and as '$US' in France.
    fn symbol(&self, currency_code: &str, locale: &DisplayLocale) -> TranslatorResult<String>;
}

/// Resolves symbols from the built-in ISO 4217 table.
#[derive(Debug, Default, Clone, Copy)]
pub struct Iso4217CurrencyDatasource;

impl CurrencyDatasource for Iso4217CurrencyDatasource {
    fn symbol(&self, currency_code: &str, locale: &DisplayLocale) -> TranslatorResult<String> {
        let currency = CURRENCIES_BY_CODE
            .get(currency_code)
            .ok_or_else(|| TranslatorError::InvalidCurrencyCode(currency_code.to_string()))?;
        let language_symbol = SYMBOLS_BY_LANGUAGE
            .get(locale.language())
            .and_then(|symbols| symbols.get(currency.code))
            .copied();
        Ok(currency
            .symbol_for(locale.effective_region(), language_symbol)
            .to_string())
    }
}
