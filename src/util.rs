use crate::{
    config::DisplayLocale,
    data::datasources::currency_datasource::{CurrencyDatasource, Iso4217CurrencyDatasource},
    errors::{TranslatorError, TranslatorResult},
};

/// Currency lookups bound to a display locale.
pub struct CurrencyUtil<D: CurrencyDatasource> {
    currency_datasource: D,
    display_locale: DisplayLocale,
}

impl<D: CurrencyDatasource> CurrencyUtil<D> {
    pub fn with_datasource(currency_datasource: D, display_locale: DisplayLocale) -> Self {
        Self {
            currency_datasource,
            display_locale,
        }
    }

    /// Symbol of the currency in this util's display locale, or the ISO 4217
    /// code itself if the locale has no dedicated symbol for it.
    pub fn currency_symbol_from_code(
        &self,
        currency_code: Option<&str>,
    ) -> TranslatorResult<String> {
        let currency_code = currency_code.ok_or(TranslatorError::MissingCurrencyCode)?;
        self.currency_datasource
            .symbol(currency_code, &self.display_locale)
    }
}

impl CurrencyUtil<Iso4217CurrencyDatasource> {
    /// Uses the process-wide display locale.
    pub fn new() -> Self {
        Self::for_locale(DisplayLocale::process_default().clone())
    }

    pub fn for_locale(display_locale: DisplayLocale) -> Self {
        Self::with_datasource(Iso4217CurrencyDatasource, display_locale)
    }
}

impl Default for CurrencyUtil<Iso4217CurrencyDatasource> {
    fn default() -> Self {
        Self::new()
    }
}
