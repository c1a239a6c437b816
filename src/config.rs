use std::fmt;

use once_cell::sync::OnceCell;

use crate::constants::{DISPLAY_LOCALE_ENV_VARS, FALLBACK_DISPLAY_LOCALE};

static DEFAULT_DISPLAY_LOCALE: OnceCell<DisplayLocale> = OnceCell::new();

/// Locale used to render display values such as currency symbols.
///
/// Only the language and region matter for symbol lookup; scripts, codesets
/// and modifiers are discarded when parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLocale {
    language: String,
    region: Option<String>,
}

impl DisplayLocale {
    /// Builds a locale from a language and an optional ISO 3166-1 alpha-2
    /// region. Regions unknown to ISO 3166 are dropped.
    pub fn new(language: &str, region: Option<&str>) -> Self {
        let region = region.map(str::to_ascii_uppercase).filter(|r| {
            let known = rust_iso3166::from_alpha2(r).is_some();
            if !known {
                tracing::warn!(region = %r, "Dropping unknown display locale region.");
            }
            known
        });
        Self {
            language: language.to_ascii_lowercase(),
            region,
        }
    }

    /// Parses POSIX (`en_US.UTF-8`, `C`, `POSIX`) and BCP-47 (`en-US`,
    /// `zh-Hant-TW`) locale names.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().split(['.', '@']).next().unwrap_or_default();
        if name.is_empty() {
            return None;
        }
        if name == "C" || name == "POSIX" {
            return Some(Self::new("en", None));
        }
        let mut subtags = name.split(['_', '-']);
        let language = subtags.next()?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }
        let region = subtags.find(|s| s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()));
        Some(Self::new(language, region))
    }

    /// Resolves the locale from the first of `BILLING_DISPLAY_LOCALE`,
    /// `LC_ALL`, `LC_MESSAGES` and `LANG` that holds a parseable value,
    /// defaulting to `en-US`.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same resolution as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        DISPLAY_LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| {
                let value = lookup(var).filter(|v| !v.is_empty())?;
                let locale = Self::parse(&value);
                if locale.is_none() {
                    tracing::debug!(
                        var = *var,
                        value = %value,
                        "Ignoring unparseable locale variable."
                    );
                }
                locale
            })
            .next()
            .or_else(|| Self::parse(FALLBACK_DISPLAY_LOCALE))
            .unwrap_or_else(|| Self::new("en", Some("US")))
    }

    /// The process-wide display locale. Resolved from the environment on first
    /// access unless `init_default` ran earlier; never changes afterwards.
    pub fn process_default() -> &'static DisplayLocale {
        DEFAULT_DISPLAY_LOCALE.get_or_init(Self::from_env)
    }

    /// Pins the process-wide display locale. Fails, returning the rejected
    /// locale, if the default was already initialised.
    pub fn init_default(locale: DisplayLocale) -> Result<(), DisplayLocale> {
        DEFAULT_DISPLAY_LOCALE.set(locale)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The explicit region, or the region most commonly associated with the
    /// language when none was given.
    pub fn effective_region(&self) -> Option<&str> {
        self.region().or_else(|| likely_region(&self.language))
    }
}

impl fmt::Display for DisplayLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

fn likely_region(language: &str) -> Option<&'static str> {
    Some(match language {
        "en" => "US",
        "fr" => "FR",
        "de" => "DE",
        "es" => "ES",
        "it" => "IT",
        "pt" => "BR",
        "nl" => "NL",
        "sv" => "SE",
        "da" => "DK",
        "nb" | "no" => "NO",
        "fi" => "FI",
        "pl" => "PL",
        "cs" => "CZ",
        "tr" => "TR",
        "ru" => "RU",
        "uk" => "UA",
        "ja" => "JP",
        "ko" => "KR",
        "zh" => "CN",
        "hi" => "IN",
        "th" => "TH",
        "vi" => "VN",
        "id" => "ID",
        "he" | "iw" => "IL",
        _ => return None,
    })
}
