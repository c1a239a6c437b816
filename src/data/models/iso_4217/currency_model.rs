/// An ISO 4217 currency and how its symbol is displayed.
///
/// https://www.iso.org/iso-4217-currency-codes.html
///
/// Symbols follow the CLDR display names: a currency with a local symbol
/// (e.g. `$` for USD) uses it in the listed regions. Elsewhere, a symbol
/// specific to the display language (see `LANGUAGE_SYMBOL_TABLE`) takes
/// precedence over the English international symbol (e.g. `US$`). Without a
/// matching symbol, the code itself is displayed.
#[derive(Debug)]
pub(crate) struct CurrencyModel {
    pub(crate) code: &'static str,
    pub(crate) local_symbol: Option<&'static str>,
    /// ISO 3166-1 alpha-2 regions in which `local_symbol` is used.
    pub(crate) local_regions: &'static [&'static str],
    pub(crate) international_symbol: Option<&'static str>,
}

impl CurrencyModel {
    const fn code_only(code: &'static str) -> Self {
        Self {
            code,
            local_symbol: None,
            local_regions: &[],
            international_symbol: None,
        }
    }

    pub(crate) fn symbol_for(
        &self,
        region: Option<&str>,
        language_symbol: Option<&'static str>,
    ) -> &'static str {
        let is_local = region.is_some_and(|r| self.local_regions.iter().any(|l| *l == r));
        let local_symbol = if is_local { self.local_symbol } else { None };
        local_symbol
            .or(language_symbol)
            .or(self.international_symbol)
            .unwrap_or(self.code)
    }
}

/// Symbol of a currency as written in a given display language, where it
/// differs from the English one.
#[derive(Debug)]
pub(crate) struct LanguageSymbolModel {
    pub(crate) language: &'static str,
    pub(crate) code: &'static str,
    pub(crate) symbol: &'static str,
}

const fn lang(
    language: &'static str,
    code: &'static str,
    symbol: &'static str,
) -> LanguageSymbolModel {
    LanguageSymbolModel {
        language,
        code,
        symbol,
    }
}

pub(crate) static LANGUAGE_SYMBOL_TABLE: &[LanguageSymbolModel] = &[
    lang("de", "AUD", "AU$"),
    lang("de", "USD", "$"),
    lang("es", "GBP", "GBP"),
    lang("es", "JPY", "JPY"),
    lang("fr", "AUD", "$AU"),
    lang("fr", "CAD", "$CA"),
    lang("fr", "CNY", "CNY"),
    lang("fr", "GBP", "£GB"),
    lang("fr", "HKD", "$HK"),
    lang("fr", "JPY", "JPY"),
    lang("fr", "MXN", "$MX"),
    lang("fr", "NZD", "$NZ"),
    lang("fr", "SGD", "$SG"),
    lang("fr", "USD", "$US"),
    lang("it", "JPY", "JPY"),
    lang("it", "USD", "USD"),
    lang("ja", "CNY", "元"),
    lang("ja", "JPY", "￥"),
    lang("ja", "USD", "$"),
    lang("ko", "JPY", "JP¥"),
    lang("pt", "JPY", "JP¥"),
    lang("ru", "USD", "$"),
    lang("zh", "JPY", "JP¥"),
];

/// Active codes, fund codes, the X-codes for precious metals, testing and
/// "no currency", followed by withdrawn codes that are still accepted.
pub(crate) static CURRENCY_TABLE: &[CurrencyModel] = &[
    CurrencyModel::code_only("AED"),
    CurrencyModel::code_only("AFN"),
    CurrencyModel::code_only("ALL"),
    CurrencyModel::code_only("AMD"),
    CurrencyModel::code_only("ANG"),
    CurrencyModel::code_only("AOA"),
    CurrencyModel {
        code: "ARS",
        local_symbol: Some("$"),
        local_regions: &["AR"],
        international_symbol: None,
    },
    CurrencyModel {
        code: "AUD",
        local_symbol: Some("$"),
        local_regions: &["AU", "CC", "CX", "KI", "NF", "NR", "TV"],
        international_symbol: Some("A$"),
    },
    CurrencyModel::code_only("AWG"),
    CurrencyModel::code_only("AZN"),
    CurrencyModel::code_only("BAM"),
    CurrencyModel::code_only("BBD"),
    CurrencyModel {
        code: "BDT",
        local_symbol: Some("৳"),
        local_regions: &["BD"],
        international_symbol: None,
    },
    CurrencyModel::code_only("BGN"),
    CurrencyModel::code_only("BHD"),
    CurrencyModel::code_only("BIF"),
    CurrencyModel::code_only("BMD"),
    CurrencyModel::code_only("BND"),
    CurrencyModel::code_only("BOB"),
    CurrencyModel::code_only("BOV"),
    CurrencyModel {
        code: "BRL",
        local_symbol: None,
        local_regions: &[],
        international_symbol: Some("R$"),
    },
    CurrencyModel::code_only("BSD"),
    CurrencyModel::code_only("BTN"),
    CurrencyModel::code_only("BWP"),
    CurrencyModel::code_only("BYN"),
    CurrencyModel::code_only("BZD"),
    CurrencyModel {
        code: "CAD",
        local_symbol: Some("$"),
        local_regions: &["CA"],
        international_symbol: Some("CA$"),
    },
    CurrencyModel::code_only("CDF"),
    CurrencyModel::code_only("CHE"),
    CurrencyModel::code_only("CHF"),
    CurrencyModel::code_only("CHW"),
    CurrencyModel::code_only("CLF"),
    CurrencyModel {
        code: "CLP",
        local_symbol: Some("$"),
        local_regions: &["CL"],
        international_symbol: None,
    },
    CurrencyModel {
        code: "CNY",
        local_symbol: Some("¥"),
        local_regions: &["CN"],
        international_symbol: Some("CN¥"),
    },
    CurrencyModel {
        code: "COP",
        local_symbol: Some("$"),
        local_regions: &["CO"],
        international_symbol: None,
    },
    CurrencyModel::code_only("COU"),
    CurrencyModel::code_only("CRC"),
    CurrencyModel::code_only("CUC"),
    CurrencyModel::code_only("CUP"),
    CurrencyModel::code_only("CVE"),
    CurrencyModel {
        code: "CZK",
        local_symbol: Some("Kč"),
        local_regions: &["CZ"],
        international_symbol: None,
    },
    CurrencyModel::code_only("DJF"),
    CurrencyModel {
        code: "DKK",
        local_symbol: Some("kr."),
        local_regions: &["DK", "FO", "GL"],
        international_symbol: None,
    },
    CurrencyModel::code_only("DOP"),
    CurrencyModel::code_only("DZD"),
    CurrencyModel::code_only("EGP"),
    CurrencyModel::code_only("ERN"),
    CurrencyModel::code_only("ETB"),
    CurrencyModel {
        code: "EUR",
        local_symbol: None,
        local_regions: &[],
        international_symbol: Some("€"),
    },
    CurrencyModel::code_only("FJD"),
    CurrencyModel::code_only("FKP"),
    CurrencyModel {
        code: "GBP",
        local_symbol: None,
        local_regions: &[],
        international_symbol: Some("£"),
    },
    CurrencyModel::code_only("GEL"),
    CurrencyModel::code_only("GHS"),
    CurrencyModel::code_only("GIP"),
    CurrencyModel::code_only("GMD"),
    CurrencyModel::code_only("GNF"),
    CurrencyModel::code_only("GTQ"),
    CurrencyModel::code_only("GYD"),
    CurrencyModel {
        code: "HKD",
        local_symbol: Some("$"),
        local_regions: &["HK"],
        international_symbol: Some("HK$"),
    },
    CurrencyModel::code_only("HNL"),
    CurrencyModel::code_only("HTG"),
    CurrencyModel {
        code: "HUF",
        local_symbol: Some("Ft"),
        local_regions: &["HU"],
        international_symbol: None,
    },
    CurrencyModel {
        code: "IDR",
        local_symbol: Some("Rp"),
        local_regions: &["ID"],
        international_symbol: None,
    },
    CurrencyModel {
        code: "ILS",
        local_symbol: None,
        local_regions: &[],
        international_symbol: Some("₪"),
    },
    CurrencyModel {
        code: "INR",
        local_symbol: None,
        local_regions: &[],
        international_symbol: Some("₹"),
    },
    CurrencyModel::code_only("IQD"),
    CurrencyModel::code_only("IRR"),
    CurrencyModel::code_only("ISK"),
    CurrencyModel::code_only("JMD"),
    CurrencyModel::code_only("JOD"),
    CurrencyModel {
        code: "JPY",
        local_symbol: None,
        local_regions: &[],
        international_symbol: Some("¥"),
    },
    CurrencyModel::code_only("KES"),
    CurrencyModel::code_only("KGS"),
    CurrencyModel::code_only("KHR"),
    CurrencyModel::code_only("KMF"),
    CurrencyModel::code_only("KPW"),
    CurrencyModel {
        code: "KRW",
        local_symbol: None,
        local_regions: &[],
        international_symbol: Some("₩"),
    },
    CurrencyModel::code_only("KWD"),
    CurrencyModel::code_only("KYD"),
    CurrencyModel {
        code: "KZT",
        local_symbol: Some("₸"),
        local_regions: &["KZ"],
        international_symbol: None,
    },
    CurrencyModel::code_only("LAK"),
    CurrencyModel::code_only("LBP"),
    CurrencyModel {
        code: "LKR",
        local_symbol: Some("Rs."),
        local_regions: &["LK"],
        international_symbol: None,
    },
    CurrencyModel::code_only("LRD"),
    CurrencyModel::code_only("LSL"),
    CurrencyModel::code_only("LYD"),
    CurrencyModel::code_only("MAD"),
    CurrencyModel::code_only("MDL"),
    CurrencyModel::code_only("MGA"),
    CurrencyModel::code_only("MKD"),
    CurrencyModel::code_only("MMK"),
    CurrencyModel::code_only("MNT"),
    CurrencyModel::code_only("MOP"),
    CurrencyModel::code_only("MRU"),
    CurrencyModel::code_only("MUR"),
    CurrencyModel::code_only("MVR"),
    CurrencyModel::code_only("MWK"),
    CurrencyModel {
        code: "MXN",
        local_symbol: Some("$"),
        local_regions: &["MX"],
        international_symbol: Some("MX$"),
    },
    CurrencyModel::code_only("MXV"),
    CurrencyModel {
        code: "MYR",
        local_symbol: Some("RM"),
        local_regions: &["MY"],
        international_symbol: None,
    },
    CurrencyModel::code_only("MZN"),
    CurrencyModel::code_only("NAD"),
    CurrencyModel {
        code: "NGN",
        local_symbol: Some("₦"),
        local_regions: &["NG"],
        international_symbol: None,
    },
    CurrencyModel::code_only("NIO"),
    CurrencyModel {
        code: "NOK",
        local_symbol: Some("kr"),
        local_regions: &["NO", "BV", "SJ"],
        international_symbol: None,
    },
    CurrencyModel {
        code: "NPR",
        local_symbol: Some("नेरू"),
        local_regions: &["NP"],
        international_symbol: None,
    },
    CurrencyModel {
        code: "NZD",
        local_symbol: Some("$"),
        local_regions: &["NZ", "CK", "NU", "PN", "TK"],
        international_symbol: Some("NZ$"),
    },
    CurrencyModel::code_only("OMR"),
    CurrencyModel::code_only("PAB"),
    CurrencyModel::code_only("PEN"),
    CurrencyModel::code_only("PGK"),
    CurrencyModel {
        code: "PHP",
        local_symbol: None,
        local_regions: &[],
        international_symbol: Some("₱"),
    },
    CurrencyModel {
        code: "PKR",
        local_symbol: Some("Rs"),
        local_regions: &["PK"],
        international_symbol: None,
    },
    CurrencyModel {
        code: "PLN",
        local_symbol: Some("zł"),
        local_regions: &["PL"],
        international_symbol: None,
    },
    CurrencyModel::code_only("PYG"),
    CurrencyModel::code_only("QAR"),
    CurrencyModel::code_only("RON"),
    CurrencyModel::code_only("RSD"),
    CurrencyModel {
        code: "RUB",
        local_symbol: Some("₽"),
        local_regions: &["RU"],
        international_symbol: None,
    },
    CurrencyModel::code_only("RWF"),
    CurrencyModel::code_only("SAR"),
    CurrencyModel::code_only("SBD"),
    CurrencyModel::code_only("SCR"),
    CurrencyModel::code_only("SDG"),
    CurrencyModel {
        code: "SEK",
        local_symbol: Some("kr"),
        local_regions: &["SE"],
        international_symbol: None,
    },
    CurrencyModel {
        code: "SGD",
        local_symbol: Some("$"),
        local_regions: &["SG"],
        international_symbol: None,
    },
    CurrencyModel::code_only("SHP"),
    CurrencyModel::code_only("SLE"),
    CurrencyModel::code_only("SLL"),
    CurrencyModel::code_only("SOS"),
    CurrencyModel::code_only("SRD"),
    CurrencyModel::code_only("SSP"),
    CurrencyModel::code_only("STN"),
    CurrencyModel::code_only("SVC"),
    CurrencyModel::code_only("SYP"),
    CurrencyModel::code_only("SZL"),
    CurrencyModel {
        code: "THB",
        local_symbol: Some("฿"),
        local_regions: &["TH"],
        international_symbol: None,
    },
    CurrencyModel::code_only("TJS"),
    CurrencyModel::code_only("TMT"),
    CurrencyModel::code_only("TND"),
    CurrencyModel::code_only("TOP"),
    CurrencyModel {
        code: "TRY",
        local_symbol: Some("₺"),
        local_regions: &["TR"],
        international_symbol: None,
    },
    CurrencyModel::code_only("TTD"),
    CurrencyModel {
        code: "TWD",
        local_symbol: Some("$"),
        local_regions: &["TW"],
        international_symbol: Some("NT$"),
    },
    CurrencyModel::code_only("TZS"),
    CurrencyModel {
        code: "UAH",
        local_symbol: Some("₴"),
        local_regions: &["UA"],
        international_symbol: None,
    },
    CurrencyModel::code_only("UGX"),
    CurrencyModel {
        code: "USD",
        local_symbol: Some("$"),
        local_regions: &["US", "AS", "BQ", "EC", "FM", "GU", "IO", "MH", "MP", "PR", "PW", "SV", "TC", "TL", "UM", "VG", "VI"],
        international_symbol: Some("US$"),
    },
    CurrencyModel::code_only("USN"),
    CurrencyModel::code_only("UYI"),
    CurrencyModel::code_only("UYU"),
    CurrencyModel::code_only("UYW"),
    CurrencyModel::code_only("UZS"),
    CurrencyModel::code_only("VED"),
    CurrencyModel::code_only("VES"),
    CurrencyModel {
        code: "VND",
        local_symbol: None,
        local_regions: &[],
        international_symbol: Some("₫"),
    },
    CurrencyModel::code_only("VUV"),
    CurrencyModel::code_only("WST"),
    CurrencyModel {
        code: "XAF",
        local_symbol: None,
        local_regions: &[],
        international_symbol: Some("FCFA"),
    },
    CurrencyModel::code_only("XAG"),
    CurrencyModel::code_only("XAU"),
    CurrencyModel::code_only("XBA"),
    CurrencyModel::code_only("XBB"),
    CurrencyModel::code_only("XBC"),
    CurrencyModel::code_only("XBD"),
    CurrencyModel {
        code: "XCD",
        local_symbol: Some("$"),
        local_regions: &["AG", "AI", "DM", "GD", "KN", "LC", "MS", "VC"],
        international_symbol: Some("EC$"),
    },
    CurrencyModel::code_only("XDR"),
    CurrencyModel {
        code: "XOF",
        local_symbol: None,
        local_regions: &[],
        international_symbol: Some("F CFA"),
    },
    CurrencyModel::code_only("XPD"),
    CurrencyModel {
        code: "XPF",
        local_symbol: None,
        local_regions: &[],
        international_symbol: Some("CFPF"),
    },
    CurrencyModel::code_only("XPT"),
    CurrencyModel::code_only("XSU"),
    CurrencyModel::code_only("XTS"),
    CurrencyModel::code_only("XUA"),
    CurrencyModel::code_only("XXX"),
    CurrencyModel::code_only("YER"),
    CurrencyModel {
        code: "ZAR",
        local_symbol: Some("R"),
        local_regions: &["ZA", "LS", "NA"],
        international_symbol: None,
    },
    CurrencyModel::code_only("ZMW"),
    CurrencyModel::code_only("ZWL"),
    // Withdrawn.
    CurrencyModel::code_only("ADP"),
    CurrencyModel::code_only("AFA"),
    CurrencyModel::code_only("ATS"),
    CurrencyModel::code_only("AYM"),
    CurrencyModel::code_only("AZM"),
    CurrencyModel::code_only("BEF"),
    CurrencyModel::code_only("BGL"),
    CurrencyModel::code_only("BYB"),
    CurrencyModel::code_only("BYR"),
    CurrencyModel::code_only("CSD"),
    CurrencyModel::code_only("CYP"),
    CurrencyModel::code_only("DEM"),
    CurrencyModel::code_only("EEK"),
    CurrencyModel::code_only("ESP"),
    CurrencyModel::code_only("FIM"),
    CurrencyModel::code_only("FRF"),
    CurrencyModel::code_only("GHC"),
    CurrencyModel::code_only("GRD"),
    CurrencyModel::code_only("GWP"),
    CurrencyModel::code_only("HRK"),
    CurrencyModel::code_only("IEP"),
    CurrencyModel::code_only("ITL"),
    CurrencyModel::code_only("LTL"),
    CurrencyModel::code_only("LUF"),
    CurrencyModel::code_only("LVL"),
    CurrencyModel::code_only("MGF"),
    CurrencyModel::code_only("MRO"),
    CurrencyModel::code_only("MTL"),
    CurrencyModel::code_only("MZM"),
    CurrencyModel::code_only("NLG"),
    CurrencyModel::code_only("PTE"),
    CurrencyModel::code_only("ROL"),
    CurrencyModel::code_only("RUR"),
    CurrencyModel::code_only("SDD"),
    CurrencyModel::code_only("SIT"),
    CurrencyModel::code_only("SKK"),
    CurrencyModel::code_only("STD"),
    CurrencyModel::code_only("TMM"),
    CurrencyModel::code_only("TPE"),
    CurrencyModel::code_only("TRL"),
    CurrencyModel::code_only("VEB"),
    CurrencyModel::code_only("VEF"),
    CurrencyModel::code_only("XEU"),
    CurrencyModel::code_only("XFO"),
    CurrencyModel::code_only("XFU"),
    CurrencyModel::code_only("YUM"),
    CurrencyModel::code_only("ZMK"),
    CurrencyModel::code_only("ZWD"),
    CurrencyModel::code_only("ZWN"),
    CurrencyModel::code_only("ZWR"),
];
