//! Locale hints and their native currencies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LocaleError;
use crate::models::amount::CurrencyCode;

/// Region/language identifier supplied by the caller.
///
/// Accepts BCP-47 style tags (`fr-FR`, `zh-Hant-TW`), POSIX style tags
/// (`en_CA`) and bare uppercase regions (`FR`). Only the region matters:
/// it selects the native currency used to disambiguate symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleHint {
    language: Option<String>,
    region: Option<String>,
}

impl LocaleHint {
    /// Build a hint from a region code alone (`"CA"`, `"ch"`).
    pub fn from_region(region: &str) -> Result<Self, LocaleError> {
        if !is_region_subtag(region) {
            return Err(LocaleError::InvalidSubtag {
                tag: region.to_string(),
                subtag: region.to_string(),
            });
        }
        Ok(Self {
            language: None,
            region: Some(region.to_ascii_uppercase()),
        })
    }

    /// Lowercase language subtag, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Uppercase region subtag, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Currency in everyday use in the hint's region.
    pub fn currency(&self) -> Option<CurrencyCode> {
        self.region
            .as_deref()
            .and_then(region_currency)
            .and_then(CurrencyCode::new)
    }
}

impl FromStr for LocaleHint {
    type Err = LocaleError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }

        let mut subtags = tag.split(['-', '_']).peekable();
        let first = subtags.next().unwrap_or_default();

        // A lone uppercase pair is a region ("FR"); lowercase is a language ("fr").
        if subtags.peek().is_none() && first.len() == 2 && first.chars().all(|c| c.is_ascii_uppercase()) {
            return Self::from_region(first);
        }

        Self::from_parts(tag, first, subtags)
    }
}

impl LocaleHint {
    fn from_parts<'a>(
        tag: &str,
        language: &str,
        rest: impl Iterator<Item = &'a str>,
    ) -> Result<Self, LocaleError> {
        let invalid = |subtag: &str| LocaleError::InvalidSubtag {
            tag: tag.to_string(),
            subtag: subtag.to_string(),
        };

        if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid(language));
        }

        let mut region = None;
        for subtag in rest {
            if subtag.is_empty() || !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(invalid(subtag));
            }
            // Scripts, variants and extensions are accepted and ignored.
            if region.is_none() && is_region_subtag(subtag) {
                region = Some(subtag.to_ascii_uppercase());
            }
        }

        Ok(Self {
            language: Some(language.to_ascii_lowercase()),
            region,
        })
    }
}

impl TryFrom<String> for LocaleHint {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LocaleHint> for String {
    fn from(hint: LocaleHint) -> Self {
        hint.to_string()
    }
}

impl fmt::Display for LocaleHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.language, &self.region) {
            (Some(language), Some(region)) => write!(f, "{}-{}", language, region),
            (Some(language), None) => write!(f, "{}", language),
            (None, Some(region)) => write!(f, "{}", region),
            (None, None) => Ok(()),
        }
    }
}

/// Two letters (ISO-3166) or three digits (UN M.49).
fn is_region_subtag(subtag: &str) -> bool {
    (subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()))
        || (subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit()))
}

/// Native currency of an uppercase ISO-3166 region.
pub fn region_currency(region: &str) -> Option<&'static str> {
    let code = match region {
        // Euro area and euro users
        "AD" | "AT" | "AX" | "BE" | "BG" | "BL" | "CY" | "DE" | "EE" | "ES" | "FI" | "FR"
        | "GF" | "GP" | "GR" | "HR" | "IE" | "IT" | "LT" | "LU" | "LV" | "MC" | "ME" | "MF"
        | "MQ" | "MT" | "NL" | "PM" | "PT" | "RE" | "SI" | "SK" | "SM" | "VA" | "XK" | "YT" => {
            "EUR"
        }

        // US dollar
        "AS" | "BQ" | "EC" | "FM" | "GU" | "IO" | "MH" | "MP" | "PR" | "PW" | "SV" | "TC"
        | "TL" | "UM" | "US" | "VG" | "VI" => "USD",

        // Other dollars and pounds
        "CA" => "CAD",
        "AU" | "CX" | "CC" | "KI" | "NF" | "NR" | "TV" => "AUD",
        "NZ" | "CK" | "NU" | "PN" | "TK" => "NZD",
        "SG" => "SGD",
        "HK" => "HKD",
        "TW" => "TWD",
        "GB" | "GG" | "IM" | "JE" => "GBP",
        "GI" => "GIP",
        "FK" => "FKP",
        "SH" => "SHP",

        // Europe outside the euro
        "CH" | "LI" => "CHF",
        "SE" => "SEK",
        "NO" | "SJ" | "BV" => "NOK",
        "DK" | "FO" | "GL" => "DKK",
        "IS" => "ISK",
        "PL" => "PLN",
        "CZ" => "CZK",
        "HU" => "HUF",
        "RO" => "RON",
        "RS" => "RSD",
        "MK" => "MKD",
        "AL" => "ALL",
        "BA" => "BAM",
        "MD" => "MDL",
        "UA" => "UAH",
        "BY" => "BYN",
        "RU" => "RUB",
        "GE" => "GEL",
        "AM" => "AMD",
        "AZ" => "AZN",
        "TR" => "TRY",

        // Middle East and North Africa
        "IL" | "PS" => "ILS",
        "JO" => "JOD",
        "LB" => "LBP",
        "SY" => "SYP",
        "IQ" => "IQD",
        "IR" => "IRR",
        "SA" => "SAR",
        "AE" => "AED",
        "QA" => "QAR",
        "KW" => "KWD",
        "BH" => "BHD",
        "OM" => "OMR",
        "YE" => "YER",
        "EG" => "EGP",
        "MA" | "EH" => "MAD",
        "DZ" => "DZD",
        "TN" => "TND",
        "LY" => "LYD",

        // Sub-Saharan Africa
        "BJ" | "BF" | "CI" | "GW" | "ML" | "NE" | "SN" | "TG" => "XOF",
        "CM" | "CF" | "CG" | "GA" | "GQ" | "TD" => "XAF",
        "NG" => "NGN",
        "GH" => "GHS",
        "KE" => "KES",
        "UG" => "UGX",
        "TZ" => "TZS",
        "RW" => "RWF",
        "BI" => "BIF",
        "ET" => "ETB",
        "ER" => "ERN",
        "DJ" => "DJF",
        "SO" => "SOS",
        "SD" => "SDG",
        "SS" => "SSP",
        "CD" => "CDF",
        "AO" => "AOA",
        "ZM" => "ZMW",
        "MW" => "MWK",
        "MZ" => "MZN",
        "ZA" => "ZAR",
        "NA" => "NAD",
        "BW" => "BWP",
        "LS" => "LSL",
        "SZ" => "SZL",
        "MG" => "MGA",
        "MU" => "MUR",
        "SC" => "SCR",
        "KM" => "KMF",
        "SL" => "SLE",
        "LR" => "LRD",
        "GM" => "GMD",
        "GN" => "GNF",
        "CV" => "CVE",
        "MR" => "MRU",
        "ST" => "STN",

        // Americas
        "MX" => "MXN",
        "GT" => "GTQ",
        "HN" => "HNL",
        "NI" => "NIO",
        "CR" => "CRC",
        "PA" => "PAB",
        "CU" => "CUP",
        "DO" => "DOP",
        "HT" => "HTG",
        "JM" => "JMD",
        "TT" => "TTD",
        "BB" => "BBD",
        "BS" => "BSD",
        "BZ" => "BZD",
        "KY" => "KYD",
        "BM" => "BMD",
        "AW" => "AWG",
        "AG" | "AI" | "DM" | "GD" | "KN" | "LC" | "MS" | "VC" => "XCD",
        "BR" => "BRL",
        "AR" => "ARS",
        "CL" => "CLP",
        "CO" => "COP",
        "PE" => "PEN",
        "BO" => "BOB",
        "PY" => "PYG",
        "UY" => "UYU",
        "VE" => "VES",
        "GY" => "GYD",
        "SR" => "SRD",

        // Asia and Pacific
        "JP" => "JPY",
        "CN" => "CNY",
        "MO" => "MOP",
        "KR" => "KRW",
        "KP" => "KPW",
        "MN" => "MNT",
        "IN" => "INR",
        "PK" => "PKR",
        "BD" => "BDT",
        "LK" => "LKR",
        "NP" => "NPR",
        "BT" => "BTN",
        "MV" => "MVR",
        "AF" => "AFN",
        "KZ" => "KZT",
        "UZ" => "UZS",
        "KG" => "KGS",
        "TJ" => "TJS",
        "TM" => "TMT",
        "TH" => "THB",
        "VN" => "VND",
        "LA" => "LAK",
        "KH" => "KHR",
        "MM" => "MMK",
        "MY" => "MYR",
        "BN" => "BND",
        "ID" => "IDR",
        "PH" => "PHP",
        "PG" => "PGK",
        "FJ" => "FJD",
        "WS" => "WST",
        "TO" => "TOP",
        "VU" => "VUV",
        "SB" => "SBD",
        "NC" | "PF" | "WF" => "XPF",

        _ => return None,
    };
    Some(code)
}
