//! Supported currency catalogue.
//!
//! The set is fixed at compile time. Anything outside it is rejected at the
//! boundary with [`Error::UnsupportedCurrency`] before conversion is attempted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_BASE_CURRENCY;
use crate::errors::{Error, Result};
use crate::utils::format_grouped;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CurrencyCode {
    Idr,
    Usd,
    Eur,
    Gbp,
    Jpy,
    Sgd,
    Myr,
    Aud,
    Cad,
    Chf,
}

impl CurrencyCode {
    /// Every supported code, in display order.
    pub const ALL: [CurrencyCode; 10] = [
        CurrencyCode::Idr,
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Gbp,
        CurrencyCode::Jpy,
        CurrencyCode::Sgd,
        CurrencyCode::Myr,
        CurrencyCode::Aud,
        CurrencyCode::Cad,
        CurrencyCode::Chf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Idr => "IDR",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Jpy => "JPY",
            CurrencyCode::Sgd => "SGD",
            CurrencyCode::Myr => "MYR",
            CurrencyCode::Aud => "AUD",
            CurrencyCode::Cad => "CAD",
            CurrencyCode::Chf => "CHF",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CurrencyCode::Idr => "Indonesian Rupiah",
            CurrencyCode::Usd => "US Dollar",
            CurrencyCode::Eur => "Euro",
            CurrencyCode::Gbp => "British Pound",
            CurrencyCode::Jpy => "Japanese Yen",
            CurrencyCode::Sgd => "Singapore Dollar",
            CurrencyCode::Myr => "Malaysian Ringgit",
            CurrencyCode::Aud => "Australian Dollar",
            CurrencyCode::Cad => "Canadian Dollar",
            CurrencyCode::Chf => "Swiss Franc",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Idr => "Rp",
            CurrencyCode::Usd => "$",
            CurrencyCode::Eur => "€",
            CurrencyCode::Gbp => "£",
            CurrencyCode::Jpy => "¥",
            CurrencyCode::Sgd => "S$",
            CurrencyCode::Myr => "RM",
            CurrencyCode::Aud => "A$",
            CurrencyCode::Cad => "C$",
            CurrencyCode::Chf => "CHF",
        }
    }

    /// Number of fraction digits shown when formatting amounts.
    pub fn display_fraction_digits(&self) -> u32 {
        match self {
            CurrencyCode::Idr | CurrencyCode::Jpy => 0,
            _ => 2,
        }
    }

    pub fn info(&self) -> CurrencyInfo {
        CurrencyInfo {
            name: self.name(),
            symbol: self.symbol(),
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        DEFAULT_BASE_CURRENCY
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase();
        CurrencyCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == normalized)
            .ok_or_else(|| Error::UnsupportedCurrency(s.trim().to_string()))
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

/// Display metadata for one supported currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    pub name: &'static str,
    pub symbol: &'static str,
}

/// The supported set as `code -> {name, symbol}`.
pub fn supported_currencies() -> BTreeMap<CurrencyCode, CurrencyInfo> {
    CurrencyCode::ALL
        .iter()
        .map(|code| (*code, code.info()))
        .collect()
}

pub fn is_supported_currency(code: &str) -> bool {
    code.parse::<CurrencyCode>().is_ok()
}

/// Formats `amount` for display: `Rp 1,500,000`, `$ 12.50`.
pub fn format_money(amount: Decimal, code: CurrencyCode) -> String {
    format!(
        "{} {}",
        code.symbol(),
        format_grouped(amount, code.display_fraction_digits())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_supported_codes() {
        for code in CurrencyCode::ALL {
            assert_eq!(code.as_str().parse::<CurrencyCode>().unwrap(), code);
        }
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::Usd);
        assert_eq!(" idr ".parse::<CurrencyCode>().unwrap(), CurrencyCode::Idr);
    }

    #[test]
    fn test_default_is_rupiah() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::Idr);
    }

    #[test]
    fn test_parse_unsupported_code() {
        let err = "BTC".parse::<CurrencyCode>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedCurrency(ref c) if c == "BTC"));
        assert!(!is_supported_currency("XXX"));
        assert!(!is_supported_currency(""));
    }

    #[test]
    fn test_supported_currencies_map() {
        let currencies = supported_currencies();
        assert_eq!(currencies.len(), 10);
        assert_eq!(
            currencies[&CurrencyCode::Idr],
            CurrencyInfo {
                name: "Indonesian Rupiah",
                symbol: "Rp"
            }
        );
        assert_eq!(currencies[&CurrencyCode::Sgd].symbol, "S$");
        assert_eq!(currencies[&CurrencyCode::Chf].symbol, "CHF");
    }

    #[test]
    fn test_supported_currencies_serialize_with_code_keys() {
        let json = serde_json::to_value(supported_currencies()).unwrap();
        assert_eq!(json["USD"]["name"], "US Dollar");
        assert_eq!(json["EUR"]["symbol"], "€");
    }

    #[test]
    fn test_serde_round_trip_rejects_unknown() {
        let code: CurrencyCode = serde_json::from_str("\"JPY\"").unwrap();
        assert_eq!(code, CurrencyCode::Jpy);
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"JPY\"");
        assert!(serde_json::from_str::<CurrencyCode>("\"DOGE\"").is_err());
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(1500000), CurrencyCode::Idr), "Rp 1,500,000");
        assert_eq!(format_money(dec!(12.5), CurrencyCode::Usd), "$ 12.50");
        assert_eq!(format_money(dec!(1234), CurrencyCode::Jpy), "¥ 1,234");
    }
}
