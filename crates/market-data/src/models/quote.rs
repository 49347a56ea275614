use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest FX rate for one ordered currency pair.
///
/// `rate` is the number of `to_currency` units per one `from_currency` unit.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FxQuote {
    pub from_currency: String,
    pub to_currency: String,
    pub rate: Decimal,
    /// Date the provider published the rate, if it reported one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_on: Option<String>,
    /// When the quote was received
    pub fetched_at: DateTime<Utc>,
    /// Source of the quote (FRANKFURTER, ...)
    pub source: String,
}

impl FxQuote {
    pub fn new(from_currency: &str, to_currency: &str, rate: Decimal, source: &str) -> Self {
        Self {
            from_currency: from_currency.to_string(),
            to_currency: to_currency.to_string(),
            rate,
            published_on: None,
            fetched_at: Utc::now(),
            source: source.to_string(),
        }
    }
}
