use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;
use crate::errors::{Result, ValidationError};

/// How a rate was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateSource {
    /// Same currency on both sides, no lookup performed.
    Identity,
    /// Live quote from the remote provider.
    Remote,
    /// Static table after the provider failed.
    Fallback,
    /// Provider failed and the static table had no entry; the rate is 1.
    Default,
}

impl RateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateSource::Identity => "IDENTITY",
            RateSource::Remote => "REMOTE",
            RateSource::Fallback => "FALLBACK",
            RateSource::Default => "DEFAULT",
        }
    }
}

/// Outcome of resolving one ordered currency pair.
///
/// Resolution never fails; degraded outcomes are visible through `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRate {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub rate: Decimal,
    pub source: RateSource,
}

impl ResolvedRate {
    pub fn identity(code: CurrencyCode) -> Self {
        Self {
            from: code,
            to: code,
            rate: Decimal::ONE,
            source: RateSource::Identity,
        }
    }

    /// True when the rate did not come from the provider or identity.
    pub fn is_degraded(&self) -> bool {
        matches!(self.source, RateSource::Fallback | RateSource::Default)
    }
}

/// Cache entry. Superseded by a fresh lookup once stale, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachedRate {
    pub resolved: ResolvedRate,
    pub fetched_at: DateTime<Utc>,
}

impl CachedRate {
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: chrono::Duration) -> bool {
        now - self.fetched_at < ttl
    }
}

/// Response of the exchange-rate lookup operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateQuote {
    pub from_currency: CurrencyCode,
    pub to_currency: CurrencyCode,
    pub exchange_rate: Decimal,
    pub source: RateSource,
    pub timestamp: DateTime<Utc>,
}

/// Response of the convert-amount operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertedAmount {
    pub original_amount: Decimal,
    pub original_currency: CurrencyCode,
    pub converted_amount: Decimal,
    pub converted_currency: CurrencyCode,
    pub exchange_rate: Decimal,
    pub source: RateSource,
}

impl ConvertedAmount {
    /// Applies `resolved` to `amount`. Identity rates leave the amount untouched.
    ///
    /// Fails with a validation error when the converted amount does not fit
    /// in a `Decimal`.
    pub fn from_resolved(amount: Decimal, resolved: &ResolvedRate) -> Result<Self> {
        let converted_amount = match resolved.source {
            RateSource::Identity => amount,
            _ => amount.checked_mul(resolved.rate).ok_or_else(|| {
                ValidationError::InvalidInput(format!(
                    "Amount {} {} is too large to convert to {}",
                    amount, resolved.from, resolved.to
                ))
            })?,
        };
        Ok(Self {
            original_amount: amount,
            original_currency: resolved.from,
            converted_amount,
            converted_currency: resolved.to,
            exchange_rate: resolved.rate,
            source: resolved.source,
        })
    }
}
