use super::currency::{CurrencyCode, CurrencyInfo};
use super::fx_model::{ConvertedAmount, ExchangeRateQuote, ResolvedRate};
use crate::errors::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Turns an ordered currency pair into a rate.
///
/// Implementations never fail: when nothing better is available they return a
/// degraded [`ResolvedRate`] instead of an error.
#[async_trait]
pub trait RateResolverTrait: Send + Sync {
    async fn resolve(&self, from: CurrencyCode, to: CurrencyCode) -> ResolvedRate;
}

/// Trait defining the contract for FX service operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    /// Rate for `from -> to` through the cache.
    async fn get_exchange_rate(&self, from: CurrencyCode, to: CurrencyCode) -> ResolvedRate;

    /// Same as [`get_exchange_rate`](Self::get_exchange_rate) for raw codes,
    /// shaped for the exchange-rate lookup endpoint.
    async fn latest_quote(&self, from: &str, to: &str) -> Result<ExchangeRateQuote>;

    /// Converts through the cache. Rate lookup never fails; only an amount
    /// too large for the converted value is rejected.
    async fn convert_amount(
        &self,
        amount: Decimal,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<ConvertedAmount>;

    fn supported_currencies(&self) -> BTreeMap<CurrencyCode, CurrencyInfo>;
}
