use super::currency::{supported_currencies, CurrencyCode, CurrencyInfo};
use super::fx_model::{ConvertedAmount, ExchangeRateQuote, ResolvedRate};
use super::fx_traits::{FxServiceTrait, RateResolverTrait};
use super::rate_cache::RateCache;
use super::rate_resolver::RateResolver;
use crate::config::FxConfig;
use crate::errors::{Error, Result};
use crate::utils::{Clock, SystemClock};
use async_trait::async_trait;
use rust_decimal::Decimal;
use spendwise_market_data::{FrankfurterProvider, FxRateProvider};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Conversion entry point: every lookup goes through one shared [`RateCache`].
#[derive(Clone)]
pub struct FxService {
    cache: Arc<RateCache>,
    clock: Arc<dyn Clock>,
}

impl FxService {
    /// Wires the remote provider, the resolver and the cache from `config`.
    pub fn from_config(config: &FxConfig) -> Result<Self> {
        let provider: Arc<dyn FxRateProvider> = Arc::new(FrankfurterProvider::new(
            &config.provider_base_url,
            config.request_timeout,
        ));
        Self::with_provider(provider, config, Arc::new(SystemClock))
    }

    /// Same as [`from_config`](Self::from_config) with a caller-supplied
    /// provider. `clock` drives both cache freshness and quote timestamps.
    pub fn with_provider(
        provider: Arc<dyn FxRateProvider>,
        config: &FxConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let ttl = chrono::Duration::from_std(config.cache_ttl).map_err(|e| {
            Error::InvalidConfigValue(format!("cache freshness window out of range: {}", e))
        })?;
        let resolver: Arc<dyn RateResolverTrait> = Arc::new(RateResolver::new(provider));
        let cache = RateCache::with_clock(resolver, ttl, clock.clone());
        Ok(Self {
            cache: Arc::new(cache),
            clock,
        })
    }

    pub fn cache(&self) -> &Arc<RateCache> {
        &self.cache
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    async fn get_exchange_rate(&self, from: CurrencyCode, to: CurrencyCode) -> ResolvedRate {
        self.cache.get(from, to).await
    }

    async fn latest_quote(&self, from: &str, to: &str) -> Result<ExchangeRateQuote> {
        let from: CurrencyCode = from.parse()?;
        let to: CurrencyCode = to.parse()?;
        let resolved = self.get_exchange_rate(from, to).await;

        Ok(ExchangeRateQuote {
            from_currency: from,
            to_currency: to,
            exchange_rate: resolved.rate,
            source: resolved.source,
            timestamp: self.clock.now(),
        })
    }

    async fn convert_amount(
        &self,
        amount: Decimal,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<ConvertedAmount> {
        let resolved = self.get_exchange_rate(from, to).await;
        ConvertedAmount::from_resolved(amount, &resolved)
    }

    fn supported_currencies(&self) -> BTreeMap<CurrencyCode, CurrencyInfo> {
        supported_currencies()
    }
}
