//! Rate Resolver: remote provider first, static table second, 1 last.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

use spendwise_market_data::FxRateProvider;

use super::currency::CurrencyCode;
use super::fallback::fallback_rate;
use super::fx_model::{RateSource, ResolvedRate};
use super::fx_traits::RateResolverTrait;

/// Resolves rates through a single [`FxRateProvider`].
///
/// Each call that reaches the provider issues exactly one request, bounded by
/// the provider's own timeout. Any provider error is logged and replaced by
/// the fallback table.
#[derive(Clone)]
pub struct RateResolver {
    provider: Arc<dyn FxRateProvider>,
}

impl RateResolver {
    pub fn new(provider: Arc<dyn FxRateProvider>) -> Self {
        Self { provider }
    }

    fn degrade(from: CurrencyCode, to: CurrencyCode) -> ResolvedRate {
        match fallback_rate(from, to) {
            Some(rate) => {
                log::warn!("Using fallback rate {} for {}/{}", rate, from, to);
                ResolvedRate {
                    from,
                    to,
                    rate,
                    source: RateSource::Fallback,
                }
            }
            None => {
                log::warn!(
                    "No fallback rate for {}/{}, converting at 1.0 (missing table entry)",
                    from,
                    to
                );
                ResolvedRate {
                    from,
                    to,
                    rate: Decimal::ONE,
                    source: RateSource::Default,
                }
            }
        }
    }
}

#[async_trait]
impl RateResolverTrait for RateResolver {
    async fn resolve(&self, from: CurrencyCode, to: CurrencyCode) -> ResolvedRate {
        if from == to {
            return ResolvedRate::identity(from);
        }

        match self
            .provider
            .get_latest_rate(from.as_str(), to.as_str())
            .await
        {
            Ok(quote) => {
                log::debug!(
                    "{} rate for {}/{}: {}",
                    self.provider.id(),
                    from,
                    to,
                    quote.rate
                );
                ResolvedRate {
                    from,
                    to,
                    rate: quote.rate,
                    source: RateSource::Remote,
                }
            }
            Err(e) => {
                log::warn!(
                    "{} failed for {}/{}: {}",
                    self.provider.id(),
                    from,
                    to,
                    e
                );
                Self::degrade(from, to)
            }
        }
    }
}
