//! Property-based tests for the rate cache and resolver.

use async_trait::async_trait;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use spendwise_core::constants::RATE_CACHE_TTL_SECS;
use spendwise_core::fx::{
    fallback_rate, CurrencyCode, RateCache, RateResolver, RateResolverTrait, RateSource,
    ResolvedRate,
};
use spendwise_core::utils::ManualClock;
use spendwise_market_data::{FxQuote, FxRateProvider, MarketDataError};

/// Records every pair it is asked for.
#[derive(Default)]
struct RecordingResolver {
    requests: Mutex<Vec<(CurrencyCode, CurrencyCode)>>,
}

#[async_trait]
impl RateResolverTrait for RecordingResolver {
    async fn resolve(&self, from: CurrencyCode, to: CurrencyCode) -> ResolvedRate {
        self.requests.lock().unwrap().push((from, to));
        ResolvedRate {
            from,
            to,
            rate: Decimal::TWO,
            source: RateSource::Remote,
        }
    }
}

struct FailingProvider(AtomicUsize);

#[async_trait]
impl FxRateProvider for FailingProvider {
    fn id(&self) -> &'static str {
        "FAILING"
    }

    async fn get_latest_rate(&self, _from: &str, _to: &str) -> Result<FxQuote, MarketDataError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Err(MarketDataError::Timeout {
            provider: "FAILING".to_string(),
        })
    }
}

fn arb_currency() -> impl Strategy<Value = CurrencyCode> {
    proptest::sample::select(CurrencyCode::ALL.to_vec())
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Looking up A->B never serves B->A, and identity pairs never reach the
    /// resolver or the map.
    #[test]
    fn prop_cache_is_directional(
        lookups in proptest::collection::vec((arb_currency(), arb_currency()), 1..40)
    ) {
        let resolver = Arc::new(RecordingResolver::default());
        let clock = Arc::new(ManualClock::new(chrono::Utc::now()));
        let cache = RateCache::with_clock(
            resolver.clone(),
            chrono::Duration::seconds(RATE_CACHE_TTL_SECS),
            clock,
        );

        runtime().block_on(async {
            for (from, to) in &lookups {
                cache.get(*from, *to).await;
            }
        });

        let requests = resolver.requests.lock().unwrap().clone();
        let mut distinct: Vec<_> = lookups.iter().copied().filter(|(f, t)| f != t).collect();
        distinct.sort();
        distinct.dedup();

        // Within one window every distinct ordered pair is resolved exactly once.
        let mut resolved = requests.clone();
        resolved.sort();
        prop_assert_eq!(&resolved, &distinct);
        prop_assert_eq!(cache.len(), distinct.len());
        prop_assert!(requests.iter().all(|(f, t)| f != t));
    }

    /// With the provider down, every rate is the table value or exactly 1.
    #[test]
    fn prop_failed_provider_falls_back(from in arb_currency(), to in arb_currency()) {
        let provider = Arc::new(FailingProvider(AtomicUsize::new(0)));
        let resolver = RateResolver::new(provider.clone());

        let resolved = runtime().block_on(resolver.resolve(from, to));

        if from == to {
            prop_assert_eq!(resolved.source, RateSource::Identity);
            prop_assert_eq!(provider.0.load(Ordering::SeqCst), 0);
        } else {
            prop_assert_eq!(provider.0.load(Ordering::SeqCst), 1);
            match fallback_rate(from, to) {
                Some(rate) => {
                    prop_assert_eq!(resolved.rate, rate);
                    prop_assert_eq!(resolved.source, RateSource::Fallback);
                }
                None => {
                    prop_assert_eq!(resolved.rate, Decimal::ONE);
                    prop_assert_eq!(resolved.source, RateSource::Default);
                }
            }
        }
    }
}
