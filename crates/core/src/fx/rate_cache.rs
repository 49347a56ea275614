//! Rate Cache: time-bounded memoization in front of a [`RateResolverTrait`].

use async_trait::async_trait;
use chrono::Duration;
use dashmap::DashMap;
use std::sync::Arc;

use super::currency::CurrencyCode;
use super::fx_model::{CachedRate, ResolvedRate};
use super::fx_traits::RateResolverTrait;
use crate::constants::RATE_CACHE_TTL_SECS;
use crate::utils::{Clock, SystemClock};

/// Ordered pair: `(USD, IDR)` and `(IDR, USD)` are different keys.
type PairKey = (CurrencyCode, CurrencyCode);

/// Caches resolved rates per ordered currency pair for `ttl`.
///
/// Entries are replaced, never updated in place, and are never evicted. The
/// key space is bounded by the supported currency set. Concurrent misses on
/// the same pair may both resolve; the last write wins.
pub struct RateCache {
    resolver: Arc<dyn RateResolverTrait>,
    entries: DashMap<PairKey, CachedRate>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl RateCache {
    pub fn new(resolver: Arc<dyn RateResolverTrait>) -> Self {
        Self::with_clock(
            resolver,
            Duration::seconds(RATE_CACHE_TTL_SECS),
            Arc::new(SystemClock),
        )
    }

    pub fn with_clock(
        resolver: Arc<dyn RateResolverTrait>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            resolver,
            entries: DashMap::new(),
            ttl,
            clock,
        }
    }

    /// Returns the rate for `from -> to`, resolving it if there is no fresh entry.
    ///
    /// Same-currency lookups bypass the map entirely.
    pub async fn get(&self, from: CurrencyCode, to: CurrencyCode) -> ResolvedRate {
        if from == to {
            return ResolvedRate::identity(from);
        }

        let key = (from, to);
        let now = self.clock.now();

        // Copy out so the shard lock is released before any await.
        let cached = self.entries.get(&key).map(|entry| *entry.value());
        if let Some(cached) = cached {
            if cached.is_fresh(now, self.ttl) {
                log::debug!("Rate cache hit for {}/{}", from, to);
                return cached.resolved;
            }
        }

        log::debug!("Rate cache miss for {}/{}", from, to);
        let resolved = self.resolver.resolve(from, to).await;
        self.entries.insert(
            key,
            CachedRate {
                resolved,
                fetched_at: self.clock.now(),
            },
        );
        resolved
    }

    /// Number of stored pairs, stale entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, from: CurrencyCode, to: CurrencyCode) -> bool {
        self.entries.contains_key(&(from, to))
    }
}

#[async_trait]
impl RateResolverTrait for RateCache {
    async fn resolve(&self, from: CurrencyCode, to: CurrencyCode) -> ResolvedRate {
        self.get(from, to).await
    }
}
