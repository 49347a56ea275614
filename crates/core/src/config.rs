use std::time::Duration;

use crate::constants::{RATE_CACHE_TTL_SECS, RATE_REQUEST_TIMEOUT_SECS};
use crate::errors::{Error, Result};
use spendwise_market_data::provider::frankfurter::DEFAULT_BASE_URL;

pub const ENV_FX_BASE_URL: &str = "SPENDWISE_FX_BASE_URL";
pub const ENV_FX_TIMEOUT_SECS: &str = "SPENDWISE_FX_TIMEOUT_SECS";
pub const ENV_FX_CACHE_TTL_SECS: &str = "SPENDWISE_FX_CACHE_TTL_SECS";

/// Settings for the rate provider and the rate cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FxConfig {
    pub provider_base_url: String,
    pub request_timeout: Duration,
    pub cache_ttl: Duration,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            provider_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(RATE_REQUEST_TIMEOUT_SECS as u64),
            cache_ttl: Duration::from_secs(RATE_CACHE_TTL_SECS as u64),
        }
    }
}

impl FxConfig {
    /// Builds a validated config.
    ///
    /// The request timeout must be positive and the freshness window must not
    /// be negative. A zero window disables caching.
    pub fn new(base_url: &str, timeout_secs: i64, cache_ttl_secs: i64) -> Result<Self> {
        let base_url = base_url.trim();
        if base_url.is_empty() {
            return Err(Error::InvalidConfigValue(
                "provider base URL must not be empty".to_string(),
            ));
        }
        if timeout_secs <= 0 {
            return Err(Error::InvalidConfigValue(format!(
                "request timeout must be positive, got {}s",
                timeout_secs
            )));
        }
        if cache_ttl_secs < 0 {
            return Err(Error::InvalidConfigValue(format!(
                "cache freshness window must not be negative, got {}s",
                cache_ttl_secs
            )));
        }

        Ok(Self {
            provider_base_url: base_url.to_string(),
            request_timeout: Duration::from_secs(timeout_secs as u64),
            cache_ttl: Duration::from_secs(cache_ttl_secs as u64),
        })
    }

    /// Reads the config from the process environment, loading `.env` first.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Reads the config through `lookup`, falling back to defaults for unset keys.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_FX_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = parse_secs(&lookup, ENV_FX_TIMEOUT_SECS, RATE_REQUEST_TIMEOUT_SECS)?;
        let cache_ttl_secs = parse_secs(&lookup, ENV_FX_CACHE_TTL_SECS, RATE_CACHE_TTL_SECS)?;
        Self::new(&base_url, timeout_secs, cache_ttl_secs)
    }
}

fn parse_secs<F>(lookup: &F, key: &str, default: i64) -> Result<i64>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
            Error::InvalidConfigValue(format!(
                "{} must be a whole number of seconds, got '{}'",
                key, raw
            ))
        }),
    }
}
