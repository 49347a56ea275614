//! Frankfurter provider for latest FX rates.
//!
//! Queries `GET {base}/latest?from={X}&to={Y}` and expects a JSON body of the
//! shape `{ "amount": 1.0, "base": "X", "date": "2024-01-15", "rates": { "Y": 15000.0 } }`.
//! Only `rates` is required.
//!
//! Note: the free public endpoint publishes rates once per working day.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::FxQuote;
use crate::provider::FxRateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "FRANKFURTER";

/// Public Frankfurter endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

/// Default HTTP request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Response body of the `/latest` endpoint
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    /// Date the rates were published
    #[serde(default)]
    date: Option<String>,
    /// Requested target currencies and their rates
    rates: HashMap<String, f64>,
}

/// Frankfurter FX rate provider.
///
/// # Example
///
/// ```ignore
/// use spendwise_market_data::FrankfurterProvider;
///
/// let provider = FrankfurterProvider::new(DEFAULT_BASE_URL, REQUEST_TIMEOUT);
/// let quote = provider.get_latest_rate("USD", "IDR").await?;
/// ```
pub struct FrankfurterProvider {
    client: Client,
    base_url: String,
}

impl FrankfurterProvider {
    /// Create a provider against `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn latest_url(&self) -> String {
        format!("{}/latest", self.base_url)
    }

    /// Extracts the rate for `to` from a `/latest` response body.
    fn parse_latest(body: &str, from: &str, to: &str) -> Result<FxQuote, MarketDataError> {
        let parsed: LatestRatesResponse =
            serde_json::from_str(body).map_err(|e| MarketDataError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        let raw = *parsed
            .rates
            .get(to)
            .ok_or_else(|| MarketDataError::RateNotFound {
                provider: PROVIDER_ID.to_string(),
                currency: to.to_string(),
            })?;

        if !raw.is_finite() || raw <= 0.0 {
            return Err(MarketDataError::InvalidRate {
                provider: PROVIDER_ID.to_string(),
                value: raw,
            });
        }

        let rate = Decimal::try_from(raw).map_err(|_| MarketDataError::InvalidRate {
            provider: PROVIDER_ID.to_string(),
            value: raw,
        })?;

        let mut quote = FxQuote::new(from, to, rate, PROVIDER_ID);
        quote.published_on = parsed.date;
        Ok(quote)
    }
}

impl Default for FrankfurterProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, REQUEST_TIMEOUT)
    }
}

#[async_trait]
impl FxRateProvider for FrankfurterProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_latest_rate(&self, from: &str, to: &str) -> Result<FxQuote, MarketDataError> {
        let response = self
            .client
            .get(self.latest_url())
            .query(&[("from", from), ("to", to)])
            .send()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(MarketDataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, e))?;

        Self::parse_latest(&body, from, to)
    }
}
