//! FX rate provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::FxQuote;

/// Trait for remote FX rate providers.
///
/// Implement this trait to add support for a new rate source.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use spendwise_market_data::{FxQuote, FxRateProvider, MarketDataError};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl FxRateProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_latest_rate(&self, from: &str, to: &str) -> Result<FxQuote, MarketDataError> {
///         Ok(FxQuote::new(from, to, rust_decimal::Decimal::ONE, self.id()))
///     }
/// }
/// ```
#[async_trait]
pub trait FxRateProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and on quotes.
    fn id(&self) -> &'static str;

    /// Fetch the latest rate for `from -> to`.
    ///
    /// Implementations issue at most one remote request per call and must
    /// bound it with a timeout.
    async fn get_latest_rate(&self, from: &str, to: &str) -> Result<FxQuote, MarketDataError>;
}
