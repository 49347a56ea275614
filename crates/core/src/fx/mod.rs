//! FX (Foreign Exchange) module - currency catalogue, rate resolution and caching.

pub mod currency;
pub mod fallback;
mod fx_model;
mod fx_service;
mod fx_traits;
mod rate_cache;
mod rate_resolver;

pub use currency::{
    format_money, is_supported_currency, supported_currencies, CurrencyCode, CurrencyInfo,
};
pub use fallback::fallback_rate;
pub use fx_model::{CachedRate, ConvertedAmount, ExchangeRateQuote, RateSource, ResolvedRate};
pub use fx_service::FxService;
pub use fx_traits::{FxServiceTrait, RateResolverTrait};
pub use rate_cache::RateCache;
pub use rate_resolver::RateResolver;
