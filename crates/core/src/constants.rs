use crate::fx::CurrencyCode;

/// Base currency assigned to new users
pub const DEFAULT_BASE_CURRENCY: CurrencyCode = CurrencyCode::Idr;

/// Color given to categories created without one
pub const DEFAULT_CATEGORY_COLOR: &str = "#6B7280";

/// Seconds a cached exchange rate stays fresh
pub const RATE_CACHE_TTL_SECS: i64 = 3600;

/// Upper bound on one remote rate request
pub const RATE_REQUEST_TIMEOUT_SECS: i64 = 10;

/// Number of budget notifications returned by the recent-notifications query
pub const RECENT_NOTIFICATIONS_LIMIT: usize = 10;

/// Decimal precision for category share percentages
pub const SUMMARY_PERCENT_PRECISION: u32 = 2;
