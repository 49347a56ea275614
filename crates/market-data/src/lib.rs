//! Spendwise Market Data Crate
//!
//! This crate fetches live FX rates from remote quote providers for the
//! Spendwise expense tracker.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +------------------+     +------------------+
//! |  Rate Resolver   | --> |  FxRateProvider  | --> |     FxQuote      |
//! |  (core crate)    |     |  (Frankfurter)   |     |                  |
//! +------------------+     +------------------+     +------------------+
//! ```
//!
//! Providers never fall back or retry on their own. Every failure is
//! returned as a [`MarketDataError`] and the core crate decides how to
//! degrade.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::FxQuote;
pub use provider::frankfurter::FrankfurterProvider;
pub use provider::FxRateProvider;
