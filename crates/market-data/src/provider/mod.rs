//! FX rate provider abstractions and implementations.
//!
//! This module contains:
//! - The `FxRateProvider` trait that all providers implement
//! - Concrete provider implementations (Frankfurter)
//!
//! Providers only report what the remote service said. Deciding what to do
//! when a provider fails is the caller's job.

mod traits;

pub mod frankfurter;

pub use traits::FxRateProvider;
