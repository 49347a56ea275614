//! Market data models
//!
//! - `quote` - A single FX rate quote returned by a provider

mod quote;

pub use quote::FxQuote;
