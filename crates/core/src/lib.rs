//! Spendwise Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the Spendwise expense tracker:
//! currency conversion with a time-bounded rate cache, monthly budget
//! evaluation, and the transaction flow that ties them together.
//! It is database-agnostic and defines repository traits for a storage
//! crate to implement.

pub mod budget;
pub mod categories;
pub mod config;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod notifications;
pub mod transactions;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
