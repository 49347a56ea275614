//! Core error types for the Spendwise application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! are converted to these types by whichever crate implements the repository
//! traits.
//!
//! Rate lookups and budget checks degrade instead of failing, so most of
//! these variants come from boundary validation or repositories.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the expense tracker.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Failed to parse date: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}
