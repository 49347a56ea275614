//! Error types for the market data crate.
//!
//! Every failure mode of a remote rate lookup is represented here so that
//! callers can decide how to degrade. The core crate treats all of them the
//! same way (fall back to static rates), but the variant is still logged.

use thiserror::Error;

/// Errors that can occur while fetching an FX quote from a remote provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider answered with a non-success HTTP status.
    #[error("Unexpected status from {provider}: {status}")]
    HttpStatus {
        /// The provider that answered
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The response body could not be decoded.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The provider that returned the payload
        provider: String,
        /// Decoder message
        message: String,
    },

    /// The payload was valid but did not contain a rate for the target currency.
    #[error("Rate for {currency} missing from {provider} response")]
    RateNotFound {
        /// The provider that returned the payload
        provider: String,
        /// The target currency that was requested
        currency: String,
    },

    /// The provider returned a rate that is not a positive finite number.
    #[error("Invalid rate from {provider}: {value}")]
    InvalidRate {
        /// The provider that returned the rate
        provider: String,
        /// The raw value received
        value: f64,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Maps a transport error from `reqwest`, separating timeouts from other failures.
    pub fn from_transport(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }
}
