//! Error types for the quote-refresh edge.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The third-party API key was never configured. Callers surface this as
    /// a configuration error, not a transient failure.
    #[error("Quote API key is not configured: {0}")]
    MissingApiKey(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parsing error: {0}")]
    Parsing(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
