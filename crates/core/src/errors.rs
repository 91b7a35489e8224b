//! Core error types.
//!
//! Most in-scope operations are total by design (permissive currency
//! defaults, lenient price parsing, no-op watchlist mutations); errors here
//! cover the boundaries where input genuinely cannot be honored.

use thiserror::Error;

use tickerboard_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Unknown timeframe: {0}")]
    UnknownTimeframe(String),
}
