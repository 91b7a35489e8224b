//! Quote-refresh edge for the tickerboard catalog.
//!
//! Provides the provider abstraction over third-party quote APIs, the wire
//! models exchanged with the surrounding application, and the exchange-suffix
//! resolver used to derive market and trading currency from a ticker symbol.

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

pub use errors::MarketDataError;
pub use models::{ProviderQuote, RefreshOutcome};
pub use provider::{AlphaVantageProvider, QuoteProvider};
