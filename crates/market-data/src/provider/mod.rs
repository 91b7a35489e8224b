//! Quote providers.

mod alpha_vantage;
mod traits;

pub use alpha_vantage::AlphaVantageProvider;
pub use traits::QuoteProvider;
