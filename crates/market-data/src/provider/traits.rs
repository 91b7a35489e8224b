use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::ProviderQuote;

/// Contract for a third-party quote source.
///
/// Implementations may fail or stall arbitrarily; callers are expected to
/// keep serving last-known data when a fetch does not come back.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn latest_quote(&self, symbol: &str) -> Result<ProviderQuote, MarketDataError>;
}
