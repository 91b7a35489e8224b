use std::sync::{Arc, Mutex};

use chrono::Utc;
use log::warn;
use tickerboard_market_data::resolver;
use tickerboard_market_data::{ProviderQuote, QuoteProvider, RefreshOutcome};

use crate::rng::RandomSource;
use crate::utils::round2;

use super::Stock;

/// Session-scoped instrument catalog. Rows are keyed by symbol and kept in
/// insertion order; lookups for unknown symbols synthesize a placeholder row
/// so the rest of the pipeline never has to handle a missing instrument.
pub struct CatalogService {
    rows: Mutex<Vec<Stock>>,
    rng: Arc<dyn RandomSource>,
}

impl CatalogService {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            rng,
        }
    }

    pub fn with_rows(rng: Arc<dyn RandomSource>, rows: Vec<Stock>) -> Self {
        Self {
            rows: Mutex::new(rows),
            rng,
        }
    }

    /// Replaces the row with the same symbol, or appends.
    pub fn upsert(&self, stock: Stock) {
        let mut rows = self.lock();
        match rows.iter_mut().find(|row| row.symbol == stock.symbol) {
            Some(existing) => *existing = stock,
            None => rows.push(stock),
        }
    }

    pub fn get(&self, symbol: &str) -> Option<Stock> {
        self.lock().iter().find(|row| row.symbol == symbol).cloned()
    }

    pub fn list(&self) -> Vec<Stock> {
        self.lock().clone()
    }

    /// Returns the known row for `symbol`, or synthesizes a placeholder and
    /// remembers it for the rest of the session. Market and currency come
    /// from the symbol's exchange suffix.
    pub fn resolve(&self, symbol: &str) -> Stock {
        let symbol = symbol.to_uppercase();
        if let Some(existing) = self.get(&symbol) {
            return existing;
        }

        let price = 50.0 + self.rng.next_f64() * 500.0;
        let change = self.rng.next_f64() * 10.0 - 5.0;
        let change_percent = if price != 0.0 {
            change / price * 100.0
        } else {
            0.0
        };

        let placeholder = Stock {
            name: symbol.clone(),
            price: format!("{:.2}", price),
            change: Stock::signed(change),
            change_percent: Stock::signed_percent(change_percent),
            currency: Some(resolver::currency_for(&symbol).to_string()),
            market: Some(resolver::market_for(&symbol).to_string()),
            last_updated: None,
            symbol,
        };
        self.upsert(placeholder.clone());
        placeholder
    }

    /// Fetches a fresh quote for `symbol` and folds it into the catalog.
    /// Provider failures are logged and reported in the outcome; the
    /// last-known row stays in place.
    pub async fn refresh_symbol(
        &self,
        provider: &dyn QuoteProvider,
        symbol: &str,
    ) -> RefreshOutcome {
        match provider.latest_quote(symbol).await {
            Ok(quote) => {
                self.apply_refresh(&quote);
                RefreshOutcome::ok(quote)
            }
            Err(err) => {
                warn!(
                    "Quote refresh for {} via {} failed: {}",
                    symbol,
                    provider.name(),
                    err
                );
                RefreshOutcome::failed(err.to_string())
            }
        }
    }

    /// Upserts a provider quote as a catalog row, preserving the known name
    /// when the symbol was already present.
    pub fn apply_refresh(&self, quote: &ProviderQuote) {
        let name = self
            .get(&quote.symbol)
            .map(|row| row.name)
            .unwrap_or_else(|| quote.symbol.clone());

        self.upsert(Stock {
            symbol: quote.symbol.clone(),
            name,
            price: format!("{:.2}", quote.price),
            change: Stock::signed(quote.change),
            change_percent: Stock::signed_percent(quote.change_percent),
            currency: Some(resolver::currency_for(&quote.symbol).to_string()),
            market: Some(resolver::market_for(&quote.symbol).to_string()),
            last_updated: Some(Utc::now().to_rfc3339()),
        });
    }

    /// Bulk fallback refresh: nudges every row by a small random delta and
    /// restamps it, used when no per-symbol quote source is available.
    pub fn perturb_all(&self) {
        let now = Utc::now().to_rfc3339();
        let mut rows = self.lock();

        for row in rows.iter_mut() {
            let old_price = row.price_value();
            let delta = round2(self.rng.next_f64() * 2.0 - 1.0);
            let new_price = round2(old_price + delta);
            let percent = if old_price != 0.0 {
                delta / old_price * 100.0
            } else {
                0.0
            };

            row.price = format!("{:.2}", new_price);
            row.change = format!("{:.2}", delta);
            row.change_percent = Stock::signed_percent(percent);
            row.last_updated = Some(now.clone());
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Stock>> {
        self.rows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRandomSource;
    use async_trait::async_trait;
    use tickerboard_market_data::MarketDataError;

    fn service(seed: u64) -> CatalogService {
        CatalogService::new(Arc::new(SeededRandomSource::new(seed)))
    }

    fn row(symbol: &str, price: &str) -> Stock {
        Stock {
            symbol: symbol.to_string(),
            name: format!("{} Inc.", symbol),
            price: price.to_string(),
            change: "+1.00".to_string(),
            change_percent: "+0.50%".to_string(),
            currency: Some("USD".to_string()),
            market: Some("US".to_string()),
            last_updated: None,
        }
    }

    struct FixedProvider {
        quote: Option<ProviderQuote>,
    }

    #[async_trait]
    impl QuoteProvider for FixedProvider {
        fn name(&self) -> &'static str {
            "FIXED"
        }

        async fn latest_quote(&self, symbol: &str) -> Result<ProviderQuote, MarketDataError> {
            self.quote
                .clone()
                .ok_or_else(|| MarketDataError::NotFound(symbol.to_string()))
        }
    }

    #[test]
    fn upsert_replaces_by_symbol_and_keeps_order() {
        let catalog = service(1);
        catalog.upsert(row("AAPL", "178.72"));
        catalog.upsert(row("MSFT", "412.10"));
        catalog.upsert(row("AAPL", "180.00"));

        let rows = catalog.list();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].symbol, "AAPL");
        assert_eq!(rows[0].price, "180.00");
        assert_eq!(rows[1].symbol, "MSFT");
    }

    #[test]
    fn resolve_returns_known_rows_untouched() {
        let catalog = service(1);
        catalog.upsert(row("AAPL", "178.72"));
        assert_eq!(catalog.resolve("AAPL").price, "178.72");
    }

    #[test]
    fn resolve_synthesizes_and_remembers_placeholders() {
        let catalog = service(2);
        let first = catalog.resolve("0700.hk");

        assert_eq!(first.symbol, "0700.HK");
        assert_eq!(first.currency.as_deref(), Some("HKD"));
        assert_eq!(first.market.as_deref(), Some("Hong Kong"));
        let price = first.price_value();
        assert!((50.0..550.0).contains(&price));
        assert!((-5.0..5.0).contains(&first.change_value()));

        // Second resolve must hand back the same session row.
        assert_eq!(catalog.resolve("0700.HK"), first);
        assert_eq!(catalog.list().len(), 1);
    }

    #[tokio::test]
    async fn refresh_success_upserts_and_stamps_the_row() {
        let catalog = service(3);
        catalog.upsert(row("AAPL", "178.72"));

        let provider = FixedProvider {
            quote: Some(ProviderQuote {
                symbol: "AAPL".to_string(),
                price: 181.5,
                change: 2.78,
                change_percent: 1.56,
            }),
        };

        let outcome = catalog.refresh_symbol(&provider, "AAPL").await;
        assert!(outcome.success);

        let refreshed = catalog.get("AAPL").unwrap();
        assert_eq!(refreshed.price, "181.50");
        assert_eq!(refreshed.change, "+2.78");
        assert_eq!(refreshed.change_percent, "+1.56%");
        assert_eq!(refreshed.name, "AAPL Inc.");
        assert!(refreshed.last_updated.is_some());
    }

    #[tokio::test]
    async fn refresh_failure_keeps_the_last_known_row() {
        let catalog = service(3);
        catalog.upsert(row("AAPL", "178.72"));

        let provider = FixedProvider { quote: None };
        let outcome = catalog.refresh_symbol(&provider, "AAPL").await;

        assert!(!outcome.success);
        assert!(outcome.error.is_some());
        assert_eq!(catalog.get("AAPL").unwrap().price, "178.72");
    }

    #[test]
    fn perturb_all_restamps_every_row_within_the_delta_bound() {
        let catalog = service(4);
        catalog.upsert(row("AAPL", "178.72"));
        catalog.upsert(row("MSFT", "412.10"));

        catalog.perturb_all();

        let rows = catalog.list();
        assert_eq!(rows.len(), 2);
        for (before, after) in [("AAPL", 178.72), ("MSFT", 412.10)]
            .iter()
            .zip(rows.iter())
        {
            assert_eq!(before.0, after.symbol);
            assert!((after.price_value() - before.1).abs() <= 1.0 + 1e-9);
            assert!(after.change_percent.ends_with('%'));
            assert!(after.last_updated.is_some());
        }
    }
}
