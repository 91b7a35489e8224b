use std::sync::{Arc, Mutex};

use crate::catalog::{CatalogService, Stock};
use crate::charting::{SeriesGenerator, Timeframe};
use crate::events::{DomainEvent, EventSink};
use crate::fx;
use crate::prediction::PredictionEstimator;
use crate::rng::RandomSource;
use crate::settings::Settings;

use super::DashboardView;

/// Wires the catalog, chart generator, estimator and currency conversion
/// into one render pipeline, and tracks which instrument is on screen so a
/// live row update only triggers a recompute when it is visible.
pub struct DashboardService {
    catalog: Arc<CatalogService>,
    series: SeriesGenerator,
    estimator: PredictionEstimator,
    settings: Settings,
    sink: Arc<dyn EventSink>,
    current: Mutex<Option<(String, Timeframe)>>,
}

impl DashboardService {
    pub fn new(
        catalog: Arc<CatalogService>,
        rng: Arc<dyn RandomSource>,
        settings: Settings,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            catalog,
            series: SeriesGenerator::new(rng.clone()),
            estimator: PredictionEstimator::new(rng),
            settings,
            sink,
            current: Mutex::new(None),
        }
    }

    /// Builds the full view for a symbol and window, and remembers the pair
    /// as the on-screen selection. Unknown symbols resolve to placeholder
    /// rows, so this is total.
    pub fn view(&self, symbol: &str, timeframe: Timeframe) -> DashboardView {
        let stock = self.catalog.resolve(symbol);
        *self.current_lock() = Some((stock.symbol.clone(), timeframe));
        self.render(stock, timeframe)
    }

    /// Live-update entry point. The row is folded into the catalog and a
    /// `QuoteUpdated` event is emitted; the view is recomputed only when the
    /// row is the one currently displayed.
    pub fn on_row_changed(&self, stock: Stock) -> Option<DashboardView> {
        let symbol = stock.symbol.clone();
        self.catalog.upsert(stock.clone());
        self.sink.emit(DomainEvent::quote_updated(symbol.clone()));

        let current = self.current_lock().clone();
        match current {
            Some((displayed, timeframe)) if displayed == symbol => {
                Some(self.render(stock, timeframe))
            }
            _ => None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn render(&self, stock: Stock, timeframe: Timeframe) -> DashboardView {
        let chart = self.series.generate(&stock.price, timeframe);
        let prediction = self.estimator.estimate(&stock.price);

        let from = stock.currency_or_default().to_string();
        let to = &self.settings.display_currency;
        let price = fx::convert(stock.price_value(), &from, to);
        let change = fx::convert(stock.change_value(), &from, to);

        DashboardView {
            display_price: fx::format(price, to),
            display_change: fx::format(change, to),
            chart,
            prediction,
            stock,
        }
    }

    fn current_lock(&self) -> std::sync::MutexGuard<'_, Option<(String, Timeframe)>> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
