use std::sync::{Arc, Mutex};

use log::warn;

use crate::catalog::Stock;
use crate::constants::WATCHLIST_STORAGE_KEY;
use crate::events::{DomainEvent, EventSink};

use super::WatchlistStorage;

/// Symbol-keyed watchlist with write-through persistence.
///
/// Mutations are total: persistence failures stay inside the storage port
/// and a malformed persisted payload rehydrates as an empty list. Events
/// fire only when the list actually changes, so a repeated add or a remove
/// of an absent symbol is silent.
pub struct WatchlistService {
    storage: Arc<dyn WatchlistStorage>,
    sink: Arc<dyn EventSink>,
    entries: Mutex<Vec<Stock>>,
}

impl WatchlistService {
    pub fn new(storage: Arc<dyn WatchlistStorage>, sink: Arc<dyn EventSink>) -> Self {
        let entries = Self::rehydrate(storage.as_ref());
        Self {
            storage,
            sink,
            entries: Mutex::new(entries),
        }
    }

    fn rehydrate(storage: &dyn WatchlistStorage) -> Vec<Stock> {
        let Some(raw) = storage.get(WATCHLIST_STORAGE_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("Discarding malformed watchlist payload: {}", err);
                Vec::new()
            }
        }
    }

    /// Appends the stock unless its symbol is already present.
    pub fn add(&self, stock: Stock) {
        let mut entries = self.lock();
        if entries.iter().any(|entry| entry.symbol == stock.symbol) {
            return;
        }
        let symbol = stock.symbol.clone();
        entries.push(stock);
        self.persist(&entries);
        drop(entries);
        self.sink.emit(DomainEvent::watchlist_added(symbol));
    }

    /// Removes by symbol; silently ignores symbols that are not listed.
    pub fn remove(&self, symbol: &str) {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|entry| entry.symbol != symbol);
        if entries.len() == before {
            return;
        }
        self.persist(&entries);
        drop(entries);
        self.sink.emit(DomainEvent::watchlist_removed(symbol));
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.lock().iter().any(|entry| entry.symbol == symbol)
    }

    /// Entries in insertion order.
    pub fn list(&self) -> Vec<Stock> {
        self.lock().clone()
    }

    fn persist(&self, entries: &[Stock]) {
        match serde_json::to_string(entries) {
            Ok(payload) => self.storage.set(WATCHLIST_STORAGE_KEY, &payload),
            Err(err) => warn!("Failed to serialize watchlist: {}", err),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Stock>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
