//! Persistent watchlist: a small symbol-keyed list of catalog rows that
//! survives restarts through a pluggable key/value storage port.

mod storage;
mod watchlist_model;
mod watchlist_service;
mod watchlist_traits;

pub use storage::{FileWatchlistStorage, MemoryWatchlistStorage};
pub use watchlist_model::WatchlistEntry;
pub use watchlist_service::WatchlistService;
pub use watchlist_traits::WatchlistStorage;
