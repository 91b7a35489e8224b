use crate::catalog::Stock;

/// Watchlist entries are full catalog rows, persisted verbatim so the list
/// can render without a catalog lookup after rehydration.
pub type WatchlistEntry = Stock;
