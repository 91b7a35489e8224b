/// Storage namespace key for the persisted watchlist.
pub const WATCHLIST_STORAGE_KEY: &str = "stockWatchlist";

/// Trading currency assumed for rows that do not carry one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Currency all cross-rate conversions pivot through.
pub const PIVOT_CURRENCY: &str = "INR";
