//! Domain event types.

use serde::{Deserialize, Serialize};

/// Events emitted by core services after a mutation or upstream change.
///
/// The surrounding application translates them into platform actions: a
/// toast for watchlist changes, a chart/prediction recompute for quote
/// updates, a transient error banner for failed refreshes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A catalog row was replaced or inserted.
    QuoteUpdated { symbol: String },

    /// A symbol entered or left the watchlist.
    WatchlistChanged { symbol: String, added: bool },

    /// An upstream refresh failed; data shown may be stale.
    RefreshFailed { message: String },
}

impl DomainEvent {
    pub fn quote_updated(symbol: impl Into<String>) -> Self {
        Self::QuoteUpdated {
            symbol: symbol.into(),
        }
    }

    pub fn watchlist_added(symbol: impl Into<String>) -> Self {
        Self::WatchlistChanged {
            symbol: symbol.into(),
            added: true,
        }
    }

    pub fn watchlist_removed(symbol: impl Into<String>) -> Self {
        Self::WatchlistChanged {
            symbol: symbol.into(),
            added: false,
        }
    }

    pub fn refresh_failed(message: impl Into<String>) -> Self {
        Self::RefreshFailed {
            message: message.into(),
        }
    }
}
