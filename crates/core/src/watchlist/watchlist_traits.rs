/// Key/value persistence port for the watchlist.
///
/// Implementations are infallible at this seam: failures are handled (and
/// logged) inside the implementation, and a failed read simply yields
/// `None`.
pub trait WatchlistStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn clear(&self, key: &str);
}
