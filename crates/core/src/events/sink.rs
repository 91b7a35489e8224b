//! Event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::DomainEvent;

/// Receiver for domain events.
///
/// `emit` must be fast and non-blocking; delivery is best-effort and makes no
/// assumption about which thread consumes the event. A failing sink must not
/// affect the mutation that produced the event.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);
}

/// Discards every event; for tests and headless callers.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpEventSink;

impl EventSink for NoOpEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Collects emitted events so tests can assert on them.
#[derive(Clone, Default)]
pub struct MockEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MockEventSink {
    fn emit(&self, event: DomainEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_sink_collects_in_order() {
        let sink = MockEventSink::new();
        assert!(sink.is_empty());

        sink.emit(DomainEvent::quote_updated("AAPL"));
        sink.emit(DomainEvent::watchlist_removed("MSFT"));

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], DomainEvent::quote_updated("AAPL"));
    }

    #[test]
    fn noop_sink_accepts_events() {
        NoOpEventSink.emit(DomainEvent::refresh_failed("timeout"));
    }
}
