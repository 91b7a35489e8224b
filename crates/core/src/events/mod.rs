//! Domain events.
//!
//! Plain facts emitted through a sink trait; the runtime adapter turns them
//! into UI notifications and re-renders.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
