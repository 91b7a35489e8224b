//! Core domain logic for the tickerboard stock dashboard.
//!
//! The surrounding application (page routing, component rendering, realtime
//! subscription wiring) consumes this crate through a narrow surface: it hands
//! catalog rows in, asks for chart series, predictions and formatted monetary
//! values, and mutates the watchlist on user action.

pub mod catalog;
pub mod charting;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod fx;
pub mod prediction;
pub mod rng;
pub mod settings;
pub mod utils;
pub mod watchlist;

pub use errors::{Error, Result};
