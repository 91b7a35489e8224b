//! Fixed-table currency conversion and display formatting.

mod currency;
mod currency_converter;

pub use currency::{display_symbol, inr_rate};
pub use currency_converter::{convert, format};
