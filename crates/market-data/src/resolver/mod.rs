//! Symbol resolution helpers.

mod exchange_suffixes;

pub use exchange_suffixes::*;
