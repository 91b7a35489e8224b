//! Wire models exchanged with the surrounding application.

mod quote;

pub use quote::*;
