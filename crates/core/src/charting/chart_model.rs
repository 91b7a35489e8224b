use serde::{Deserialize, Serialize};

/// One plotted point: a time label and a price rounded to two decimals.
///
/// Sequences are chronological; plotting relies on the order, not on parsing
/// the labels back into dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub price: f64,
}
