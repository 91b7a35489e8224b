use serde::Serialize;

use crate::catalog::Stock;
use crate::charting::ChartPoint;
use crate::prediction::PredictionEstimate;

/// Everything one dashboard render needs for a single instrument.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stock: Stock,
    /// Price converted into the display currency and formatted for render.
    pub display_price: String,
    /// Day change converted and formatted the same way.
    pub display_change: String,
    pub chart: Vec<ChartPoint>,
    pub prediction: PredictionEstimate,
}
