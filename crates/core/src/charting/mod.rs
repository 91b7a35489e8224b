//! Synthetic chart series generation.

mod chart_model;
mod series_generator;
mod timeframe;

pub use chart_model::ChartPoint;
pub use series_generator::SeriesGenerator;
pub use timeframe::Timeframe;
