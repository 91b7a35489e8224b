//! Toy sentiment/price prediction.

mod estimator;
mod model;

pub use estimator::PredictionEstimator;
pub use model::PredictionEstimate;
