use serde::{Deserialize, Serialize};

/// A bounded bullish/bearish split and a perturbed target price.
///
/// The probabilities always sum to exactly 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionEstimate {
    pub bullish_probability: u8,
    pub bearish_probability: u8,
    pub predicted_price: String,
}
