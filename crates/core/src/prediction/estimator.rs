use std::sync::Arc;

use crate::rng::RandomSource;
use crate::utils::parse_price;

use super::PredictionEstimate;

/// Produces the dashboard's "AI prediction": a random bullish probability in
/// [35, 75] with its exact complement, and a target price perturbed by a
/// value in [-3, +7). The upward-skewed perturbation is intentional
/// optimistic framing, not a modeling artifact.
pub struct PredictionEstimator {
    rng: Arc<dyn RandomSource>,
}

impl PredictionEstimator {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    pub fn estimate(&self, current_price: &str) -> PredictionEstimate {
        let bullish = (35.0 + self.rng.next_f64() * 40.0).round() as u8;
        let bearish = 100 - bullish;

        let price = parse_price(current_price);
        let predicted = price + (self.rng.next_f64() * 10.0 - 3.0);

        PredictionEstimate {
            bullish_probability: bullish,
            bearish_probability: bearish,
            predicted_price: format!("{:.2}", predicted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRandomSource;

    fn estimator(seed: u64) -> PredictionEstimator {
        PredictionEstimator::new(Arc::new(SeededRandomSource::new(seed)))
    }

    #[test]
    fn probabilities_sum_to_one_hundred_within_bounds() {
        for seed in 0..200 {
            let estimate = estimator(seed).estimate("178.72");
            assert!((35..=75).contains(&estimate.bullish_probability));
            assert_eq!(
                estimate.bullish_probability as u16 + estimate.bearish_probability as u16,
                100
            );
        }
    }

    #[test]
    fn predicted_price_stays_within_the_perturbation_window() {
        for seed in 0..200 {
            let estimate = estimator(seed).estimate("100.00");
            let predicted: f64 = estimate.predicted_price.parse().unwrap();
            assert!(predicted >= 97.0 - 0.01, "below window: {}", predicted);
            assert!(predicted <= 107.0 + 0.01, "above window: {}", predicted);
        }
    }

    #[test]
    fn predicted_price_is_a_two_decimal_string() {
        let estimate = estimator(5).estimate("178.72");
        let (_, decimals) = estimate.predicted_price.split_once('.').unwrap();
        assert_eq!(decimals.len(), 2);
    }

    #[test]
    fn degenerate_prices_still_estimate() {
        for base in ["0", "-10.5", "junk"] {
            let estimate = estimator(9).estimate(base);
            let predicted: f64 = estimate.predicted_price.parse().unwrap();
            assert!(predicted.is_finite());
        }
    }
}
