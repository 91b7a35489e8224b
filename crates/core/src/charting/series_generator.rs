use std::sync::Arc;

use chrono::{Datelike, Duration, Local, Months, NaiveDate};

use crate::rng::RandomSource;
use crate::utils::{parse_price, round2};

use super::{ChartPoint, Timeframe};

/// Synthesizes a plausible-looking price path for a chart window.
///
/// Output is stochastic: two calls with identical inputs differ unless the
/// injected [`RandomSource`] is seeded. Multi-day windows re-perturb the
/// original base price per point instead of walking from the intraday tail,
/// with amplitude growing alongside the window; the wider spread stands in
/// for the wider uncertainty of longer horizons.
pub struct SeriesGenerator {
    rng: Arc<dyn RandomSource>,
}

impl SeriesGenerator {
    pub fn new(rng: Arc<dyn RandomSource>) -> Self {
        Self { rng }
    }

    pub fn generate(&self, base_price: &str, timeframe: Timeframe) -> Vec<ChartPoint> {
        let base = parse_price(base_price);
        let today = Local::now().date_naive();

        match timeframe {
            Timeframe::Intraday => self.intraday(base),
            Timeframe::Week => self.daily(base, today),
            Timeframe::Month => self.weekly(base, today, 4, 1, 0.08),
            Timeframe::ThreeMonths => self.weekly(base, today, 6, 2, 0.1),
            Timeframe::Year => self.monthly(base, today),
            Timeframe::All => self.yearly(base, today),
        }
    }

    /// 24 half-hour slots from 09:00. Cumulative walk, slight upward bias.
    fn intraday(&self, base: f64) -> Vec<ChartPoint> {
        let mut points = Vec::with_capacity(24);
        let mut price = base;

        for i in 0..24 {
            let hour = 9 + i / 2;
            let minute = (i % 2) * 30;
            price += (self.rng.next_f64() - 0.48) * 2.0;
            points.push(ChartPoint {
                label: format!("{}:{:02}", hour, minute),
                price: round2(price),
            });
        }

        points
    }

    /// One point per day ending today. Each day independently re-perturbs
    /// the base with a slight upward bias; no cumulative carry.
    fn daily(&self, base: f64, today: NaiveDate) -> Vec<ChartPoint> {
        (0..7)
            .map(|i| {
                let date = today - Duration::days(6 - i);
                let price = base + (self.rng.next_f64() - 0.45) * base * 0.05;
                ChartPoint {
                    label: date.format("%b %-d").to_string(),
                    price: round2(price),
                }
            })
            .collect()
    }

    /// Points at week multiples counted backward from today, then reversed
    /// into chronological order. Symmetric perturbation.
    fn weekly(
        &self,
        base: f64,
        today: NaiveDate,
        count: i64,
        week_step: i64,
        amplitude: f64,
    ) -> Vec<ChartPoint> {
        let mut points: Vec<ChartPoint> = (0..count)
            .map(|i| {
                let date = today - Duration::weeks(i * week_step);
                let price = base + (self.rng.next_f64() - 0.5) * base * amplitude;
                ChartPoint {
                    label: date.format("%b %-d").to_string(),
                    price: round2(price),
                }
            })
            .collect();
        points.reverse();
        points
    }

    /// Twelve monthly points, oldest first. Symmetric perturbation.
    fn monthly(&self, base: f64, today: NaiveDate) -> Vec<ChartPoint> {
        (0..12u32)
            .rev()
            .map(|i| {
                let date = today.checked_sub_months(Months::new(i)).unwrap_or(today);
                let price = base + (self.rng.next_f64() - 0.5) * base * 0.15;
                ChartPoint {
                    label: date.format("%b %Y").to_string(),
                    price: round2(price),
                }
            })
            .collect()
    }

    /// Five yearly points, oldest first. Multiplicative spread around the
    /// base, roughly 0.6x to 1.4x, no cumulative carry.
    fn yearly(&self, base: f64, today: NaiveDate) -> Vec<ChartPoint> {
        (0..5)
            .rev()
            .map(|i| {
                let year = today.year() - i;
                let price = base * (0.6 + self.rng.next_f64() * 0.8);
                ChartPoint {
                    label: year.to_string(),
                    price: round2(price),
                }
            })
            .collect()
    }
}
