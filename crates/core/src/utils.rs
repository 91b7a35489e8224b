//! Small numeric helpers shared across the domain modules.

/// Lenient decimal-string parse. Catalog prices travel as strings; anything
/// that does not parse to a finite number degrades to 0.0 rather than
/// propagating an error (upstream data may be stale or placeholder).
pub fn parse_price(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .unwrap_or(0.0)
}

/// Rounds to two decimals, the precision every emitted price carries.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_handles_valid_and_junk_input() {
        assert_eq!(parse_price("178.72"), 178.72);
        assert_eq!(parse_price("  -3.5 "), -3.5);
        assert_eq!(parse_price("not a number"), 0.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("NaN"), 0.0);
        assert_eq!(parse_price("inf"), 0.0);
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(2.344), 2.34);
        assert_eq!(round2(-1.236), -1.24);
        assert_eq!(round2(100.0), 100.0);
    }
}
