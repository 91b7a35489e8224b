//! Static currency tables.
//!
//! Rates are a fixed snapshot expressed as units of INR per one unit of the
//! listed currency; INR is the pivot with rate 1.0. A live forex feed is out
//! of scope for this system.

/// INR per one unit of `code`, if the code is in the fixed table.
pub fn inr_rate(code: &str) -> Option<f64> {
    match code {
        "USD" => Some(83.11),
        "EUR" => Some(89.26),
        "GBP" => Some(104.98),
        "CAD" => Some(60.66),
        "AUD" => Some(54.71),
        "HKD" => Some(10.64),
        "TWD" => Some(2.58),
        "INR" => Some(1.0),
        _ => None,
    }
}

/// Display symbol for a currency code, if known.
pub fn display_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        "HKD" => Some("HK$"),
        "TWD" => Some("NT$"),
        "INR" => Some("₹"),
        _ => None,
    }
}
