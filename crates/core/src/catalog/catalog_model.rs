use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CURRENCY;
use crate::utils::parse_price;

/// A catalog row. Prices and deltas are carried as display strings; the
/// `*_value` accessors parse them leniently, mapping anything unparsable
/// to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub change: String,
    pub change_percent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(
        rename = "last_updated",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<String>,
}

impl Stock {
    pub fn price_value(&self) -> f64 {
        parse_price(&self.price)
    }

    pub fn change_value(&self) -> f64 {
        parse_price(&self.change)
    }

    pub fn currency_or_default(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    /// Formats a delta with an explicit sign for non-negative values,
    /// e.g. `+1.24` / `-0.31`.
    pub fn signed(value: f64) -> String {
        if value >= 0.0 {
            format!("+{:.2}", value)
        } else {
            format!("{:.2}", value)
        }
    }

    /// Same as [`Stock::signed`] with a trailing percent sign.
    pub fn signed_percent(value: f64) -> String {
        format!("{}%", Self::signed(value))
    }
}
