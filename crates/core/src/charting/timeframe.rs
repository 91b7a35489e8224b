use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Chart window. Each variant pins a point count, a label format and a
/// perturbation amplitude for the series generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1D")]
    Intraday,
    #[serde(rename = "1W")]
    Week,
    #[serde(rename = "1M")]
    Month,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "1Y")]
    Year,
    #[serde(rename = "ALL")]
    All,
}

impl Timeframe {
    pub const ALL_FRAMES: [Timeframe; 6] = [
        Timeframe::Intraday,
        Timeframe::Week,
        Timeframe::Month,
        Timeframe::ThreeMonths,
        Timeframe::Year,
        Timeframe::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Intraday => "1D",
            Timeframe::Week => "1W",
            Timeframe::Month => "1M",
            Timeframe::ThreeMonths => "3M",
            Timeframe::Year => "1Y",
            Timeframe::All => "ALL",
        }
    }

    /// Number of points a generated series carries for this window.
    pub fn point_count(&self) -> usize {
        match self {
            Timeframe::Intraday => 24,
            Timeframe::Week => 7,
            Timeframe::Month => 4,
            Timeframe::ThreeMonths => 6,
            Timeframe::Year => 12,
            Timeframe::All => 5,
        }
    }

    /// Parses a window label, falling back to the intraday window for
    /// anything unrecognized.
    pub fn parse_or_intraday(raw: &str) -> Timeframe {
        raw.parse().unwrap_or(Timeframe::Intraday)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "1D" => Ok(Timeframe::Intraday),
            "1W" => Ok(Timeframe::Week),
            "1M" => Ok(Timeframe::Month),
            "3M" => Ok(Timeframe::ThreeMonths),
            "1Y" => Ok(Timeframe::Year),
            "ALL" => Ok(Timeframe::All),
            other => Err(Error::UnknownTimeframe(other.to_string())),
        }
    }
}
