//! Exchange-suffix resolution.
//!
//! Tickers carry an exchange suffix (`0700.HK`, `SHEL.L`, ...) that determines
//! the display market and trading currency. Suffixless symbols are treated as
//! US-listed, USD-denominated.

/// Display market and trading currency derived from a ticker suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExchangeSuffix {
    pub suffix: &'static str,
    pub market: &'static str,
    pub currency: &'static str,
}

const SUFFIXES: &[ExchangeSuffix] = &[
    ExchangeSuffix { suffix: ".HK", market: "Hong Kong", currency: "HKD" },
    ExchangeSuffix { suffix: ".L", market: "London", currency: "GBP" },
    ExchangeSuffix { suffix: ".PA", market: "Paris", currency: "EUR" },
    ExchangeSuffix { suffix: ".DE", market: "Germany", currency: "EUR" },
    ExchangeSuffix { suffix: ".TO", market: "Toronto", currency: "CAD" },
    ExchangeSuffix { suffix: ".TW", market: "Taiwan", currency: "TWD" },
    ExchangeSuffix { suffix: ".AX", market: "Australia", currency: "AUD" },
];

const DEFAULT: ExchangeSuffix = ExchangeSuffix {
    suffix: "",
    market: "US",
    currency: "USD",
};

/// Resolves the exchange entry for a symbol by its suffix.
pub fn resolve(symbol: &str) -> ExchangeSuffix {
    SUFFIXES
        .iter()
        .find(|entry| symbol.ends_with(entry.suffix))
        .copied()
        .unwrap_or(DEFAULT)
}

pub fn market_for(symbol: &str) -> &'static str {
    resolve(symbol).market
}

pub fn currency_for(symbol: &str) -> &'static str {
    resolve(symbol).currency
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_suffixes() {
        assert_eq!(resolve("0700.HK").market, "Hong Kong");
        assert_eq!(resolve("0700.HK").currency, "HKD");
        assert_eq!(resolve("SHEL.L").currency, "GBP");
        assert_eq!(resolve("AIR.PA").currency, "EUR");
        assert_eq!(resolve("SAP.DE").market, "Germany");
        assert_eq!(resolve("SHOP.TO").currency, "CAD");
        assert_eq!(resolve("2330.TW").currency, "TWD");
        assert_eq!(resolve("BHP.AX").currency, "AUD");
    }

    #[test]
    fn suffixless_symbols_default_to_us() {
        assert_eq!(resolve("AAPL").market, "US");
        assert_eq!(resolve("AAPL").currency, "USD");
        assert_eq!(currency_for("MSFT"), "USD");
        assert_eq!(market_for("NVDA"), "US");
    }
}
