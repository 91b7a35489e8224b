//! Alpha Vantage quote provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::ProviderQuote;
use crate::provider::traits::QuoteProvider;

const BASE_URL: &str = "https://www.alphavantage.co/query";

pub struct AlphaVantageProvider {
    client: Client,
    token: String,
}

impl AlphaVantageProvider {
    /// Builds a provider from an optional configured key. A missing or empty
    /// key is a configuration error, reported before any request is made.
    pub fn new(token: Option<String>) -> Result<Self, MarketDataError> {
        let token = token.filter(|t| !t.is_empty()).ok_or_else(|| {
            MarketDataError::MissingApiKey(
                "ALPHA_VANTAGE_API_KEY is not set; live quote refresh is unavailable".to_string(),
            )
        })?;

        Ok(AlphaVantageProvider {
            client: Client::new(),
            token,
        })
    }

    async fn fetch_data(
        &self,
        function: &str,
        params: Vec<(&str, &str)>,
    ) -> Result<String, MarketDataError> {
        let mut query_params = params;
        query_params.push(("function", function));
        query_params.push(("apikey", &self.token));

        let url = reqwest::Url::parse_with_params(BASE_URL, &query_params)
            .map_err(|e| MarketDataError::Provider(format!("Failed to build URL: {}", e)))?;

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MarketDataError::Provider(format!(
                "AlphaVantage API error: {}",
                error_body
            )));
        }

        let text = response.text().await?;
        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "05. price")]
    price: String,
    #[serde(rename = "09. change")]
    change: String,
    #[serde(rename = "10. change percent")]
    change_percent: String,
}

#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
}

fn parse_numeric(field: &str, raw: &str) -> Result<f64, MarketDataError> {
    raw.trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .map_err(|_| MarketDataError::Parsing(format!("Invalid {} value: {}", field, raw)))
}

fn parse_global_quote(body: &str, symbol: &str) -> Result<ProviderQuote, MarketDataError> {
    let response: GlobalQuoteResponse = serde_json::from_str(body)
        .map_err(|e| MarketDataError::Parsing(format!("Failed to parse quote: {}", e)))?;

    let quote = response
        .global_quote
        .ok_or_else(|| MarketDataError::NotFound(format!("No quote data for {}", symbol)))?;

    Ok(ProviderQuote {
        symbol: symbol.to_string(),
        price: parse_numeric("price", &quote.price)?,
        change: parse_numeric("change", &quote.change)?,
        change_percent: parse_numeric("change percent", &quote.change_percent)?,
    })
}

#[async_trait]
impl QuoteProvider for AlphaVantageProvider {
    fn name(&self) -> &'static str {
        "ALPHA_VANTAGE"
    }

    async fn latest_quote(&self, symbol: &str) -> Result<ProviderQuote, MarketDataError> {
        let params = vec![("symbol", symbol)];
        let response_text = self.fetch_data("GLOBAL_QUOTE", params).await?;
        parse_global_quote(&response_text, symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_quote_payload() {
        let body = r#"{
            "Global Quote": {
                "01. symbol": "AAPL",
                "05. price": "178.7200",
                "09. change": "1.2400",
                "10. change percent": "0.6987%"
            }
        }"#;

        let quote = parse_global_quote(body, "AAPL").unwrap();
        assert_eq!(quote.symbol, "AAPL");
        assert!((quote.price - 178.72).abs() < 1e-9);
        assert!((quote.change - 1.24).abs() < 1e-9);
        assert!((quote.change_percent - 0.6987).abs() < 1e-9);
    }

    #[test]
    fn empty_payload_is_not_found() {
        let result = parse_global_quote("{}", "MISSING");
        assert!(matches!(result, Err(MarketDataError::NotFound(_))));
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let err = AlphaVantageProvider::new(None).err().unwrap();
        assert!(matches!(err, MarketDataError::MissingApiKey(_)));
        assert!(err.to_string().contains("not configured"));

        let err = AlphaVantageProvider::new(Some(String::new())).err().unwrap();
        assert!(matches!(err, MarketDataError::MissingApiKey(_)));
    }
}
