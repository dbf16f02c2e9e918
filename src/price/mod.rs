// Conversion rate sources: how many dollars one HP is worth.
//
// The summary multiplies its curation total by this rate. The live source is
// a CoinGecko-style simple price endpoint; a fixed source covers offline use
// and tests.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Default price feed: HIVE in USD.
pub const DEFAULT_PRICE_FEED_URL: &str =
    "https://api.coingecko.com/api/v3/simple/price?ids=hive&vs_currencies=usd";

/// Anything that can produce an HP → USD conversion rate.
#[async_trait]
pub trait ConversionRateSource: Send + Sync {
    async fn fetch_rate(&self) -> Result<f64>;
}

/// A rate that never changes. Used for CONVERSION_RATE overrides.
pub struct FixedRate(pub f64);

#[async_trait]
impl ConversionRateSource for FixedRate {
    async fn fetch_rate(&self) -> Result<f64> {
        Ok(self.0)
    }
}

/// Response shape of `/simple/price?ids=hive&vs_currencies=usd`.
#[derive(Debug, Deserialize)]
pub struct SimplePriceResponse {
    pub hive: CoinPrice,
}

#[derive(Debug, Deserialize)]
pub struct CoinPrice {
    pub usd: f64,
}

/// Live HIVE/USD price from a CoinGecko-compatible endpoint.
pub struct PriceFeedClient {
    client: reqwest::Client,
    url: String,
}

impl PriceFeedClient {
    pub fn new(url: &str, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl ConversionRateSource for PriceFeedClient {
    async fn fetch_rate(&self) -> Result<f64> {
        debug!(url = %self.url, "Fetching conversion rate");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Price feed request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Price feed returned {status}: {body}");
        }

        let price: SimplePriceResponse = response
            .json()
            .await
            .context("Failed to parse price feed response")?;

        Ok(price.hive.usd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_price_response() {
        let json = r#"{"hive": {"usd": 0.2843}}"#;
        let resp: SimplePriceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.hive.usd, 0.2843);
    }

    #[test]
    fn missing_coin_is_an_error() {
        let json = r#"{"bitcoin": {"usd": 60000.0}}"#;
        assert!(serde_json::from_str::<SimplePriceResponse>(json).is_err());
    }

    #[tokio::test]
    async fn fixed_rate_returns_its_value() {
        assert_eq!(FixedRate(0.5).fetch_rate().await.unwrap(), 0.5);
    }
}
