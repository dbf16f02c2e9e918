use std::env;

use anyhow::{Context, Result};

use crate::hivesql::client::DEFAULT_HIVESQL_URL;
use crate::price::DEFAULT_PRICE_FEED_URL;

/// Default User-Agent sent with every outbound request.
pub const DEFAULT_USER_AGENT: &str = "shared-rewards/0.1 (hive curation summary)";

/// Where the HP → USD conversion rate comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum RateBackend {
    /// Live price feed (default)
    PriceFeed(String),
    /// Fixed rate from CONVERSION_RATE: useful offline or for reproducible output
    Fixed(f64),
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy, so any of
/// these can live there instead of the shell environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQL-over-HTTP endpoint that answers `{ "query": ... }` POSTs.
    pub hivesql_url: String,
    pub rate_backend: RateBackend,
    pub user_agent: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default, so this only fails on a CONVERSION_RATE
    /// that isn't a usable number.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let rate_backend = match env::var("CONVERSION_RATE") {
            Ok(raw) if !raw.trim().is_empty() => RateBackend::Fixed(parse_rate(&raw)?),
            _ => match env::var("PRICE_FEED_URL") {
                Ok(url) => RateBackend::PriceFeed(url),
                Err(_) => defaults.rate_backend,
            },
        };

        Ok(Self {
            hivesql_url: env::var("HIVESQL_URL").unwrap_or(defaults.hivesql_url),
            rate_backend,
            user_agent: env::var("SHARED_REWARDS_USER_AGENT").unwrap_or(defaults.user_agent),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hivesql_url: DEFAULT_HIVESQL_URL.to_string(),
            rate_backend: RateBackend::PriceFeed(DEFAULT_PRICE_FEED_URL.to_string()),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Parse a fixed conversion rate. Must be finite and non-negative.
pub fn parse_rate(raw: &str) -> Result<f64> {
    let rate: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("CONVERSION_RATE is not a number: {raw:?}"))?;
    if !rate.is_finite() || rate < 0.0 {
        anyhow::bail!("CONVERSION_RATE must be a finite, non-negative number (got {raw})");
    }
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rate_accepts_plain_numbers() {
        assert_eq!(parse_rate("0.5").unwrap(), 0.5);
        assert_eq!(parse_rate(" 1.25 ").unwrap(), 1.25);
        assert_eq!(parse_rate("0").unwrap(), 0.0);
    }

    #[test]
    fn parse_rate_rejects_garbage() {
        assert!(parse_rate("abc").is_err());
        assert!(parse_rate("-1").is_err());
        assert!(parse_rate("NaN").is_err());
        assert!(parse_rate("inf").is_err());
    }

    // Only test in this binary that touches the process environment, so the
    // set/remove sequence below can't race another test.
    #[test]
    fn load_falls_back_to_defaults_and_honours_overrides() {
        for key in [
            "CONVERSION_RATE",
            "PRICE_FEED_URL",
            "HIVESQL_URL",
            "SHARED_REWARDS_USER_AGENT",
        ] {
            env::remove_var(key);
        }

        let config = Config::load().unwrap();
        assert_eq!(config.hivesql_url, DEFAULT_HIVESQL_URL);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(
            config.rate_backend,
            RateBackend::PriceFeed(DEFAULT_PRICE_FEED_URL.to_string())
        );

        env::set_var("HIVESQL_URL", "http://localhost:8080/sql");
        env::set_var("PRICE_FEED_URL", "http://localhost:8080/price");
        let config = Config::load().unwrap();
        assert_eq!(config.hivesql_url, "http://localhost:8080/sql");
        assert_eq!(
            config.rate_backend,
            RateBackend::PriceFeed("http://localhost:8080/price".to_string())
        );

        env::set_var("CONVERSION_RATE", "0.5");
        assert_eq!(Config::load().unwrap().rate_backend, RateBackend::Fixed(0.5));

        env::set_var("CONVERSION_RATE", "lots");
        assert!(Config::load().is_err());

        for key in ["CONVERSION_RATE", "PRICE_FEED_URL", "HIVESQL_URL"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn default_config_points_at_public_endpoints() {
        let config = Config::default();
        assert_eq!(config.hivesql_url, DEFAULT_HIVESQL_URL);
        assert_eq!(
            config.rate_backend,
            RateBackend::PriceFeed(DEFAULT_PRICE_FEED_URL.to_string())
        );
    }
}
