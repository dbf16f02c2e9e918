// Shared Rewards: curation summary for Hive accounts.
//
// This is the library root. Each module corresponds to one stage of the
// summary: configuration, data fetching, aggregation, and display.

pub mod config;
pub mod hivesql;
pub mod output;
pub mod price;
pub mod summary;

#[cfg(feature = "web")]
pub mod web;

use std::sync::Arc;

use anyhow::Result;

use config::{Config, RateBackend};
use hivesql::client::HiveSqlClient;
use price::{ConversionRateSource, FixedRate, PriceFeedClient};
use summary::SummaryFetcher;

/// Wire up the real HiveSQL client and the configured rate source.
pub fn build_fetcher(config: &Config) -> Result<SummaryFetcher> {
    let stats = Arc::new(HiveSqlClient::new(&config.hivesql_url, &config.user_agent)?);
    let rates: Arc<dyn ConversionRateSource> = match &config.rate_backend {
        RateBackend::Fixed(rate) => Arc::new(FixedRate(*rate)),
        RateBackend::PriceFeed(url) => Arc::new(PriceFeedClient::new(url, &config.user_agent)?),
    };
    Ok(SummaryFetcher::new(stats, rates))
}
