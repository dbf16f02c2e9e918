// Account summary: fetch, aggregate, and hold the Shared Rewards totals.
//
// The fetch cycle is strictly sequential: vote history, then curation
// history, then the conversion rate. The aggregation itself is pure and lives
// in free functions so it can be tested without any network access.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::hivesql::models::{CurationRecord, VoteRecord};
use crate::price::ConversionRateSource;

pub mod widget;

/// Source of the raw per-account rows. `HiveSqlClient` is the real one.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_votes(&self, username: &str) -> Result<Vec<VoteRecord>>;
    async fn fetch_curation(&self, username: &str) -> Result<Vec<CurationRecord>>;
}

/// Aggregates over the vote history.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VoteTotals {
    pub vote_count: usize,
    pub unique_authors: usize,
    /// Sum of `vote_value`, in HBD
    pub vote_rewards: f64,
}

/// Count votes, count distinct authors, and sum vote values.
pub fn aggregate_votes(votes: &[VoteRecord]) -> VoteTotals {
    let authors: HashSet<&str> = votes.iter().map(|v| v.author.as_str()).collect();
    VoteTotals {
        vote_count: votes.len(),
        unique_authors: authors.len(),
        vote_rewards: votes.iter().map(|v| v.vote_value).sum(),
    }
}

/// Sum of curation rewards, in HP.
pub fn aggregate_curation(records: &[CurationRecord]) -> f64 {
    records.iter().map(|c| c.hp).sum()
}

/// Per-author breakdown of the votes an account has cast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorTally {
    pub author: String,
    pub votes: usize,
    pub vote_value: f64,
}

/// Group votes by author, highest total value first (ties by name).
pub fn tally_authors(votes: &[VoteRecord]) -> Vec<AuthorTally> {
    let mut by_author: HashMap<&str, AuthorTally> = HashMap::new();
    for vote in votes {
        let entry = by_author
            .entry(vote.author.as_str())
            .or_insert_with(|| AuthorTally {
                author: vote.author.clone(),
                votes: 0,
                vote_value: 0.0,
            });
        entry.votes += 1;
        entry.vote_value += vote.vote_value;
    }

    let mut tallies: Vec<AuthorTally> = by_author.into_values().collect();
    tallies.sort_by(|a, b| {
        b.vote_value
            .total_cmp(&a.vote_value)
            .then_with(|| a.author.cmp(&b.author))
    });
    tallies
}

/// The aggregated totals for one account, as of one fetch cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    pub username: String,
    pub total_vote_count: usize,
    pub unique_author_count: usize,
    /// HBD
    pub total_vote_rewards: f64,
    /// HP
    pub total_curation_rewards: f64,
    /// USD per HP
    pub conversion_rate: f64,
    pub fetched_at: DateTime<Utc>,
}

impl AccountSummary {
    /// Build a summary from raw rows and a rate.
    pub fn from_records(
        username: &str,
        votes: &[VoteRecord],
        curation: &[CurationRecord],
        conversion_rate: f64,
    ) -> Self {
        let totals = aggregate_votes(votes);
        Self {
            username: username.to_string(),
            total_vote_count: totals.vote_count,
            unique_author_count: totals.unique_authors,
            total_vote_rewards: totals.vote_rewards,
            total_curation_rewards: aggregate_curation(curation),
            conversion_rate,
            fetched_at: Utc::now(),
        }
    }

    /// Dollar-equivalent of everything the account has given out:
    /// vote rewards plus curation rewards at the conversion rate.
    pub fn total_value(&self) -> f64 {
        self.total_vote_rewards + self.total_curation_rewards * self.conversion_rate
    }
}

/// Runs one fetch cycle against a stats source and a rate source.
#[derive(Clone)]
pub struct SummaryFetcher {
    stats: Arc<dyn StatsSource>,
    rates: Arc<dyn ConversionRateSource>,
}

impl SummaryFetcher {
    pub fn new(stats: Arc<dyn StatsSource>, rates: Arc<dyn ConversionRateSource>) -> Self {
        Self { stats, rates }
    }

    /// Fetch votes, then curation, then the rate, and aggregate.
    ///
    /// Any failure aborts the cycle; there are no retries or fallbacks.
    pub async fn fetch(&self, username: &str) -> Result<AccountSummary> {
        let votes = self.stats.fetch_votes(username).await?;
        let curation = self.stats.fetch_curation(username).await?;
        let rate = self.rates.fetch_rate().await?;

        let summary = AccountSummary::from_records(username, &votes, &curation, rate);
        info!(
            username = username,
            votes = summary.total_vote_count,
            authors = summary.unique_author_count,
            curation_events = curation.len(),
            "Summary fetched"
        );
        Ok(summary)
    }

    /// Fetch only the vote history and group it by author.
    pub async fn author_breakdown(&self, username: &str) -> Result<Vec<AuthorTally>> {
        let votes = self.stats.fetch_votes(username).await?;
        Ok(tally_authors(&votes))
    }
}
