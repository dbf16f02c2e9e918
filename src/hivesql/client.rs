// HTTP client for the HiveSQL query endpoint.
//
// A thin reqwest wrapper with one generic helper: POST a query string,
// deserialize the JSON array that comes back.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::models::{CurationRecord, VoteRecord};
use super::queries;
use crate::summary::StatsSource;

/// Default SQL-over-HTTP endpoint.
pub const DEFAULT_HIVESQL_URL: &str = "https://www.stoken.quest/sql";

#[derive(Serialize)]
struct QueryBody<'a> {
    query: &'a str,
}

/// Client for a HiveSQL-style endpoint.
pub struct HiveSqlClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HiveSqlClient {
    /// Create a new client posting to `endpoint`.
    pub fn new(endpoint: &str, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    /// Run a query and deserialize the rows.
    ///
    /// `label` only names the query in logs and error messages.
    pub async fn query<T: DeserializeOwned>(&self, label: &str, sql: &str) -> Result<Vec<T>> {
        debug!(query = label, endpoint = %self.endpoint, "HiveSQL POST request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&QueryBody { query: sql })
            .send()
            .await
            .with_context(|| format!("HiveSQL request failed: {label}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("HiveSQL {label} returned {status}: {body}");
        }

        let rows = response
            .json::<Vec<T>>()
            .await
            .with_context(|| format!("Failed to parse HiveSQL {label} response"))?;

        debug!(query = label, rows = rows.len(), "HiveSQL query complete");
        Ok(rows)
    }
}

#[async_trait]
impl StatsSource for HiveSqlClient {
    async fn fetch_votes(&self, username: &str) -> Result<Vec<VoteRecord>> {
        let sql = queries::vote_history_query(username)?;
        self.query("vote history", &sql).await
    }

    async fn fetch_curation(&self, username: &str) -> Result<Vec<CurationRecord>> {
        let sql = queries::curation_history_query(username)?;
        self.query("curation history", &sql).await
    }
}
