// Summary widget: loading state keyed by the account being shown.
//
// `set_username` is the trigger: a non-empty name starts a fetch cycle, an
// empty one does nothing. Every trigger takes a new generation number; a
// cycle that finishes after a newer trigger has started is dropped so it
// can't overwrite the newer account's state.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::{AccountSummary, SummaryFetcher};

/// What the display reads from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryState {
    pub username: String,
    pub is_loading: bool,
    pub summary: Option<AccountSummary>,
    pub last_error: Option<String>,
}

impl Default for SummaryState {
    fn default() -> Self {
        // Nothing has been fetched yet, so the display starts out loading.
        Self {
            username: String::new(),
            is_loading: true,
            summary: None,
            last_error: None,
        }
    }
}

pub struct SummaryWidget {
    fetcher: SummaryFetcher,
    state: RwLock<SummaryState>,
    generation: AtomicU64,
}

impl SummaryWidget {
    pub fn new(fetcher: SummaryFetcher) -> Self {
        Self {
            fetcher,
            state: RwLock::new(SummaryState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> SummaryState {
        self.state.read().await.clone()
    }

    /// Point the widget at `username` and run a fetch cycle.
    ///
    /// On failure the state stays loading, the error is recorded in
    /// `last_error`, and the error is returned.
    pub async fn set_username(&self, username: &str) -> Result<()> {
        if username.is_empty() {
            return Ok(());
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().await;
            state.username = username.to_string();
            state.is_loading = true;
            state.summary = None;
            state.last_error = None;
        }

        let result = self.fetcher.fetch(username).await;

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(username = username, "Discarding superseded summary fetch");
            return Ok(());
        }

        match result {
            Ok(summary) => {
                state.summary = Some(summary);
                state.is_loading = false;
                Ok(())
            }
            Err(e) => {
                warn!(username = username, error = %e, "Summary fetch failed");
                state.last_error = Some(format!("{e:#}"));
                Err(e)
            }
        }
    }
}
