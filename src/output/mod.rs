// Output formatting: the display model shared by the terminal and the web API.
//
// `SummaryView` is the whole card as strings: the renderers never format
// numbers themselves, so the terminal and JSON outputs always agree.

use serde::Serialize;

use crate::summary::widget::SummaryState;
use crate::summary::AccountSummary;

pub mod terminal;

/// Placeholder shown for every derived value until the fetch cycle completes.
pub const LOADING: &str = "Loading...";

pub const TITLE: &str = "Shared Rewards";

/// One labelled value with an explanatory tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceLine {
    pub label: String,
    pub balance: String,
    pub tooltip: String,
}

impl BalanceLine {
    fn new(label: &str, balance: String, tooltip: &str) -> Self {
        Self {
            label: label.to_string(),
            balance,
            tooltip: tooltip.to_string(),
        }
    }
}

/// The rendered Shared Rewards card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub title: String,
    pub title_tooltip: String,
    /// "$" + combined total, or the placeholder
    pub total_value: String,
    /// Vote rewards, curation rewards
    pub rewards: [BalanceLine; 2],
    /// Vote count, unique authors
    pub counts: [BalanceLine; 2],
    pub disclaimer: String,
    pub is_loading: bool,
}

impl SummaryView {
    /// The card as the widget currently sees it: placeholders while loading.
    pub fn from_state(state: &SummaryState) -> Self {
        let summary = if state.is_loading {
            None
        } else {
            state.summary.as_ref()
        };
        Self::build(&state.username, summary)
    }

    /// The card for a completed fetch cycle.
    pub fn from_summary(summary: &AccountSummary) -> Self {
        Self::build(&summary.username, Some(summary))
    }

    fn build(username: &str, summary: Option<&AccountSummary>) -> Self {
        Self {
            title: TITLE.to_string(),
            title_tooltip: format!("Total value generated by @{username}"),
            total_value: show(summary, |s| format_usd(s.total_value())),
            rewards: [
                BalanceLine::new(
                    "Vote Rewards",
                    show(summary, |s| format_amount(s.total_vote_rewards, "HBD")),
                    "Total value of Votes given out in HBD (Hive Backed Dollars)",
                ),
                BalanceLine::new(
                    "Curation Rewards",
                    show(summary, |s| format_amount(s.total_curation_rewards, "HP")),
                    "Total value of Curation Rewards in HP (Hive Power)",
                ),
            ],
            counts: [
                BalanceLine::new(
                    "Number of Votes",
                    show(summary, |s| s.total_vote_count.to_string()),
                    "Total number of votes given out",
                ),
                BalanceLine::new(
                    "Unique Skaters Curated",
                    show(summary, |s| s.unique_author_count.to_string()),
                    "Number of unique skaters curated",
                ),
            ],
            disclaimer: disclaimer(username),
            is_loading: summary.is_none(),
        }
    }
}

fn show(summary: Option<&AccountSummary>, f: impl Fn(&AccountSummary) -> String) -> String {
    summary.map(f).unwrap_or_else(|| LOADING.to_string())
}

/// Three decimals with a dollar sign, e.g. `$11.000`.
pub fn format_usd(value: f64) -> String {
    format!("${value:.3}")
}

/// Three decimals with a unit label, e.g. `3.500 HBD`.
pub fn format_amount(value: f64, unit: &str) -> String {
    format!("{value:.3} {unit}")
}

pub fn disclaimer(username: &str) -> String {
    format!(
        "These stats are only from the account @{username} and do not include the vote \
         trail that have been set up to support the skatehive community which increases \
         the value of total rewards given out."
    )
}
