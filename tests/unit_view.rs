// Unit tests for the display model.
//
// Tests the loading placeholder, three-decimal formatting, unit labels, and
// the combined dollar total.

use chrono::Utc;
use shared_rewards::output::{format_amount, format_usd, SummaryView, LOADING, TITLE};
use shared_rewards::summary::widget::SummaryState;
use shared_rewards::summary::AccountSummary;

fn summary() -> AccountSummary {
    AccountSummary {
        username: "skatehive".to_string(),
        total_vote_count: 3,
        unique_author_count: 2,
        total_vote_rewards: 3.5,
        total_curation_rewards: 15.0,
        conversion_rate: 0.5,
        fetched_at: Utc::now(),
    }
}

fn ready_state() -> SummaryState {
    SummaryState {
        username: "skatehive".to_string(),
        is_loading: false,
        summary: Some(summary()),
        last_error: None,
    }
}

fn all_values(view: &SummaryView) -> Vec<&str> {
    let mut values = vec![view.total_value.as_str()];
    values.extend(view.rewards.iter().map(|l| l.balance.as_str()));
    values.extend(view.counts.iter().map(|l| l.balance.as_str()));
    values
}

#[test]
fn ready_view_formats_every_value() {
    let view = SummaryView::from_state(&ready_state());
    assert!(!view.is_loading);
    assert_eq!(view.title, TITLE);
    assert_eq!(view.total_value, "$11.000");
    assert_eq!(view.rewards[0].label, "Vote Rewards");
    assert_eq!(view.rewards[0].balance, "3.500 HBD");
    assert_eq!(view.rewards[1].label, "Curation Rewards");
    assert_eq!(view.rewards[1].balance, "15.000 HP");
    assert_eq!(view.counts[0].balance, "3");
    assert_eq!(view.counts[1].label, "Unique Skaters Curated");
    assert_eq!(view.counts[1].balance, "2");
}

#[test]
fn from_summary_matches_a_completed_state() {
    let state = ready_state();
    let from_state = SummaryView::from_state(&state);
    let from_summary = SummaryView::from_summary(state.summary.as_ref().unwrap());
    assert_eq!(from_state, from_summary);
    assert!(!from_summary.is_loading);
    assert_eq!(from_summary.total_value, "$11.000");
}

#[test]
fn loading_view_shows_placeholder_everywhere() {
    let mut state = ready_state();
    state.is_loading = true;
    let view = SummaryView::from_state(&state);
    assert!(view.is_loading);
    assert!(all_values(&view).iter().all(|v| *v == LOADING));
}

#[test]
fn default_state_is_loading() {
    let view = SummaryView::from_state(&SummaryState::default());
    assert!(view.is_loading);
    assert!(all_values(&view).iter().all(|v| *v == LOADING));
}

#[test]
fn zero_totals_are_shown_not_hidden() {
    let mut state = ready_state();
    if let Some(s) = state.summary.as_mut() {
        s.total_vote_count = 0;
        s.unique_author_count = 0;
        s.total_vote_rewards = 0.0;
        s.total_curation_rewards = 0.0;
    }
    let view = SummaryView::from_state(&state);
    assert_eq!(view.total_value, "$0.000");
    assert_eq!(view.rewards[0].balance, "0.000 HBD");
    assert_eq!(view.counts[0].balance, "0");
}

#[test]
fn tooltip_and_disclaimer_name_the_account() {
    let view = SummaryView::from_state(&ready_state());
    assert_eq!(view.title_tooltip, "Total value generated by @skatehive");
    assert!(view.disclaimer.starts_with("These stats are only from the account @skatehive"));
}

#[test]
fn usd_rounds_to_three_decimals() {
    assert_eq!(format_usd(11.0), "$11.000");
    assert_eq!(format_usd(1.23456), "$1.235");
    assert_eq!(format_usd(0.0), "$0.000");
}

#[test]
fn amount_carries_unit() {
    assert_eq!(format_amount(3.5, "HBD"), "3.500 HBD");
    assert_eq!(format_amount(1234.5678, "HP"), "1234.568 HP");
}

#[test]
fn view_serializes_for_the_api() {
    let json = serde_json::to_value(SummaryView::from_state(&ready_state())).unwrap();
    assert_eq!(json["total_value"], "$11.000");
    assert_eq!(json["rewards"][0]["balance"], "3.500 HBD");
    assert_eq!(json["counts"][1]["tooltip"], "Number of unique skaters curated");
    assert_eq!(json["is_loading"], false);
}
