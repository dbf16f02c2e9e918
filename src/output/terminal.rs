// Colored terminal output for the Shared Rewards card and author breakdown.
//
// main.rs delegates all terminal formatting here.

use colored::Colorize;

use super::{format_amount, BalanceLine, SummaryView};
use crate::summary::AuthorTally;

/// Display the Shared Rewards card.
pub fn display_summary(view: &SummaryView) {
    println!("\n{}", format!("=== {} ===", view.title).bold());
    println!("  {}", view.title_tooltip.dimmed());
    println!("  {}", "-".repeat(60).red());

    println!(
        "  {} {}",
        "Total Value Generated:".yellow().bold(),
        view.total_value.yellow().bold()
    );
    println!("  {}", "-".repeat(60).red());

    display_row(&view.rewards);
    display_row(&view.counts);

    println!();
    for line in wrap(&view.disclaimer, 58) {
        println!("  {}", line.dimmed());
    }
}

fn display_row(row: &[BalanceLine; 2]) {
    println!(
        "  {:<28} {:<28}",
        row[0].label.dimmed(),
        row[1].label.dimmed()
    );
    println!(
        "  {:<28} {:<28}",
        colorize_balance(&row[0].balance),
        colorize_balance(&row[1].balance)
    );
}

fn colorize_balance(balance: &str) -> String {
    if balance == super::LOADING {
        balance.dimmed().to_string()
    } else {
        balance.bold().to_string()
    }
}

/// Display the per-author vote breakdown, at most `top` rows.
pub fn display_author_tallies(username: &str, tallies: &[AuthorTally], top: usize) {
    if tallies.is_empty() {
        println!("No votes found for @{username}.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Authors curated by @{username} ({} total) ===",
            tallies.len()
        )
        .bold()
    );
    println!();
    println!(
        "  {:>4}  {:<24} {:>6}  {:>14}",
        "Rank".dimmed(),
        "Author".dimmed(),
        "Votes".dimmed(),
        "Value".dimmed(),
    );
    println!("  {}", "-".repeat(54).dimmed());

    for (i, tally) in tallies.iter().take(top).enumerate() {
        println!(
            "  {:>4}. @{:<22} {:>6}  {:>14}",
            i + 1,
            tally.author,
            tally.votes,
            format_amount(tally.vote_value, "HBD"),
        );
    }

    if tallies.len() > top {
        println!(
            "\n  {}",
            format!("... and {} more", tallies.len() - top).dimmed()
        );
    }
}

/// Greedy word wrap for the disclaimer paragraph.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four five six", 9);
        assert_eq!(lines, vec!["one two", "three", "four five", "six"]);
    }

    #[test]
    fn wrap_keeps_long_words_whole() {
        let lines = wrap("supercalifragilistic ok", 5);
        assert_eq!(lines, vec!["supercalifragilistic", "ok"]);
    }

    #[test]
    fn wrap_empty_text() {
        assert!(wrap("   ", 10).is_empty());
    }
}
