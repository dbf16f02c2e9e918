use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use shared_rewards::config::Config;
use shared_rewards::hivesql::queries::validate_account_name;
use shared_rewards::output::{self, SummaryView};
use shared_rewards::summary::widget::SummaryWidget;

/// Shared Rewards: curation summary for Hive accounts.
///
/// Totals up the votes and curation rewards an account has given out,
/// using HiveSQL for the history and a price feed for HP → USD.
#[derive(Parser)]
#[command(name = "shared-rewards", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the Shared Rewards card for an account
    Summary {
        /// The Hive account (e.g. skatehive)
        username: String,

        /// Print the card and raw totals as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// List the authors an account has voted for, by total vote value
    Authors {
        /// The Hive account (e.g. skatehive)
        username: String,

        /// How many authors to show (default: 10)
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Serve the summary as a JSON API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 3000)
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Address to bind (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("shared_rewards=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { username, json } => {
            let username = normalize_username(&username)?;
            let config = Config::load()?;
            let widget = SummaryWidget::new(shared_rewards::build_fetcher(&config)?);

            let spinner = if json { None } else { Some(loading_spinner(&username)) };
            let result = widget.set_username(&username).await;
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }
            result?;

            let state = widget.snapshot().await;
            let view = SummaryView::from_state(&state);
            if json {
                let out = serde_json::json!({ "view": view, "summary": state.summary });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                output::terminal::display_summary(&view);
            }
        }

        Commands::Authors { username, top } => {
            let username = normalize_username(&username)?;
            let config = Config::load()?;
            let fetcher = shared_rewards::build_fetcher(&config)?;

            let spinner = loading_spinner(&username);
            let tallies = fetcher.author_breakdown(&username).await;
            spinner.finish_and_clear();
            let tallies = tallies?;

            info!(username = %username, authors = tallies.len(), "Author breakdown fetched");
            output::terminal::display_author_tallies(&username, &tallies, top);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            let fetcher = shared_rewards::build_fetcher(&config)?;
            println!(
                "{}",
                format!("Serving Shared Rewards on http://{bind}:{port}").bold()
            );
            shared_rewards::web::run_server(fetcher, port, &bind).await?;
        }
    }

    Ok(())
}

/// Accept `@name` as well as `name`, and reject anything that isn't a
/// valid Hive account before touching the network.
fn normalize_username(raw: &str) -> Result<String> {
    let username = raw.trim().trim_start_matches('@').to_lowercase();
    validate_account_name(&username)?;
    Ok(username)
}

fn loading_spinner(username: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .expect("valid template"),
    );
    spinner.set_message(format!("{} @{username}", output::LOADING.dimmed()));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
