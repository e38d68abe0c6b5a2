//! Lokirelay CLI
//!
//! Command-line client for the relay's HTTP API.
//!
//! # Usage
//!
//! ```bash
//! lokirelay --help
//! lokirelay health
//! lokirelay logs
//! lokirelay logs --json
//! ```

#![deny(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use shared::models::LogRecord;

/// Lokirelay CLI - command-line client for the log relay
#[derive(Parser)]
#[command(name = "lokirelay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Relay API server URL
    #[arg(
        short,
        long,
        env = "LOKIRELAY_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check relay server health
    Health,
    /// Fetch the current batch of logs
    Logs {
        /// Print the raw JSON array instead of one line per record
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let base = cli.api_url.trim_end_matches('/');

    match cli.command {
        Commands::Health => check_health(base).await,
        Commands::Logs { json } => fetch_logs(base, json).await,
    }
}

async fn check_health(base: &str) -> Result<()> {
    let response = reqwest::get(format!("{base}/health"))
        .await
        .with_context(|| format!("Failed to reach relay at {base}"))?;

    if !response.status().is_success() {
        bail!("Relay returned {}", response.status());
    }

    let body: serde_json::Value = response.json().await?;
    println!(
        "{} ({} v{})",
        body["status"].as_str().unwrap_or("unknown"),
        body["service"].as_str().unwrap_or("unknown"),
        body["version"].as_str().unwrap_or("?"),
    );
    Ok(())
}

async fn fetch_logs(base: &str, json: bool) -> Result<()> {
    let response = reqwest::get(format!("{base}/logs"))
        .await
        .with_context(|| format!("Failed to reach relay at {base}"))?;

    if !response.status().is_success() {
        bail!("Relay returned {}", response.status());
    }

    let records: Vec<LogRecord> = response.json().await.context("Malformed relay response")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}  {}", record.timestamp, record.message);
        }
    }
    Ok(())
}
