//! nakama-account-import — batch importer for relay-server account files.
//!
//! Reads each exported account JSON file, resolves a device-ID identity on
//! the destination Nakama server (relinking any pre-existing custom-ID
//! identity), then uploads the display name, auth secrets, and profile blobs
//! into Nakama storage. Strictly sequential: one file, one request in flight
//! at a time, and the first fatal condition aborts the run.

#![warn(clippy::all)]

mod account;
mod cli;
mod config;
mod nakama;
mod types;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use account::AccountRecord;
use nakama::Endpoints;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let filter = match cli.log_level {
        types::LogLevel::Debug => "debug",
        types::LogLevel::Info => "info",
        types::LogLevel::Warn => "warn",
        types::LogLevel::Error => "error",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    let config = config::Config::from_cli(cli)?;
    tracing::info!(
        files = config.account_files.len(),
        uri = %config.nakama_uri,
        "Starting nakama-account-import"
    );

    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()?;
    let endpoints = Endpoints::new(&config.nakama_uri);

    for path in &config.account_files {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read account file {}", path.display()))?;
        let account = AccountRecord::from_json(&contents)
            .with_context(|| format!("Invalid account file {}", path.display()))?;

        tracing::info!(
            id = %account.xplatform_id(),
            name = %account.display_name(),
            "Migrating account"
        );

        let outcome = nakama::migrate_account(&client, &endpoints, &config.server_key, &account)
            .await
            .with_context(|| format!("Migration failed for {}", path.display()))?;

        tracing::info!(
            identity = ?outcome.identity,
            secrets = ?outcome.secrets,
            "Migration complete"
        );
    }

    Ok(())
}
