//! TravelMate CLI
//!
//! Prints ledger reports from the file-backed workspace and moves data in
//! and out as JSON snapshots.

mod cli;
mod report;

use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Command;
use travelmate_core::store::{JsonFileRepository, TravelWorkspace};
use travelmate_shared::AppConfig;

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize tracing; RUST_LOG wins over the configured filter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = match cli::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("error: {message}\n\n{}", cli::USAGE);
            return Ok(ExitCode::from(2));
        }
    };

    if command == Command::Help {
        println!("{}", cli::USAGE);
        return Ok(ExitCode::SUCCESS);
    }

    let data_dir = &config.storage.data_dir;
    let repo = JsonFileRepository::open(data_dir)
        .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
    debug!(data_dir = %data_dir.display(), "data directory opened");

    let mut workspace =
        TravelWorkspace::open(repo).with_settlement_threshold(config.ledger.settlement_threshold);

    match command {
        Command::Balances { group: None } => {
            print!("{}", report::balances("Balances", &workspace.balances()));
        }
        Command::Balances { group: Some(name) } => {
            let group = workspace
                .group_by_name(&name)
                .with_context(|| format!("no group named {name:?}"))?;
            let balances = workspace.group_balances(group.id)?;
            print!(
                "{}",
                report::balances(&format!("Balances for {}", group.name), &balances)
            );
        }
        Command::Summary => {
            print!(
                "{}",
                report::summary(
                    workspace.total_spend(),
                    &workspace.category_breakdown(),
                    &workspace.group_summaries(),
                )
            );
        }
        Command::Export => {
            println!("{}", workspace.export_snapshot(Utc::now())?);
        }
        Command::Import { path } => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let summary = workspace.import_snapshot(&json)?;
            info!(path = %path.display(), "import complete");
            print!("{}", report::import(&summary));
        }
        Command::Help => {}
    }

    Ok(ExitCode::SUCCESS)
}
