mod cli;
mod commands;
mod config;
mod main_lib;
mod snapshot_repository;

use std::sync::Arc;

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use sitefolio_core::settings::EngineSettings;
use sitefolio_core::Period;

use cli::Cli;
use commands::{run, ReportContext};
use config::Config;
use main_lib::init_tracing;
use snapshot_repository::JsonSnapshotRepository;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing(&config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    let year = cli.year.unwrap_or_else(|| chrono::Local::now().year());
    let period = Period::new(year, cli.start_month, cli.end_month)?;
    let settings = EngineSettings {
        default_exchange_rate: config.default_exchange_rate,
        ..Default::default()
    };
    settings.validate()?;

    let repository = JsonSnapshotRepository::from_path(&cli.snapshot)
        .with_context(|| format!("Cannot open snapshot {}", cli.snapshot.display()))?;

    let ctx = ReportContext {
        repository: Arc::new(repository),
        user_id: cli.user.clone().unwrap_or_else(|| config.user_id.clone()),
        period,
        settings,
        usd_to_bdt_rate: config.usd_to_bdt_rate,
    };

    let report = run(&cli.command, &ctx)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
