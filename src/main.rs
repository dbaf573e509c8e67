//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::{Context, Result};
use clap::Parser;
use draft_league::{
    cli::{Commands, DraftLeague},
    commands::{
        common::{report_failure, CommandContext},
        quality::handle_quality,
        standings::handle_standings,
        team::handle_team,
        transfers::handle_transfers,
        warnings::handle_warnings,
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> Result<()> {
    let app = DraftLeague::parse();

    let default_level = if app.league.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let ctx = CommandContext::new(app.league.snapshot, app.league.config)
        .map_err(|e| report_failure(e, "failed to build league from snapshot"))?;
    let league = &ctx.league;

    match app.command {
        Commands::Standings {
            division,
            week,
            json,
        } => handle_standings(league, division, week, json)
            .map_err(|e| report_failure(e, "standings failed"))?,

        Commands::Team {
            manager,
            week,
            json,
        } => handle_team(league, manager, week, json)
            .map_err(|e| report_failure(e, "team sheet failed"))?,

        Commands::Transfers { manager, json } => handle_transfers(league, manager, json)
            .map_err(|e| report_failure(e, "transfer history failed"))?,

        Commands::Warnings {
            division,
            week,
            json,
        } => handle_warnings(league, division, week, json)
            .map_err(|e| report_failure(e, "squad warnings failed"))?,

        Commands::Quality { json } => {
            handle_quality(league, json).context("data quality report failed")?
        }
    }

    Ok(())
}
