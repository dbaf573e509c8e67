//! Shared setup and formatting for command handlers.

use serde::Serialize;
use std::path::PathBuf;

use crate::{
    core::{load_config, resolve_snapshot_path},
    pipeline::League,
    LeagueError, Result,
};

/// Resources every command needs
pub struct CommandContext {
    pub league: League,
}

impl CommandContext {
    /// Resolve the snapshot and config paths, then build the league.
    pub fn new(snapshot: Option<PathBuf>, config: Option<PathBuf>) -> Result<Self> {
        let config = load_config(config.as_deref())?;
        let snapshot = resolve_snapshot_path(snapshot)?;
        let league = League::from_path(&snapshot, config)?;
        Ok(Self { league })
    }
}

/// Wrap a library error for the CLI. Integrity failures are called out so
/// nobody mistakes them for a bad flag.
pub fn report_failure(err: LeagueError, action: &str) -> anyhow::Error {
    let message = if err.is_integrity() {
        format!("{action}: league data is inconsistent, nothing was published")
    } else {
        action.to_string()
    };
    anyhow::Error::new(err).context(message)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Half-ranks print with one decimal, whole ranks without.
pub fn format_rank(rank: f64) -> String {
    if rank.fract() == 0.0 {
        format!("{rank:.0}")
    } else {
        format!("{rank:.1}")
    }
}

pub fn format_change(change: f64) -> String {
    if change == 0.0 {
        "=".to_string()
    } else if change.fract() == 0.0 {
        format!("{change:+.0}")
    } else {
        format!("{change:+.1}")
    }
}
