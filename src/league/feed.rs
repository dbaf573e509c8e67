//! Reading a league snapshot from disk.

use std::path::Path;
use tracing::debug;

use crate::{league::types::LeagueSnapshot, Result};

/// Parse a snapshot from its JSON text.
pub fn parse_snapshot(json: &str) -> Result<LeagueSnapshot> {
    Ok(serde_json::from_str(json)?)
}

/// Load a snapshot file written by the ingestion layer.
pub fn load_snapshot(path: &Path) -> Result<LeagueSnapshot> {
    let contents = std::fs::read_to_string(path)?;
    let snapshot = parse_snapshot(&contents)?;

    debug!(
        path = %path.display(),
        game_weeks = snapshot.game_weeks.len(),
        players = snapshot.players.len(),
        managers = snapshot.managers.len(),
        transfers = snapshot.transfers.len(),
        "loaded league snapshot"
    );

    Ok(snapshot)
}
