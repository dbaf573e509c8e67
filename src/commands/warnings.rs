//! Squad warnings command implementation

use std::fmt::Write;

use crate::{
    cli::types::{DivisionId, GameWeekIndex},
    pipeline::League,
    validate::SquadWarnings,
    Result,
};

use super::common::print_json;

/// Handle the warnings command
pub fn handle_warnings(
    league: &League,
    division: DivisionId,
    week: Option<GameWeekIndex>,
    as_json: bool,
) -> Result<()> {
    let week = league.resolve_week(week)?;
    let warnings = league.squad_warnings(&division, week)?;

    if as_json {
        print_json(&warnings)?;
    } else {
        print!("{}", render_warnings(&warnings)); // tarpaulin::skip
    }

    Ok(())
}

pub fn render_warnings(warnings: &SquadWarnings) -> String {
    let mut out = String::new();
    if warnings.is_empty() {
        out.push_str("No squad warnings\n");
        return out;
    }

    for dup in &warnings.duplicates {
        let holders: Vec<String> = dup
            .holders
            .iter()
            .map(|h| format!("{} slot {}", h.manager_id, h.squad_position_index))
            .collect();
        let _ = writeln!(
            out,
            "duplicate: {} ({}) held by {}",
            dup.player_name,
            dup.player_code,
            holders.join(", ")
        );
    }
    for breach in &warnings.club_quota {
        let _ = writeln!(
            out,
            "club quota: {} has {} players from {}",
            breach.manager_id,
            breach.players.len(),
            breach.club
        );
    }
    for mismatch in &warnings.position_mismatches {
        let _ = writeln!(
            out,
            "position: {} slot {} ({}) holds {} player {}",
            mismatch.slot.manager_id,
            mismatch.slot.squad_position_index,
            mismatch.slot_position,
            mismatch.player_position,
            mismatch.player_code
        );
    }
    for player in &warnings.new_players {
        let _ = writeln!(
            out,
            "new player: {} ({}) in {} slot {}",
            player.player_name,
            player.player_code,
            player.slot.manager_id,
            player.slot.squad_position_index
        );
    }

    out
}
