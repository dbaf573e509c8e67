//! Team sheet command implementation

use std::fmt::Write;

use crate::{
    cli::types::{GameWeekIndex, ManagerId},
    pipeline::League,
    scoring::TeamSheet,
    Result,
};

use super::common::print_json;

/// Handle the team command
pub fn handle_team(
    league: &League,
    manager: ManagerId,
    week: Option<GameWeekIndex>,
    as_json: bool,
) -> Result<()> {
    let week = league.resolve_week(week)?;
    let sheet = league.team_sheet(&manager, week)?;

    if as_json {
        print_json(&sheet)?;
    } else {
        let name = league.manager(&manager)?.display_name().to_string();
        print!("{}", render_team(&name, &sheet)); // tarpaulin::skip
    }

    Ok(())
}

/// Twelve slot lines plus a totals line; `*` marks a slot that changed hands.
pub fn render_team(manager_name: &str, sheet: &TeamSheet) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) - game week {}",
        manager_name, sheet.division_id, sheet.game_week
    );

    for slot in &sheet.slots {
        let _ = writeln!(
            out,
            "{:>2} {:<3} {:<24} {:<16} {:>4} {:>5} {}",
            slot.squad_position_index,
            slot.squad_position_id,
            slot.player_name,
            slot.club,
            slot.game_week_stats.points,
            slot.season_to_game_week.points,
            if slot.has_changed { "*" } else { "" },
        );
    }

    let total = sheet.total_points();
    let _ = writeln!(
        out,
        "   {:<45} {:>4} {:>5}",
        "Total", total.game_week, total.season
    );

    out
}
