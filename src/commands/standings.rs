//! Standings command implementation

use std::fmt::Write;

use crate::{
    cli::types::{DivisionId, GameWeekIndex},
    pipeline::League,
    standings::DivisionStandings,
    Result,
};

use super::common::{format_change, format_rank, print_json};

/// Handle the standings command
pub fn handle_standings(
    league: &League,
    division: Option<DivisionId>,
    week: Option<GameWeekIndex>,
    as_json: bool,
) -> Result<()> {
    let week = league.resolve_week(week)?;
    let tables = match division {
        Some(division) => vec![league.division_week(&division, week)?],
        None => league.all_divisions(week)?,
    };

    if as_json {
        print_json(&tables)?;
    } else {
        for table in &tables {
            print!("{}", render_standings(table)); // tarpaulin::skip
        }
    }

    Ok(())
}

/// One line per manager in display order, then category detail.
pub fn render_standings(table: &DivisionStandings) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Division {} - game week {}",
        table.division_id, table.game_week
    );

    for row in &table.standings {
        let _ = write!(
            out,
            "{:>3}. {:<20} {:>5} pts  rank {:>5} ({:>4})",
            row.order + 1,
            row.manager_name,
            row.total.season_points,
            format_rank(row.total.rank),
            format_change(row.total.change),
        );
        for (category, ranked) in &row.categories {
            let _ = write!(
                out,
                "  {category} {}/{}",
                ranked.season_points,
                format_rank(ranked.rank)
            );
        }
        out.push('\n');
    }

    out
}
