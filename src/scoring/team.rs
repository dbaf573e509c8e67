//! Per-manager, per-game-week team sheets.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::{
    cli::types::{DivisionId, GameWeekIndex, ManagerId, PlayerCode, Position, PositionCategory},
    error::{LeagueError, Result},
    league::{GameWeekCalendar, Player, PlayerDirectory},
    roster::{Occupant, RosterTimeline},
    scoring::{aggregate::PlayerSeason, stats::StatLine},
};

/// Derived per-player seasons, keyed by player code.
pub type SeasonStats = HashMap<PlayerCode, PlayerSeason>;

/// One row of a team sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSlot {
    pub squad_position_index: u8,
    pub squad_position_id: Position,
    pub player_code: Option<PlayerCode>,
    pub player_name: String,
    pub club: String,
    pub game_week_stats: StatLine,
    /// Sum over every week so far of whoever held the slot that week.
    pub season_to_game_week: StatLine,
    pub has_changed: bool,
}

/// Points for one category on a team sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPoints {
    pub game_week: i32,
    pub season: i32,
}

/// A manager's twelve slots for one game week, ordered by squad position index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSheet {
    pub manager_id: ManagerId,
    pub division_id: DivisionId,
    pub game_week: GameWeekIndex,
    pub slots: Vec<ScoredSlot>,
}

impl TeamSheet {
    /// Points per category, bucketed by each slot's nominal position.
    pub fn category_points(&self) -> BTreeMap<PositionCategory, CategoryPoints> {
        let mut totals: BTreeMap<PositionCategory, CategoryPoints> = PositionCategory::ALL
            .into_iter()
            .map(|c| (c, CategoryPoints::default()))
            .collect();

        for slot in &self.slots {
            let entry = totals.entry(slot.squad_position_id.category()).or_default();
            entry.game_week = entry.game_week.saturating_add(slot.game_week_stats.points);
            entry.season = entry.season.saturating_add(slot.season_to_game_week.points);
        }

        totals
    }

    pub fn total_points(&self) -> CategoryPoints {
        self.slots.iter().fold(CategoryPoints::default(), |acc, slot| CategoryPoints {
            game_week: acc.game_week.saturating_add(slot.game_week_stats.points),
            season: acc.season.saturating_add(slot.season_to_game_week.points),
        })
    }
}

fn week_stats(seasons: &SeasonStats, occupant: &Occupant, week: GameWeekIndex) -> StatLine {
    match occupant {
        Occupant::Player(code) => seasons
            .get(code)
            .map(|season| season.game_week(week))
            .unwrap_or_default(),
        Occupant::Unknown(_) => StatLine::default(),
    }
}

/// Build a manager's team sheet for `game_week`.
pub fn score_team(
    timeline: &RosterTimeline,
    division_id: &DivisionId,
    game_week: GameWeekIndex,
    calendar: &GameWeekCalendar,
    seasons: &SeasonStats,
    directory: &PlayerDirectory,
) -> Result<TeamSheet> {
    let current = timeline
        .week(game_week)
        .ok_or(LeagueError::UnknownGameWeek { game_week })?;

    let mut season_totals = vec![StatLine::default(); current.len()];
    for week in calendar.through(game_week) {
        let Some(slots) = timeline.week(week.index) else {
            continue;
        };
        for (total, slot) in season_totals.iter_mut().zip(slots) {
            *total += &week_stats(seasons, &slot.occupant, week.index);
        }
    }

    let slots = current
        .iter()
        .zip(season_totals)
        .map(|(slot, season_to_game_week)| {
            let (player_name, club) = match slot.occupant.player(directory) {
                Some(p) => (p.name.clone(), p.club.clone()),
                None => (Player::unknown(slot.occupant.code()).name, String::new()),
            };

            ScoredSlot {
                squad_position_index: slot.squad_position_index,
                squad_position_id: slot.squad_position_id,
                player_code: slot.occupant.code(),
                player_name,
                club,
                game_week_stats: week_stats(seasons, &slot.occupant, game_week),
                season_to_game_week,
                has_changed: slot.has_changed,
            }
        })
        .collect();

    Ok(TeamSheet {
        manager_id: timeline.manager_id.clone(),
        division_id: division_id.clone(),
        game_week,
        slots,
    })
}
