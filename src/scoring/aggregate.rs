//! Reduce per-fixture stat lines into period totals.

use std::collections::BTreeMap;

use crate::{
    cli::types::{GameWeekIndex, PlayerCode, Position},
    league::{GameWeekCalendar, Player},
    quality::{DataQualityIssue, DataQualityReport},
    scoring::{
        rules::ScoringRules,
        stats::{StatKey, StatLine},
    },
};

#[cfg(test)]
mod tests;

/// Sum raw fixture lines for one scoring period.
///
/// `points` is scored per raw line and then summed, so it never depends on the
/// display filtering below. Stats that carry no weight for `position` are
/// zeroed in the result, except appearance counters which are always totalled.
pub fn aggregate<'a, I>(rules: &ScoringRules, lines: I, position: Position) -> StatLine
where
    I: IntoIterator<Item = &'a StatLine>,
{
    let mut total = StatLine::default();
    for line in lines {
        let mut scored = *line;
        scored.points = rules.compute_points(line, position);
        total += &scored;
    }

    for key in StatKey::ALL {
        if !key.always_summed() && !rules.is_scoreable(key, position) {
            *total.get_mut(key) = 0;
        }
    }

    total
}

/// A player's stats bucketed by game week, plus the running season total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSeason {
    pub code: PlayerCode,
    pub position: Position,
    pub game_week_stats: BTreeMap<GameWeekIndex, StatLine>,
    pub season_to_game_week: BTreeMap<GameWeekIndex, StatLine>,
}

impl PlayerSeason {
    /// Stats for one week; a week without fixtures is an empty line.
    pub fn game_week(&self, index: GameWeekIndex) -> StatLine {
        self.game_week_stats.get(&index).copied().unwrap_or_default()
    }

    pub fn season_to(&self, index: GameWeekIndex) -> StatLine {
        self.season_to_game_week
            .get(&index)
            .copied()
            .unwrap_or_default()
    }
}

/// Bucket a player's fixtures into game weeks and aggregate each bucket.
///
/// Fixtures outside every game week are reported and left out.
pub fn derive_player_season(
    rules: &ScoringRules,
    player: &Player,
    calendar: &GameWeekCalendar,
    report: &mut DataQualityReport,
) -> PlayerSeason {
    let mut buckets: BTreeMap<GameWeekIndex, Vec<&StatLine>> = BTreeMap::new();
    for fixture in &player.fixtures {
        match calendar.locate(fixture.date) {
            Some(week) => buckets.entry(week.index).or_default().push(&fixture.stats),
            None => {
                report.record(DataQualityIssue::FixtureOutsideGameWeeks {
                    player: player.code,
                    date: fixture.date,
                });
            }
        }
    }

    let mut game_week_stats = BTreeMap::new();
    let mut season_to_game_week = BTreeMap::new();
    let mut running = StatLine::default();

    for week in calendar.weeks() {
        let lines = buckets.remove(&week.index).unwrap_or_default();
        let stats = aggregate(rules, lines, player.position);
        running += &stats;
        game_week_stats.insert(week.index, stats);
        season_to_game_week.insert(week.index, running);
    }

    PlayerSeason {
        code: player.code,
        position: player.position,
        game_week_stats,
        season_to_game_week,
    }
}
