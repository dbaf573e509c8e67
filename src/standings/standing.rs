//! Standings rows: a ranking joined with its week-over-week movement.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::{
    cli::types::{DivisionId, GameWeekIndex, ManagerId, PositionCategory},
    standings::{
        change::RankChange,
        rank::{DivisionRanking, PeriodPoints},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPoints {
    pub game_week_points: i32,
    pub season_points: i32,
    pub rank: f64,
    pub change: f64,
}

impl RankedPoints {
    fn new(points: PeriodPoints, rank: f64, change: f64) -> Self {
        Self {
            game_week_points: points.game_week,
            season_points: points.season,
            rank,
            change,
        }
    }
}

/// One manager's row in a division table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerStanding {
    pub manager_id: ManagerId,
    pub manager_name: String,
    pub order: usize,
    pub categories: BTreeMap<PositionCategory, RankedPoints>,
    pub total: RankedPoints,
}

/// A division table for one game week, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionStandings {
    pub division_id: DivisionId,
    pub game_week: GameWeekIndex,
    pub standings: Vec<ManagerStanding>,
}

impl DivisionStandings {
    /// Join `ranking` with `changes`; `name_of` supplies display names.
    pub fn assemble<F>(
        ranking: &DivisionRanking,
        changes: &BTreeMap<ManagerId, RankChange>,
        name_of: F,
    ) -> Self
    where
        F: Fn(&ManagerId) -> String,
    {
        let no_change = RankChange::default();
        let standings = ranking
            .managers
            .iter()
            .map(|manager| {
                let change = changes.get(&manager.manager_id).unwrap_or(&no_change);
                let categories = manager
                    .categories
                    .iter()
                    .map(|(category, ranked)| {
                        let moved = change.categories.get(category).copied().unwrap_or(0.0);
                        (*category, RankedPoints::new(ranked.points, ranked.rank, moved))
                    })
                    .collect();

                ManagerStanding {
                    manager_id: manager.manager_id.clone(),
                    manager_name: name_of(&manager.manager_id),
                    order: manager.order,
                    categories,
                    total: RankedPoints::new(manager.points, manager.total, change.total),
                }
            })
            .collect();

        Self {
            division_id: ranking.division_id.clone(),
            game_week: ranking.game_week,
            standings,
        }
    }

    pub fn get(&self, manager_id: &ManagerId) -> Option<&ManagerStanding> {
        self.standings.iter().find(|s| &s.manager_id == manager_id)
    }
}
