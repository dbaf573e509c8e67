//! Fractional ranking of a division's managers.
//!
//! Ranks ascend with points: the lowest scorer sits at rank 0 and the top
//! scorer at `n - 1`. Tied managers share the mean of the positions they
//! jointly occupy.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::{
    cli::types::{DivisionId, GameWeekIndex, ManagerId, PositionCategory},
    error::{LeagueError, Result},
    scoring::TeamSheet,
};

#[cfg(test)]
mod tests;

/// Mid-rank of each score, in input order.
pub fn fractional_ranks(points: &[i32]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by_key(|&i| points[i]);

    let mut ranks = vec![0.0; points.len()];
    let mut start = 0;
    while start < order.len() {
        let value = points[order[start]];
        let len = order[start..]
            .iter()
            .take_while(|&&i| points[i] == value)
            .count();

        // mean of start..start+len-1
        let rank = start as f64 + (len as f64 - 1.0) / 2.0;
        for &i in &order[start..start + len] {
            ranks[i] = rank;
        }
        start += len;
    }

    ranks
}

/// Points for one category, for one manager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodPoints {
    pub game_week: i32,
    pub season: i32,
}

/// Ranking input for one manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerPoints {
    pub manager_id: ManagerId,
    pub categories: BTreeMap<PositionCategory, PeriodPoints>,
}

impl ManagerPoints {
    pub fn new(manager_id: ManagerId) -> Self {
        Self {
            manager_id,
            categories: BTreeMap::new(),
        }
    }

    pub fn with(mut self, category: PositionCategory, game_week: i32, season: i32) -> Self {
        self.categories
            .insert(category, PeriodPoints { game_week, season });
        self
    }

    pub fn from_sheet(sheet: &TeamSheet) -> Self {
        let categories = sheet
            .category_points()
            .into_iter()
            .map(|(category, points)| {
                (
                    category,
                    PeriodPoints {
                        game_week: points.game_week,
                        season: points.season,
                    },
                )
            })
            .collect();

        Self {
            manager_id: sheet.manager_id.clone(),
            categories,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRank {
    pub points: PeriodPoints,
    pub rank: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedManager {
    pub manager_id: ManagerId,
    pub categories: BTreeMap<PositionCategory, CategoryRank>,
    /// Sum of the category ranks.
    pub total: f64,
    /// Literal sum of the category points.
    pub points: PeriodPoints,
    /// 0-based display position.
    pub order: usize,
}

/// A division's ranking for one game week, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionRanking {
    pub division_id: DivisionId,
    pub game_week: GameWeekIndex,
    pub categories: Vec<PositionCategory>,
    pub managers: Vec<RankedManager>,
}

impl DivisionRanking {
    pub fn get(&self, manager_id: &ManagerId) -> Option<&RankedManager> {
        self.managers.iter().find(|m| &m.manager_id == manager_id)
    }
}

/// Each category may be ranked once.
pub fn ensure_distinct(categories: &[PositionCategory]) -> Result<()> {
    let mut seen = BTreeSet::new();
    match categories.iter().find(|c| !seen.insert(**c)) {
        Some(category) => Err(LeagueError::DuplicateCategory {
            category: *category,
        }),
        None => Ok(()),
    }
}

/// Rank every manager of `roster` within each category by season points.
///
/// `roster` fixes the input order (and so the order among fully tied
/// managers). A roster manager with no points record, or a record missing one
/// of `categories`, fails the whole division. So does a repeated category.
pub fn rank_division(
    division_id: &DivisionId,
    game_week: GameWeekIndex,
    categories: &[PositionCategory],
    roster: &[ManagerId],
    points: &[ManagerPoints],
) -> Result<DivisionRanking> {
    ensure_distinct(categories)?;

    let mut rows: Vec<(&ManagerId, Vec<PeriodPoints>)> = Vec::with_capacity(roster.len());
    for manager in roster {
        let record = points
            .iter()
            .find(|p| &p.manager_id == manager)
            .ok_or_else(|| LeagueError::MissingManagerPoints {
                manager: manager.clone(),
                division: division_id.clone(),
                game_week,
            })?;

        let values = categories
            .iter()
            .map(|category| {
                record.categories.get(category).copied().ok_or_else(|| {
                    LeagueError::MissingCategoryPoints {
                        manager: manager.clone(),
                        division: division_id.clone(),
                        game_week,
                        category: *category,
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push((manager, values));
    }

    let column_ranks: Vec<Vec<f64>> = (0..categories.len())
        .map(|c| {
            let season: Vec<i32> = rows.iter().map(|(_, values)| values[c].season).collect();
            fractional_ranks(&season)
        })
        .collect();

    let mut managers: Vec<RankedManager> = rows
        .iter()
        .enumerate()
        .map(|(m, (manager, values))| {
            let mut ranked = BTreeMap::new();
            let mut total = 0.0;
            let mut sum = PeriodPoints::default();
            for (c, category) in categories.iter().enumerate() {
                let rank = column_ranks[c][m];
                total += rank;
                sum.game_week = sum.game_week.saturating_add(values[c].game_week);
                sum.season = sum.season.saturating_add(values[c].season);
                ranked.insert(
                    *category,
                    CategoryRank {
                        points: values[c],
                        rank,
                    },
                );
            }
            RankedManager {
                manager_id: (*manager).clone(),
                categories: ranked,
                total,
                points: sum,
                order: 0,
            }
        })
        .collect();

    // Best total first, then most season points; stable for full ties.
    managers.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.points.season.cmp(&a.points.season))
    });
    for (order, manager) in managers.iter_mut().enumerate() {
        manager.order = order;
    }

    Ok(DivisionRanking {
        division_id: division_id.clone(),
        game_week,
        categories: categories.to_vec(),
        managers,
    })
}
