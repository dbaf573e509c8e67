//! Week-over-week rank movement.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::{
    cli::types::{ManagerId, PositionCategory},
    standings::rank::DivisionRanking,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankChange {
    pub categories: BTreeMap<PositionCategory, f64>,
    /// Always the sum of the category changes.
    pub total: f64,
}

/// Rank change of every manager in `current` against `previous`.
///
/// A manager or category absent from `previous` (or no previous week at all)
/// counts as a previous rank of 0.
pub fn rank_changes(
    previous: Option<&DivisionRanking>,
    current: &DivisionRanking,
) -> BTreeMap<ManagerId, RankChange> {
    current
        .managers
        .iter()
        .map(|manager| {
            let before = previous.and_then(|p| p.get(&manager.manager_id));
            let categories: BTreeMap<PositionCategory, f64> = manager
                .categories
                .iter()
                .map(|(category, now)| {
                    let was = before
                        .and_then(|b| b.categories.get(category))
                        .map(|r| r.rank)
                        .unwrap_or(0.0);
                    (*category, now.rank - was)
                })
                .collect();
            let total = categories.values().sum();

            (
                manager.manager_id.clone(),
                RankChange { categories, total },
            )
        })
        .collect()
}
