//! Position-weighted scoring rules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    cli::types::Position,
    error::{LeagueError, Result},
    scoring::stats::{StatKey, StatLine},
};

/// Magnitude used to probe whether a stat scores at all for a position.
pub const NEUTRAL_MAGNITUDE: i32 = 1;

/// Points per unit of each stat, keyed by position.
///
/// Serialized as `{ "GK": { "goals": 10, ... }, ... }`. A position with an
/// empty table is valid and never scores; a position missing from the table
/// is a configuration error caught by [`ScoringRules::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoringRules {
    pub weights: BTreeMap<Position, BTreeMap<StatKey, i32>>,
}

impl Default for ScoringRules {
    fn default() -> Self {
        use Position::*;
        use StatKey::*;

        let outfield = [Fb, Cb, Mid, Wa, Ca];
        let mut weights: BTreeMap<Position, BTreeMap<StatKey, i32>> = BTreeMap::new();

        for pos in [Gk, Fb, Cb, Mid, Wa, Ca] {
            let table = weights.entry(pos).or_default();
            table.insert(Apps, 2);
            table.insert(Subs, 1);
            table.insert(YellowCards, -1);
            table.insert(RedCards, -3);
        }
        for (pos, goals) in [(Gk, 10), (Fb, 6), (Cb, 6), (Mid, 5), (Wa, 4), (Ca, 3)] {
            weights.entry(pos).or_default().insert(Goals, goals);
        }
        for pos in outfield {
            weights.entry(pos).or_default().insert(Assists, 3);
        }
        for (pos, clean_sheet) in [(Gk, 5), (Cb, 5), (Fb, 3)] {
            let table = weights.entry(pos).or_default();
            table.insert(CleanSheets, clean_sheet);
            table.insert(Conceded, -1);
        }
        weights.entry(Gk).or_default().insert(PensSaved, 5);
        weights.insert(Sub, BTreeMap::new());

        Self { weights }
    }
}

impl ScoringRules {
    /// Every position must have a rule table, even if it is empty.
    pub fn validate(&self) -> Result<()> {
        for pos in Position::ALL {
            if !self.weights.contains_key(&pos) {
                return Err(LeagueError::MissingScoringRule {
                    position: pos.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn weight(&self, key: StatKey, position: Position) -> i32 {
        self.weights
            .get(&position)
            .and_then(|table| table.get(&key))
            .copied()
            .unwrap_or(0)
    }

    /// Points earned by `value` units of `key` for a player in `position`.
    ///
    /// Saturates at the `i32` bounds rather than overflowing on absurd feed counts.
    pub fn score(&self, key: StatKey, value: i32, position: Position) -> i32 {
        self.weight(key, position).saturating_mul(value)
    }

    pub fn is_scoreable(&self, key: StatKey, position: Position) -> bool {
        self.score(key, NEUTRAL_MAGNITUDE, position) != 0
    }

    /// Compute points for one raw fixture line.
    pub fn compute_points(&self, line: &StatLine, position: Position) -> i32 {
        StatKey::ALL
            .into_iter()
            .map(|key| self.score(key, line.get(key), position))
            .fold(0, i32::saturating_add)
    }
}
