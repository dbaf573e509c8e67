//! Stat lines, scoring rules, and their aggregation into player and team totals.

pub mod aggregate;
pub mod rules;
pub mod stats;
pub mod team;

pub use aggregate::{aggregate, derive_player_season, PlayerSeason};
pub use rules::ScoringRules;
pub use stats::{StatKey, StatLine};
pub use team::{score_team, CategoryPoints, ScoredSlot, SeasonStats, TeamSheet};
