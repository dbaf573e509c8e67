//! Error types for the draft league scoring engine

use thiserror::Error;

use crate::cli::types::{DivisionId, GameWeekIndex, ManagerId, PositionCategory};

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("League snapshot not provided and {env_var} environment variable not set")]
    MissingSnapshot { env_var: String },

    #[error("Failed to parse game week: {0}")]
    InvalidGameWeek(#[from] std::num::ParseIntError),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid player code: {code}")]
    InvalidPlayerCode { code: String },

    #[error("Invalid transfer type: {kind}")]
    InvalidTransferKind { kind: String },

    #[error("Invalid game week configuration: {message}")]
    InvalidGameWeeks { message: String },

    #[error("No scoring rule defined for position {position}")]
    MissingScoringRule { position: String },

    #[error("Category {category} is listed more than once")]
    DuplicateCategory { category: PositionCategory },

    #[error("Game week {game_week} does not exist")]
    UnknownGameWeek { game_week: GameWeekIndex },

    #[error("Manager not found: {manager}")]
    UnknownManager { manager: ManagerId },

    #[error("Division not found: {division}")]
    UnknownDivision { division: DivisionId },

    #[error("Manager {manager} in division {division} has no points for game week {game_week}")]
    MissingManagerPoints {
        manager: ManagerId,
        division: DivisionId,
        game_week: GameWeekIndex,
    },

    #[error(
        "Manager {manager} in division {division} has no {category} points for game week {game_week}"
    )]
    MissingCategoryPoints {
        manager: ManagerId,
        division: DivisionId,
        game_week: GameWeekIndex,
        category: PositionCategory,
    },
}

impl LeagueError {
    /// Integrity errors mean upstream data is broken and standings must not be published.
    pub fn is_integrity(&self) -> bool {
        matches!(
            self,
            LeagueError::MissingManagerPoints { .. }
                | LeagueError::MissingCategoryPoints { .. }
                | LeagueError::MissingScoringRule { .. }
                | LeagueError::DuplicateCategory { .. }
        )
    }
}
