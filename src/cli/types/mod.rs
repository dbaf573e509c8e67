//! Type-safe wrappers and enums for draft league data.

pub mod ids;
pub mod position;

pub use ids::{de_optional_code, DivisionId, GameWeekIndex, ManagerId, PlayerCode};
pub use position::{Position, PositionCategory, SQUAD_LAYOUT};
