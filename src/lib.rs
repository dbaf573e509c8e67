//! Draft League scoring library
//!
//! Turns a season's league feeds (game weeks, players and fixtures, draft
//! squads, transfers) into team sheets, division standings and squad
//! warnings for a fantasy-football draft league.
//!
//! ## Features
//!
//! - **Stat Aggregation**: Position-weighted points per game week and season
//! - **Roster Timelines**: Slot occupancy resolved across transfers, swaps and loans
//! - **Division Standings**: Fractional category ranks with week-over-week movement
//! - **Squad Validation**: Duplicate, club quota, position and new-player warnings
//! - **Data Quality**: Unresolvable feed rows collected as a report, never fatal
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use draft_league::{core::LeagueConfig, pipeline::League, DivisionId};
//! use std::path::Path;
//!
//! # fn example() -> draft_league::Result<()> {
//! let league = League::from_path(Path::new("league.json"), LeagueConfig::default())?;
//! let week = league.resolve_week(None)?;
//! let table = league.division_week(&DivisionId::new("premier"), week)?;
//!
//! for row in &table.standings {
//!     println!("{} {}", row.manager_name, row.total.rank);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a snapshot and config without passing flags:
//! ```bash
//! export DRAFT_LEAGUE_SNAPSHOT=/data/league.json
//! export DRAFT_LEAGUE_CONFIG=/data/config.json
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod league;
pub mod pipeline;
pub mod quality;
pub mod roster;
pub mod scoring;
pub mod standings;
pub mod validate;

// Re-export commonly used types
pub use cli::types::{DivisionId, GameWeekIndex, ManagerId, PlayerCode, Position, PositionCategory};
pub use error::{LeagueError, Result};
pub use pipeline::League;

pub const SNAPSHOT_ENV_VAR: &str = "DRAFT_LEAGUE_SNAPSHOT";
pub const CONFIG_ENV_VAR: &str = "DRAFT_LEAGUE_CONFIG";
