//! League feeds: game weeks, players and fixtures, squads, transfers.
//!
//! - `types`: Feed records, normalised at deserialization time
//! - `calendar`: Validated game week ordering and lookups
//! - `directory`: Player lookup by code
//! - `feed`: Reading a league snapshot from disk

pub mod calendar;
pub mod directory;
pub mod feed;
pub mod types;

pub use calendar::GameWeekCalendar;
pub use directory::PlayerDirectory;
pub use feed::load_snapshot;
pub use types::{
    Fixture, GameWeek, LeagueSnapshot, Manager, Player, SquadSlot, Transfer, TransferKind,
    UNKNOWN_PLAYER_PREFIX,
};
