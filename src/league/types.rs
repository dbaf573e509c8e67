//! League data as it arrives from the feeds, normalised to canonical types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{
    cli::types::{de_optional_code, DivisionId, GameWeekIndex, ManagerId, PlayerCode, Position},
    error::LeagueError,
    scoring::stats::StatLine,
};

/// Prefix used for the display name of the unknown-player sentinel.
pub const UNKNOWN_PLAYER_PREFIX: &str = "UNKNOWN";

/// A single match and the stats one player recorded in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
    #[serde(default)]
    pub home_score: Option<u16>,
    #[serde(default)]
    pub away_score: Option<u16>,
    #[serde(default)]
    pub stats: StatLine,
}

/// Player data from the player/fixture feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub code: PlayerCode,
    pub name: String,
    #[serde(default)]
    pub club: String,
    pub position: Position,
    /// Free-text availability (injured, suspended, ...), display only.
    #[serde(default)]
    pub status: Option<String>,
    /// Newly added to the feed and not yet matched to a manager's list.
    #[serde(default, rename = "new")]
    pub is_new: bool,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
}

impl Player {
    /// Sentinel used wherever a slot cannot be resolved to a known player.
    pub fn unknown(code: Option<PlayerCode>) -> Self {
        let name = match code {
            Some(code) => format!("{UNKNOWN_PLAYER_PREFIX}: {code}"),
            None => format!("{UNKNOWN_PLAYER_PREFIX}:"),
        };
        Self {
            code: code.unwrap_or(PlayerCode(0)),
            name,
            club: String::new(),
            position: Position::Sub,
            status: None,
            is_new: false,
            fixtures: Vec::new(),
        }
    }
}

/// A scoring period, half-open `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameWeek {
    pub index: GameWeekIndex,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub is_current: bool,
}

impl GameWeek {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

/// The kind of roster change a transfer row records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TransferKind {
    Transfer,
    Swap,
    NewPlayer,
    LoanStart,
    LoanEnd,
    Waiver,
}

impl TransferKind {
    /// Waiver requests and new-player notices never move a player between slots.
    pub fn affects_roster(&self) -> bool {
        !matches!(self, TransferKind::Waiver | TransferKind::NewPlayer)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransferKind::Transfer => "Transfer",
            TransferKind::Swap => "Swap",
            TransferKind::NewPlayer => "New Player",
            TransferKind::LoanStart => "Loan Start",
            TransferKind::LoanEnd => "Loan End",
            TransferKind::Waiver => "Waiver",
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for TransferKind {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "transfer" => Ok(TransferKind::Transfer),
            "swap" => Ok(TransferKind::Swap),
            "newplayer" => Ok(TransferKind::NewPlayer),
            "loanstart" => Ok(TransferKind::LoanStart),
            "loanend" => Ok(TransferKind::LoanEnd),
            "waiver" => Ok(TransferKind::Waiver),
            _ => Err(LeagueError::InvalidTransferKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for TransferKind {
    type Error = LeagueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TransferKind> for String {
    fn from(kind: TransferKind) -> String {
        kind.label().to_string()
    }
}

fn default_valid() -> bool {
    true
}

/// One row of the transfer feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TransferKind,
    pub manager_id: ManagerId,
    #[serde(default, deserialize_with = "de_optional_code")]
    pub code_in: Option<PlayerCode>,
    #[serde(default, deserialize_with = "de_optional_code")]
    pub code_out: Option<PlayerCode>,
    #[serde(default = "default_valid")]
    pub valid: bool,
}

/// One of the twelve squad slots as drafted at season start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadSlot {
    pub squad_position_index: u8,
    pub squad_position_id: Position,
    #[serde(default, deserialize_with = "de_optional_code")]
    pub player_code: Option<PlayerCode>,
}

/// A manager and their draft-day squad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    pub id: ManagerId,
    #[serde(default)]
    pub name: String,
    pub division_id: DivisionId,
    #[serde(default)]
    pub squad: Vec<SquadSlot>,
}

impl Manager {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.id.as_str()
        } else {
            &self.name
        }
    }
}

/// Everything the scoring pipeline consumes for one season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSnapshot {
    #[serde(default)]
    pub game_weeks: Vec<GameWeek>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub managers: Vec<Manager>,
    #[serde(default)]
    pub transfers: Vec<Transfer>,
}
