//! Squad positions and their scoring categories.

use crate::error::LeagueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player positions used by the draft league.
///
/// Every position belongs to exactly one [`PositionCategory`]. `Sub` is the
/// bench slot: it never scores on its own and shares the goalkeeper category.
///
/// # Examples
///
/// ```rust
/// use draft_league::{Position, PositionCategory};
///
/// let pos: Position = "Striker".parse().unwrap();
/// assert_eq!(pos, Position::Ca);
/// assert_eq!(Position::Sub.category(), PositionCategory::Gks);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    /// Goalkeeper
    Gk,
    /// Full back
    Fb,
    /// Centre back
    Cb,
    /// Midfielder
    Mid,
    /// Wide attacker
    Wa,
    /// Centre attacker
    Ca,
    /// Substitute (bench slot)
    Sub,
}

/// Nominal position of each of the twelve squad slots, by squad position index.
pub const SQUAD_LAYOUT: [Position; 12] = [
    Position::Gk,
    Position::Fb,
    Position::Fb,
    Position::Cb,
    Position::Cb,
    Position::Mid,
    Position::Mid,
    Position::Wa,
    Position::Wa,
    Position::Ca,
    Position::Ca,
    Position::Sub,
];

impl Position {
    pub const ALL: [Position; 7] = [
        Position::Gk,
        Position::Fb,
        Position::Cb,
        Position::Mid,
        Position::Wa,
        Position::Ca,
        Position::Sub,
    ];

    /// The scoring bucket this position's points are counted in.
    pub fn category(&self) -> PositionCategory {
        match self {
            Position::Gk | Position::Sub => PositionCategory::Gks,
            Position::Fb => PositionCategory::Fbs,
            Position::Cb => PositionCategory::Cbs,
            Position::Mid => PositionCategory::Mids,
            Position::Wa => PositionCategory::Was,
            Position::Ca => PositionCategory::Cas,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Position::Gk => "GK",
            Position::Fb => "FB",
            Position::Cb => "CB",
            Position::Mid => "MID",
            Position::Wa => "WA",
            Position::Ca => "CA",
            Position::Sub => "SUB",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Position {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "GK" | "GOALKEEPER" | "KEEPER" => Ok(Position::Gk),
            "FB" | "FULLBACK" => Ok(Position::Fb),
            "CB" | "CENTREBACK" | "CENTERBACK" => Ok(Position::Cb),
            "MID" | "MIDFIELDER" | "MIDFIELD" => Ok(Position::Mid),
            "WA" | "WIDEATTACKER" | "WINGER" => Ok(Position::Wa),
            "CA" | "STR" | "STRIKER" | "CENTREATTACKER" | "CENTERATTACKER" | "FORWARD" => {
                Ok(Position::Ca)
            }
            "SUB" | "SUBSTITUTE" | "BENCH" => Ok(Position::Sub),
            _ => Err(LeagueError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = LeagueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(p: Position) -> String {
        p.code().to_string()
    }
}

/// Scoring buckets that divisions are ranked on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PositionCategory {
    Gks,
    Fbs,
    Cbs,
    Mids,
    Was,
    Cas,
}

impl PositionCategory {
    pub const ALL: [PositionCategory; 6] = [
        PositionCategory::Gks,
        PositionCategory::Fbs,
        PositionCategory::Cbs,
        PositionCategory::Mids,
        PositionCategory::Was,
        PositionCategory::Cas,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PositionCategory::Gks => "gks",
            PositionCategory::Fbs => "fbs",
            PositionCategory::Cbs => "cbs",
            PositionCategory::Mids => "mids",
            PositionCategory::Was => "was",
            PositionCategory::Cas => "cas",
        }
    }
}

impl fmt::Display for PositionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

impl FromStr for PositionCategory {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PositionCategory::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LeagueError::InvalidPosition {
                position: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parsing_aliases() {
        assert_eq!("gk".parse::<Position>().unwrap(), Position::Gk);
        assert_eq!("Centre Back".parse::<Position>().unwrap(), Position::Cb);
        assert_eq!("full-back".parse::<Position>().unwrap(), Position::Fb);
        assert_eq!("Wide Attacker".parse::<Position>().unwrap(), Position::Wa);
        assert_eq!("STR".parse::<Position>().unwrap(), Position::Ca);
        assert_eq!("Substitute".parse::<Position>().unwrap(), Position::Sub);
        assert!("LWB".parse::<Position>().is_err());
    }

    #[test]
    fn test_every_position_has_one_category() {
        for pos in Position::ALL {
            assert!(PositionCategory::ALL.contains(&pos.category()));
        }
        assert_eq!(Position::Gk.category(), Position::Sub.category());
    }

    #[test]
    fn test_squad_layout_shape() {
        assert_eq!(SQUAD_LAYOUT.len(), 12);
        assert_eq!(SQUAD_LAYOUT[0], Position::Gk);
        assert_eq!(SQUAD_LAYOUT[11], Position::Sub);
        for outfield in [Position::Fb, Position::Cb, Position::Mid, Position::Wa, Position::Ca] {
            assert_eq!(SQUAD_LAYOUT.iter().filter(|p| **p == outfield).count(), 2);
        }
    }

    #[test]
    fn test_position_serde_round_trip_uses_codes() {
        let json = serde_json::to_string(&Position::Mid).unwrap();
        assert_eq!(json, "\"MID\"");
        let parsed: Position = serde_json::from_str("\"Midfielder\"").unwrap();
        assert_eq!(parsed, Position::Mid);
    }

    #[test]
    fn test_category_keys() {
        assert_eq!(PositionCategory::Gks.to_string(), "gks");
        assert_eq!("CAS".parse::<PositionCategory>().unwrap(), PositionCategory::Cas);
        let json = serde_json::to_string(&PositionCategory::Mids).unwrap();
        assert_eq!(json, "\"mids\"");
    }
}
