//! Identifier types for the draft league.
//!
//! Feeds disagree on whether player codes are numbers or strings, so every
//! identifier is normalised here, at the ingestion boundary, before any scoring
//! code sees it.

use crate::error::{LeagueError, Result};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for player codes.
///
/// Accepts both JSON numbers and numeric strings when deserializing.
///
/// # Examples
///
/// ```rust
/// use draft_league::PlayerCode;
///
/// let code: PlayerCode = "4021".parse().unwrap();
/// assert_eq!(code, PlayerCode::new(4021));
/// assert_eq!(code.to_string(), "4021");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlayerCode(pub u32);

impl PlayerCode {
    pub fn new(code: u32) -> Self {
        Self(code)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerCode {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| LeagueError::InvalidPlayerCode {
                code: s.to_string(),
            })
    }
}

impl<'de> Deserialize<'de> for PlayerCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawCode {
            Number(u32),
            Text(String),
        }

        match RawCode::deserialize(deserializer)? {
            RawCode::Number(n) => Ok(Self(n)),
            RawCode::Text(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

/// Deserialize an optional player code where blank strings mean "no player".
pub fn de_optional_code<'de, D>(deserializer: D) -> std::result::Result<Option<PlayerCode>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCode {
        Number(u32),
        Text(String),
    }

    match Option::<RawCode>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawCode::Number(n)) => Ok(Some(PlayerCode(n))),
        Some(RawCode::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawCode::Text(s)) => s.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Type-safe wrapper for manager identifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ManagerId(pub String);

impl ManagerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ManagerId {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.to_string()))
    }
}

/// Type-safe wrapper for division identifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DivisionId(pub String);

impl DivisionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DivisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DivisionId {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.to_string()))
    }
}

/// Type-safe wrapper for game week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameWeekIndex(pub u16);

impl GameWeekIndex {
    pub fn new(index: u16) -> Self {
        Self(index)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for GameWeekIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameWeekIndex {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        code: PlayerCode,
        #[serde(default, deserialize_with = "de_optional_code")]
        other: Option<PlayerCode>,
    }

    #[test]
    fn test_player_code_from_number_and_string() {
        let a: Row = serde_json::from_str(r#"{"code": 17}"#).unwrap();
        let b: Row = serde_json::from_str(r#"{"code": "17"}"#).unwrap();
        assert_eq!(a.code, b.code);
        assert_eq!(a.code, PlayerCode::new(17));
    }

    #[test]
    fn test_player_code_rejects_garbage() {
        let result: std::result::Result<Row, _> = serde_json::from_str(r#"{"code": "abc"}"#);
        assert!(result.is_err());
        assert!("x1".parse::<PlayerCode>().is_err());
    }

    #[test]
    fn test_optional_code_blank_is_none() {
        let row: Row = serde_json::from_str(r#"{"code": 1, "other": ""}"#).unwrap();
        assert_eq!(row.other, None);

        let row: Row = serde_json::from_str(r#"{"code": 1, "other": null}"#).unwrap();
        assert_eq!(row.other, None);

        let row: Row = serde_json::from_str(r#"{"code": 1}"#).unwrap();
        assert_eq!(row.other, None);

        let row: Row = serde_json::from_str(r#"{"code": 1, "other": " 99 "}"#).unwrap();
        assert_eq!(row.other, Some(PlayerCode::new(99)));
    }

    #[test]
    fn test_string_ids_display() {
        assert_eq!(ManagerId::new("alice").to_string(), "alice");
        assert_eq!(DivisionId::new("premier").as_str(), "premier");
    }
}
