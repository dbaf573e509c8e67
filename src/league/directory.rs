//! Player lookup by code.

use std::collections::HashMap;

use crate::{cli::types::PlayerCode, league::types::Player};

/// All known players, keyed by their canonical code.
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: HashMap<PlayerCode, Player>,
}

impl PlayerDirectory {
    /// Later rows win when the feed lists a code twice.
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players: players.into_iter().map(|p| (p.code, p)).collect(),
        }
    }

    pub fn get(&self, code: PlayerCode) -> Option<&Player> {
        self.players.get(&code)
    }

    pub fn contains(&self, code: PlayerCode) -> bool {
        self.players.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::Position;

    fn player(code: u32, name: &str) -> Player {
        Player {
            code: PlayerCode::new(code),
            name: name.to_string(),
            club: "Arsenal".to_string(),
            position: Position::Mid,
            status: None,
            is_new: false,
            fixtures: Vec::new(),
        }
    }

    #[test]
    fn test_lookup_by_code() {
        let directory = PlayerDirectory::new(vec![player(1, "Saka"), player(2, "Rice")]);
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.get(PlayerCode::new(2)).map(|p| p.name.as_str()), Some("Rice"));
        assert!(!directory.contains(PlayerCode::new(3)));
    }

    #[test]
    fn test_duplicate_codes_keep_last_row() {
        let directory = PlayerDirectory::new(vec![player(1, "Old"), player(1, "New")]);
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get(PlayerCode::new(1)).map(|p| p.name.as_str()), Some("New"));
    }
}
