//! Squad rule checks for a division.
//!
//! The checks only ever produce warnings; they never change scoring.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::{
    cli::types::{ManagerId, PlayerCode, Position},
    league::PlayerDirectory,
    roster::ResolvedSlot,
};


/// Default number of players a manager may hold from one club.
pub const DEFAULT_CLUB_QUOTA: usize = 2;

/// A manager's slot within the division.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRef {
    pub manager_id: ManagerId,
    pub squad_position_index: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicatePlayer {
    pub player_code: PlayerCode,
    pub player_name: String,
    pub holders: Vec<SlotRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubQuotaBreach {
    pub manager_id: ManagerId,
    pub club: String,
    pub players: Vec<PlayerCode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionMismatch {
    pub slot: SlotRef,
    pub player_code: PlayerCode,
    pub slot_position: Position,
    pub player_position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub slot: SlotRef,
    pub player_code: PlayerCode,
    pub player_name: String,
}

/// The four independent warning lists for a division.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadWarnings {
    pub duplicates: Vec<DuplicatePlayer>,
    pub club_quota: Vec<ClubQuotaBreach>,
    pub position_mismatches: Vec<PositionMismatch>,
    pub new_players: Vec<NewPlayer>,
}

impl SquadWarnings {
    pub fn is_empty(&self) -> bool {
        self.duplicates.is_empty()
            && self.club_quota.is_empty()
            && self.position_mismatches.is_empty()
            && self.new_players.is_empty()
    }

    pub fn len(&self) -> usize {
        self.duplicates.len()
            + self.club_quota.len()
            + self.position_mismatches.len()
            + self.new_players.len()
    }
}

/// Check every manager's resolved squad in a division.
///
/// Slots holding the unknown-player sentinel are skipped by every check.
pub fn validate_squads(
    squads: &[(&ManagerId, &[ResolvedSlot])],
    directory: &PlayerDirectory,
    club_quota: usize,
) -> SquadWarnings {
    let mut warnings = SquadWarnings::default();
    let mut holders: BTreeMap<PlayerCode, Vec<SlotRef>> = BTreeMap::new();

    for (manager_id, slots) in squads {
        let mut clubs: BTreeMap<&str, Vec<PlayerCode>> = BTreeMap::new();

        for slot in slots.iter() {
            let Some(player) = slot.occupant.player(directory) else {
                continue;
            };
            let at = SlotRef {
                manager_id: (*manager_id).clone(),
                squad_position_index: slot.squad_position_index,
            };

            holders.entry(player.code).or_default().push(at.clone());
            // Club-less players share no club with anyone.
            let club = player.club.trim();
            if !club.is_empty() {
                clubs.entry(club).or_default().push(player.code);
            }

            if slot.squad_position_id != Position::Sub && player.position != slot.squad_position_id
            {
                warnings.position_mismatches.push(PositionMismatch {
                    slot: at.clone(),
                    player_code: player.code,
                    slot_position: slot.squad_position_id,
                    player_position: player.position,
                });
            }

            if player.is_new {
                warnings.new_players.push(NewPlayer {
                    slot: at,
                    player_code: player.code,
                    player_name: player.name.clone(),
                });
            }
        }

        for (club, players) in clubs {
            if players.len() > club_quota {
                warnings.club_quota.push(ClubQuotaBreach {
                    manager_id: (*manager_id).clone(),
                    club: club.to_string(),
                    players,
                });
            }
        }
    }

    warnings.duplicates = holders
        .into_iter()
        .filter(|(_, slots)| slots.len() > 1)
        .map(|(code, holders)| DuplicatePlayer {
            player_code: code,
            player_name: directory
                .get(code)
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            holders,
        })
        .collect();

    warnings
}
