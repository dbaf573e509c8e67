//! Which player held which squad slot, week by week.
//!
//! Each slot is a chain of half-open occupancy intervals. The chain starts at
//! season start with the drafted player; every qualifying transfer that names
//! the slot's current occupant closes the open interval at the transfer time
//! and opens a new one. The last interval always runs to season end.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::{
    cli::types::{GameWeekIndex, ManagerId, PlayerCode, Position},
    league::{GameWeekCalendar, Player, PlayerDirectory, SquadSlot, Transfer, TransferKind},
    quality::{DataQualityIssue, DataQualityReport, DropReason},
};


/// The resolved holder of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "code", rename_all = "camelCase")]
pub enum Occupant {
    Player(PlayerCode),
    /// Sentinel for a slot that cannot be resolved; keeps the feed's code if it had one.
    Unknown(Option<PlayerCode>),
}

impl Occupant {
    pub fn code(&self) -> Option<PlayerCode> {
        match self {
            Occupant::Player(code) => Some(*code),
            Occupant::Unknown(code) => *code,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Occupant::Unknown(_))
    }

    fn for_code(code: PlayerCode, directory: &PlayerDirectory) -> Self {
        if directory.contains(code) {
            Occupant::Player(code)
        } else {
            Occupant::Unknown(Some(code))
        }
    }

    /// The player record, or the zero-stat sentinel.
    pub fn player<'a>(&self, directory: &'a PlayerDirectory) -> Option<&'a Player> {
        match self {
            Occupant::Player(code) => directory.get(*code),
            Occupant::Unknown(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupancy {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub occupant: Occupant,
}

impl Occupancy {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

/// Full occupancy history of one squad slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotHistory {
    pub squad_position_index: u8,
    pub squad_position_id: Position,
    pub intervals: Vec<Occupancy>,
}

impl SlotHistory {
    pub fn occupant_at(&self, at: DateTime<Utc>) -> Occupant {
        self.intervals
            .iter()
            .find(|interval| interval.contains(at))
            .map(|interval| interval.occupant)
            .unwrap_or(Occupant::Unknown(None))
    }
}

/// A slot's occupant for one game week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSlot {
    pub squad_position_index: u8,
    pub squad_position_id: Position,
    pub occupant: Occupant,
    /// Occupant differs from the previous game week's.
    pub has_changed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum TransferOutcome {
    /// Moved players in the listed slots.
    Applied { slots: Vec<u8> },
    Dropped { reason: DropReason },
    /// Invalid row, or a type that never changes the roster.
    Ignored,
}

/// A manager's transfer row and what resolution did with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub timestamp: DateTime<Utc>,
    pub kind: TransferKind,
    pub code_in: Option<PlayerCode>,
    pub code_out: Option<PlayerCode>,
    pub outcome: TransferOutcome,
}

/// Resolved roster history for one manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterTimeline {
    pub manager_id: ManagerId,
    pub slots: Vec<SlotHistory>,
    pub weeks: BTreeMap<GameWeekIndex, Vec<ResolvedSlot>>,
    pub transfers: Vec<TransferRecord>,
}

/// Open interval while the chain for a slot is being built.
struct OpenSlot {
    squad_position_index: u8,
    squad_position_id: Position,
    occupant: Occupant,
    since: DateTime<Utc>,
    closed: Vec<Occupancy>,
}

impl OpenSlot {
    fn hand_over(&mut self, at: DateTime<Utc>, next: Occupant) {
        self.closed.push(Occupancy {
            start: self.since,
            end: at,
            occupant: self.occupant,
        });
        self.since = at;
        self.occupant = next;
    }

    fn finish(mut self, season_end: DateTime<Utc>) -> SlotHistory {
        self.closed.push(Occupancy {
            start: self.since,
            end: season_end,
            occupant: self.occupant,
        });
        SlotHistory {
            squad_position_index: self.squad_position_index,
            squad_position_id: self.squad_position_id,
            intervals: self.closed,
        }
    }
}

impl RosterTimeline {
    /// Resolve a manager's slots across the season.
    ///
    /// `transfers` may contain every manager's rows; only `manager_id`'s are used,
    /// in ascending timestamp order.
    pub fn resolve(
        manager_id: &ManagerId,
        draft: &[SquadSlot],
        transfers: &[Transfer],
        calendar: &GameWeekCalendar,
        directory: &PlayerDirectory,
        report: &mut DataQualityReport,
    ) -> Self {
        let season_start = calendar.season_start().unwrap_or(DateTime::<Utc>::MIN_UTC);
        let season_end = calendar.season_end().unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut draft: Vec<&SquadSlot> = draft.iter().collect();
        draft.sort_by_key(|slot| slot.squad_position_index);

        let mut open: Vec<OpenSlot> = draft
            .into_iter()
            .map(|slot| {
                let occupant = match slot.player_code {
                    Some(code) => {
                        let occupant = Occupant::for_code(code, directory);
                        if occupant.is_unknown() {
                            report.record(DataQualityIssue::UnknownDraftPlayer {
                                manager: manager_id.clone(),
                                slot: slot.squad_position_index,
                                code,
                            });
                        }
                        occupant
                    }
                    None => {
                        report.record(DataQualityIssue::EmptyDraftSlot {
                            manager: manager_id.clone(),
                            slot: slot.squad_position_index,
                        });
                        Occupant::Unknown(None)
                    }
                };
                OpenSlot {
                    squad_position_index: slot.squad_position_index,
                    squad_position_id: slot.squad_position_id,
                    occupant,
                    since: season_start,
                    closed: Vec::new(),
                }
            })
            .collect();

        let mut own: Vec<&Transfer> = transfers
            .iter()
            .filter(|t| &t.manager_id == manager_id)
            .collect();
        own.sort_by_key(|t| t.timestamp);

        let records = own
            .into_iter()
            .map(|transfer| {
                let outcome = apply_transfer(manager_id, transfer, &mut open, directory, report);
                TransferRecord {
                    timestamp: transfer.timestamp,
                    kind: transfer.kind,
                    code_in: transfer.code_in,
                    code_out: transfer.code_out,
                    outcome,
                }
            })
            .collect();

        let slots: Vec<SlotHistory> = open.into_iter().map(|s| s.finish(season_end)).collect();
        let weeks = resolve_weeks(&slots, calendar);

        Self {
            manager_id: manager_id.clone(),
            slots,
            weeks,
            transfers: records,
        }
    }

    /// The twelve resolved slots for a game week, in squad order.
    pub fn week(&self, index: GameWeekIndex) -> Option<&[ResolvedSlot]> {
        self.weeks.get(&index).map(Vec::as_slice)
    }
}

fn apply_transfer(
    manager_id: &ManagerId,
    transfer: &Transfer,
    open: &mut [OpenSlot],
    directory: &PlayerDirectory,
    report: &mut DataQualityReport,
) -> TransferOutcome {
    if !transfer.valid || !transfer.kind.affects_roster() {
        return TransferOutcome::Ignored;
    }

    let mut dropped = |reason: DropReason| {
        report.record(DataQualityIssue::TransferDropped {
            manager: manager_id.clone(),
            timestamp: transfer.timestamp,
            code_out: transfer.code_out,
            code_in: transfer.code_in,
            reason,
        });
        TransferOutcome::Dropped { reason }
    };

    let (Some(code_out), Some(code_in)) = (transfer.code_out, transfer.code_in) else {
        return dropped(DropReason::MissingCode);
    };

    let is_swap = transfer.kind == TransferKind::Swap;
    let incoming = Occupant::for_code(code_in, directory);
    let outgoing = Occupant::for_code(code_out, directory);

    // Decide every slot against the pre-transfer roster, then apply.
    let changes: Vec<(usize, Occupant)> = open
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| match slot.occupant.code() {
            Some(code) if code == code_out => Some((i, incoming)),
            Some(code) if is_swap && code == code_in => Some((i, outgoing)),
            _ => None,
        })
        .collect();

    if changes.is_empty() {
        let reason = if directory.contains(code_out) {
            DropReason::NoMatchingSlot
        } else {
            DropReason::UnknownPlayerOut
        };
        return dropped(reason);
    }

    if incoming.is_unknown() {
        report.record(DataQualityIssue::UnknownPlayerIn {
            manager: manager_id.clone(),
            timestamp: transfer.timestamp,
            code: code_in,
        });
    }

    let mut applied = Vec::with_capacity(changes.len());
    for (i, next) in changes {
        let slot = &mut open[i];
        debug!(
            manager = %manager_id,
            slot = slot.squad_position_index,
            kind = %transfer.kind,
            at = %transfer.timestamp,
            "slot changed hands"
        );
        slot.hand_over(transfer.timestamp, next);
        applied.push(slot.squad_position_index);
    }

    TransferOutcome::Applied { slots: applied }
}

fn resolve_weeks(
    slots: &[SlotHistory],
    calendar: &GameWeekCalendar,
) -> BTreeMap<GameWeekIndex, Vec<ResolvedSlot>> {
    let mut weeks = BTreeMap::new();
    let mut previous: Option<Vec<Occupant>> = None;

    for week in calendar.weeks() {
        let resolved: Vec<ResolvedSlot> = slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let occupant = slot.occupant_at(week.start);
                let has_changed = previous
                    .as_ref()
                    .and_then(|prev| prev.get(i))
                    .is_some_and(|prev| *prev != occupant);
                ResolvedSlot {
                    squad_position_index: slot.squad_position_index,
                    squad_position_id: slot.squad_position_id,
                    occupant,
                    has_changed,
                }
            })
            .collect();

        previous = Some(resolved.iter().map(|r| r.occupant).collect());
        weeks.insert(week.index, resolved);
    }

    weeks
}
