//! Non-fatal data-quality findings collected while deriving standings.
//!
//! Findings are values, returned next to the primary result. Each distinct
//! finding is logged once, at the moment it is first recorded.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use tracing::warn;

use crate::cli::types::{ManagerId, PlayerCode};

/// Why a transfer row was left out of roster resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DropReason {
    /// The outgoing player code is not in the player feed.
    UnknownPlayerOut,
    /// The row has no outgoing or no incoming code.
    MissingCode,
    /// The outgoing player was not in any of the manager's slots at the time.
    NoMatchingSlot,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::UnknownPlayerOut => write!(f, "outgoing player is unknown"),
            DropReason::MissingCode => write!(f, "player code missing"),
            DropReason::NoMatchingSlot => write!(f, "no slot holds the outgoing player"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DataQualityIssue {
    /// A draft slot names a player code that is not in the player feed.
    UnknownDraftPlayer {
        manager: ManagerId,
        slot: u8,
        code: PlayerCode,
    },
    /// A draft slot has no player at all.
    EmptyDraftSlot { manager: ManagerId, slot: u8 },
    /// A transfer brings in a player code that is not in the player feed.
    UnknownPlayerIn {
        manager: ManagerId,
        timestamp: DateTime<Utc>,
        code: PlayerCode,
    },
    TransferDropped {
        manager: ManagerId,
        timestamp: DateTime<Utc>,
        code_out: Option<PlayerCode>,
        code_in: Option<PlayerCode>,
        reason: DropReason,
    },
    /// A fixture's kickoff falls outside every game week.
    FixtureOutsideGameWeeks {
        player: PlayerCode,
        date: DateTime<Utc>,
    },
}

impl fmt::Display for DataQualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataQualityIssue::UnknownDraftPlayer {
                manager,
                slot,
                code,
            } => write!(f, "{manager} slot {slot}: drafted player {code} not found"),
            DataQualityIssue::EmptyDraftSlot { manager, slot } => {
                write!(f, "{manager} slot {slot}: no drafted player")
            }
            DataQualityIssue::UnknownPlayerIn {
                manager,
                timestamp,
                code,
            } => write!(
                f,
                "{manager} transfer at {timestamp}: incoming player {code} not found"
            ),
            DataQualityIssue::TransferDropped {
                manager,
                timestamp,
                code_out,
                code_in,
                reason,
            } => write!(
                f,
                "{manager} transfer at {timestamp} ({} out, {} in) dropped: {reason}",
                code_or_dash(*code_out),
                code_or_dash(*code_in)
            ),
            DataQualityIssue::FixtureOutsideGameWeeks { player, date } => {
                write!(f, "player {player}: fixture on {date} is outside every game week")
            }
        }
    }
}

fn code_or_dash(code: Option<PlayerCode>) -> String {
    code.map_or_else(|| "-".to_string(), |c| c.to_string())
}

/// Deduplicated accumulator of data-quality findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataQualityReport {
    issues: BTreeSet<DataQualityIssue>,
}

impl DataQualityReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding; returns false if it had already been recorded.
    pub fn record(&mut self, issue: DataQualityIssue) -> bool {
        if self.issues.contains(&issue) {
            return false;
        }
        warn!(%issue, "data quality");
        self.issues.insert(issue)
    }

    /// Fold another report in without re-logging its findings.
    pub fn merge(&mut self, other: DataQualityReport) {
        self.issues.extend(other.issues);
    }

    pub fn issues(&self) -> impl Iterator<Item = &DataQualityIssue> {
        self.issues.iter()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deduplicates() {
        let mut report = DataQualityReport::new();
        let issue = DataQualityIssue::EmptyDraftSlot {
            manager: ManagerId::new("alice"),
            slot: 3,
        };

        assert!(report.record(issue.clone()));
        assert!(!report.record(issue));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_merge_combines_reports() {
        let mut a = DataQualityReport::new();
        a.record(DataQualityIssue::EmptyDraftSlot {
            manager: ManagerId::new("alice"),
            slot: 0,
        });
        let mut b = DataQualityReport::new();
        b.record(DataQualityIssue::EmptyDraftSlot {
            manager: ManagerId::new("bob"),
            slot: 0,
        });
        b.record(DataQualityIssue::EmptyDraftSlot {
            manager: ManagerId::new("alice"),
            slot: 0,
        });

        a.merge(b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_dropped_transfers_at_the_same_moment_stay_distinct() {
        let timestamp = DateTime::parse_from_rfc3339("2024-09-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let dropped = |code_out: u32| DataQualityIssue::TransferDropped {
            manager: ManagerId::new("alice"),
            timestamp,
            code_out: Some(PlayerCode::new(code_out)),
            code_in: None,
            reason: DropReason::MissingCode,
        };

        let mut report = DataQualityReport::new();
        assert!(report.record(dropped(7)));
        assert!(report.record(dropped(8)));
        assert_eq!(report.len(), 2);
        assert!(dropped(7).to_string().contains("(7 out, - in)"));
    }

    #[test]
    fn test_issue_display_mentions_context() {
        let issue = DataQualityIssue::UnknownDraftPlayer {
            manager: ManagerId::new("carol"),
            slot: 9,
            code: PlayerCode::new(404),
        };
        let text = issue.to_string();
        assert!(text.contains("carol"));
        assert!(text.contains("404"));
    }
}
