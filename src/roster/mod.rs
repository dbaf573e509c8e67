//! Roster resolution across transfers and swaps.

pub mod timeline;

pub use timeline::{
    Occupancy, Occupant, ResolvedSlot, RosterTimeline, SlotHistory, TransferOutcome,
    TransferRecord,
};
