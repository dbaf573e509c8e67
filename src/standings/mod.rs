//! Division rankings and their week-over-week movement.
//!
//! - `rank`: Fractional category ranks and display order
//! - `change`: Rank changes between consecutive game weeks
//! - `standing`: Table rows combining both

pub mod change;
pub mod rank;
pub mod standing;

pub use change::{rank_changes, RankChange};
pub use rank::{
    ensure_distinct, fractional_ranks, rank_division, CategoryRank, DivisionRanking, ManagerPoints, PeriodPoints,
    RankedManager,
};
pub use standing::{DivisionStandings, ManagerStanding, RankedPoints};
