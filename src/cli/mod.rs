//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{DivisionId, GameWeekIndex, ManagerId};

/// Inputs shared by every command
#[derive(Debug, Args)]
pub struct LeagueArgs {
    /// League snapshot JSON (or set `DRAFT_LEAGUE_SNAPSHOT` env var).
    #[clap(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// League config JSON (or set `DRAFT_LEAGUE_CONFIG` env var).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log pipeline progress to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "draft-league", about = "Draft league scoring and standings")]
pub struct DraftLeague {
    #[clap(flatten)]
    pub league: LeagueArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Division tables with category ranks and movement.
    ///
    /// Prints every division unless one is named.
    Standings {
        /// Only this division.
        #[clap(long, short)]
        division: Option<DivisionId>,

        /// Game week (defaults to the current week, or the last one).
        #[clap(long, short)]
        week: Option<GameWeekIndex>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// A manager's twelve slots with week and season stats.
    Team {
        #[clap(long, short)]
        manager: ManagerId,

        /// Game week (defaults to the current week, or the last one).
        #[clap(long, short)]
        week: Option<GameWeekIndex>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// A manager's transfers and what each one did to the squad.
    Transfers {
        #[clap(long, short)]
        manager: ManagerId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Squad rule warnings for a division.
    Warnings {
        #[clap(long, short)]
        division: DivisionId,

        /// Game week (defaults to the current week, or the last one).
        #[clap(long, short)]
        week: Option<GameWeekIndex>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Data-quality issues found while building the league.
    Quality {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
