//! Core utilities shared by the pipeline and the CLI
//!
//! - `cache`: LRU memoisation and file reading helpers
//! - `config`: League configuration and input path resolution

pub mod cache;
pub mod config;

pub use cache::{try_read_to_string, MemoCache, StandingsKey};
pub use config::{
    default_config_path, load_config, resolve_snapshot_path, LeagueConfig,
    DEFAULT_CACHE_CAPACITY,
};
