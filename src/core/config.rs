//! League configuration and input path resolution.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{
    cli::types::PositionCategory,
    core::cache::try_read_to_string,
    error::{LeagueError, Result},
    scoring::ScoringRules,
    standings::ensure_distinct,
    validate::DEFAULT_CLUB_QUOTA,
    CONFIG_ENV_VAR, SNAPSHOT_ENV_VAR,
};

/// Default number of (division, game week) tables kept in memory.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Tunable league settings. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeagueConfig {
    pub scoring: ScoringRules,
    /// Categories divisions are ranked on.
    pub categories: Vec<PositionCategory>,
    pub club_quota: usize,
    pub cache_capacity: usize,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringRules::default(),
            categories: PositionCategory::ALL.to_vec(),
            club_quota: DEFAULT_CLUB_QUOTA,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl LeagueConfig {
    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;
        ensure_distinct(&self.categories)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: LeagueConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Path: <config_dir>/draft-league/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("draft-league").join("config.json"))
}

/// Load configuration from `path`, then `DRAFT_LEAGUE_CONFIG`, then the
/// per-user config file if one exists, else the built-in defaults.
///
/// An explicitly named file must exist; the per-user file is optional.
pub fn load_config(path: Option<&Path>) -> Result<LeagueConfig> {
    let explicit = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading league config");
        let json = std::fs::read_to_string(&path)?;
        return LeagueConfig::from_json(&json);
    }

    match default_config_path()
        .as_deref()
        .and_then(try_read_to_string)
    {
        Some(json) => LeagueConfig::from_json(&json),
        None => Ok(LeagueConfig::default()),
    }
}

/// Resolve the snapshot path from the flag or `DRAFT_LEAGUE_SNAPSHOT`.
pub fn resolve_snapshot_path(path: Option<PathBuf>) -> Result<PathBuf> {
    path.or_else(|| {
        std::env::var_os(SNAPSHOT_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
    .ok_or_else(|| LeagueError::MissingSnapshot {
        env_var: SNAPSHOT_ENV_VAR.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LeagueConfig::default();
        assert_eq!(config.categories.len(), 6);
        assert_eq!(config.club_quota, 2);
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = LeagueConfig::from_json(r#"{"clubQuota": 3, "categories": ["gks"]}"#).unwrap();
        assert_eq!(config.club_quota, 3);
        assert_eq!(config.categories, vec![PositionCategory::Gks]);
        assert_eq!(config.scoring, ScoringRules::default());
    }

    #[test]
    fn test_scoring_table_missing_a_position_is_rejected() {
        let err = LeagueConfig::from_json(r#"{"scoring": {"GK": {"goals": 10}}}"#).unwrap_err();
        assert!(matches!(err, LeagueError::MissingScoringRule { .. }));
    }

    #[test]
    fn test_repeated_category_is_rejected() {
        let result = LeagueConfig::from_json(r#"{"categories": ["gks", "gks"]}"#);
        match result {
            Err(LeagueError::DuplicateCategory { category }) => {
                assert_eq!(category, PositionCategory::Gks)
            }
            other => panic!("Expected DuplicateCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_load_config_from_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("league.json");
        let mut config = LeagueConfig::default();
        config.cache_capacity = 5;
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_config_missing_explicit_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = load_config(Some(&dir.path().join("absent.json")));
        assert!(matches!(result, Err(LeagueError::Io(_))));
    }

    #[test]
    fn test_custom_scoring_round_trips_through_json() {
        let mut scoring = ScoringRules::default();
        scoring.weights.insert(crate::cli::types::Position::Sub, BTreeMap::new());
        let config = LeagueConfig {
            scoring,
            ..LeagueConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(LeagueConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_explicit_snapshot_path_wins() {
        let path = PathBuf::from("/tmp/league.json");
        assert_eq!(resolve_snapshot_path(Some(path.clone())).unwrap(), path);
    }
}
