//! Integration tests for input path resolution

use draft_league::{core::resolve_snapshot_path, LeagueError, SNAPSHOT_ENV_VAR};
use std::path::PathBuf;

// Kept in one test so nothing else in this binary races on the variable.
#[test]
fn test_resolve_snapshot_path_from_env() {
    std::env::remove_var(SNAPSHOT_ENV_VAR);

    let result = resolve_snapshot_path(None);
    match result {
        Err(LeagueError::MissingSnapshot { env_var }) => assert_eq!(env_var, SNAPSHOT_ENV_VAR),
        other => panic!("unexpected result: {other:?}"),
    }

    std::env::set_var(SNAPSHOT_ENV_VAR, "/data/league.json");
    assert_eq!(
        resolve_snapshot_path(None).unwrap(),
        PathBuf::from("/data/league.json")
    );

    let explicit = PathBuf::from("/tmp/other.json");
    assert_eq!(resolve_snapshot_path(Some(explicit.clone())).unwrap(), explicit);

    std::env::remove_var(SNAPSHOT_ENV_VAR);
}
