//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod league_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let league_error = LeagueError::from(json_error);

        match league_error {
            LeagueError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let league_error = LeagueError::from(io_error);

        match league_error {
            LeagueError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_missing_snapshot_display() {
        let error = LeagueError::MissingSnapshot {
            env_var: "DRAFT_LEAGUE_SNAPSHOT".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "League snapshot not provided and DRAFT_LEAGUE_SNAPSHOT environment variable not set"
        );
    }

    #[test]
    fn test_missing_category_points_names_everything() {
        let error = LeagueError::MissingCategoryPoints {
            manager: ManagerId::new("alice"),
            division: DivisionId::new("premier"),
            game_week: GameWeekIndex::new(4),
            category: PositionCategory::Cbs,
        };
        let message = error.to_string();
        assert!(message.contains("alice"));
        assert!(message.contains("premier"));
        assert!(message.contains("cbs"));
        assert!(message.contains('4'));
    }

    #[test]
    fn test_integrity_classification() {
        let integrity = LeagueError::MissingManagerPoints {
            manager: ManagerId::new("bob"),
            division: DivisionId::new("championship"),
            game_week: GameWeekIndex::new(1),
        };
        assert!(integrity.is_integrity());

        let rule = LeagueError::MissingScoringRule {
            position: "CA".to_string(),
        };
        assert!(rule.is_integrity());

        let lookup = LeagueError::UnknownGameWeek {
            game_week: GameWeekIndex::new(40),
        };
        assert!(!lookup.is_integrity());
    }

    #[test]
    fn test_error_debug_format() {
        let error = LeagueError::InvalidPosition {
            position: "LWB".to_string(),
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("InvalidPosition"));
        assert!(debug_str.contains("LWB"));
    }
}
