//! Unit tests for division ranking

use super::*;

fn ids(names: &[&str]) -> Vec<ManagerId> {
    names.iter().map(|n| ManagerId::new(*n)).collect()
}

fn gks_only(manager: &str, season: i32) -> ManagerPoints {
    ManagerPoints::new(ManagerId::new(manager)).with(PositionCategory::Gks, 0, season)
}

#[cfg(test)]
mod fractional_rank_tests {
    use super::*;

    #[test]
    fn test_two_way_tie_at_the_bottom() {
        assert_eq!(fractional_ranks(&[5, 5, 10]), vec![0.5, 0.5, 2.0]);
    }

    #[test]
    fn test_ranks_follow_input_order() {
        assert_eq!(fractional_ranks(&[10, 5, 5]), vec![2.0, 0.5, 0.5]);
        assert_eq!(fractional_ranks(&[3, 1, 2]), vec![2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_single_entry_is_rank_zero() {
        assert_eq!(fractional_ranks(&[42]), vec![0.0]);
    }

    #[test]
    fn test_everyone_tied_share_the_middle() {
        assert_eq!(fractional_ranks(&[7, 7, 7, 7]), vec![1.5; 4]);
    }

    #[test]
    fn test_empty_input() {
        assert!(fractional_ranks(&[]).is_empty());
    }

    #[test]
    fn test_negative_points_rank_below_zero_points() {
        assert_eq!(fractional_ranks(&[0, -3, 0]), vec![1.5, 0.0, 1.5]);
    }

    #[test]
    fn test_rank_sum_is_preserved_under_ties() {
        let points = [4, 9, 4, 1, 9, 9];
        let n = points.len() as f64;
        let sum: f64 = fractional_ranks(&points).iter().sum();
        assert_eq!(sum, n * (n - 1.0) / 2.0);
    }
}

#[cfg(test)]
mod division_tests {
    use super::*;

    fn rank(roster: &[&str], points: &[ManagerPoints]) -> Result<DivisionRanking> {
        rank_division(
            &DivisionId::new("premier"),
            GameWeekIndex::new(1),
            &[PositionCategory::Gks],
            &ids(roster),
            points,
        )
    }

    #[test]
    fn test_level_managers_keep_input_order() {
        let ranking = rank(&["a", "b"], &[gks_only("a", 6), gks_only("b", 6)]).unwrap();

        let a = ranking.get(&ManagerId::new("a")).unwrap();
        let b = ranking.get(&ManagerId::new("b")).unwrap();
        assert_eq!(a.categories[&PositionCategory::Gks].rank, 0.5);
        assert_eq!(b.categories[&PositionCategory::Gks].rank, 0.5);
        assert_eq!((a.order, b.order), (0, 1));
    }

    #[test]
    fn test_leader_gets_highest_rank_and_first_place() {
        let ranking = rank(&["a", "b"], &[gks_only("a", 6), gks_only("b", 66)]).unwrap();

        assert_eq!(ranking.managers[0].manager_id, ManagerId::new("b"));
        assert_eq!(ranking.managers[0].total, 1.0);
        assert_eq!(ranking.managers[1].total, 0.0);
    }

    #[test]
    fn test_lone_manager_ranks_zero() {
        let ranking = rank(&["solo"], &[gks_only("solo", 30)]).unwrap();
        assert_eq!(ranking.managers[0].total, 0.0);
        assert_eq!(ranking.managers[0].order, 0);
    }

    #[test]
    fn test_total_is_sum_of_category_ranks_not_points_rank() {
        let categories = [PositionCategory::Gks, PositionCategory::Cas];
        let points = vec![
            // a dominates goalkeepers by a lot, loses strikers narrowly
            ManagerPoints::new(ManagerId::new("a"))
                .with(PositionCategory::Gks, 0, 100)
                .with(PositionCategory::Cas, 0, 9),
            ManagerPoints::new(ManagerId::new("b"))
                .with(PositionCategory::Gks, 0, 1)
                .with(PositionCategory::Cas, 0, 10),
        ];
        let ranking = rank_division(
            &DivisionId::new("premier"),
            GameWeekIndex::new(3),
            &categories,
            &ids(&["a", "b"]),
            &points,
        )
        .unwrap();

        let a = ranking.get(&ManagerId::new("a")).unwrap();
        let b = ranking.get(&ManagerId::new("b")).unwrap();
        assert_eq!(a.total, 1.0);
        assert_eq!(b.total, 1.0);
        assert_eq!(a.points.season, 109);
        // level on ranks, so season points decide the order
        assert_eq!((a.order, b.order), (0, 1));
    }

    #[test]
    fn test_uses_season_points_not_game_week_points() {
        let points = vec![
            ManagerPoints::new(ManagerId::new("a")).with(PositionCategory::Gks, 50, 50),
            ManagerPoints::new(ManagerId::new("b")).with(PositionCategory::Gks, 0, 80),
        ];
        let ranking = rank(&["a", "b"], &points).unwrap();
        assert_eq!(ranking.managers[0].manager_id, ManagerId::new("b"));
        assert_eq!(ranking.managers[0].points.game_week, 0);
    }

    #[test]
    fn test_managers_outside_roster_are_ignored() {
        let ranking = rank(&["a"], &[gks_only("a", 1), gks_only("stranger", 99)]).unwrap();
        assert_eq!(ranking.managers.len(), 1);
        assert_eq!(ranking.managers[0].total, 0.0);
    }

    #[test]
    fn test_missing_manager_is_an_integrity_error() {
        let err = rank(&["a", "b"], &[gks_only("a", 1)]).unwrap_err();
        assert!(err.is_integrity());
        match err {
            LeagueError::MissingManagerPoints {
                manager, division, ..
            } => {
                assert_eq!(manager, ManagerId::new("b"));
                assert_eq!(division, DivisionId::new("premier"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_category_is_an_integrity_error() {
        let points = vec![ManagerPoints::new(ManagerId::new("a")).with(PositionCategory::Gks, 0, 3)];
        let err = rank_division(
            &DivisionId::new("premier"),
            GameWeekIndex::new(2),
            &[PositionCategory::Gks, PositionCategory::Mids],
            &ids(&["a"]),
            &points,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            LeagueError::MissingCategoryPoints {
                category: PositionCategory::Mids,
                ..
            }
        ));
    }

    #[test]
    fn test_repeated_category_is_rejected_before_ranking() {
        let points = vec![gks_only("a", 5), gks_only("b", 1)];
        let err = rank_division(
            &DivisionId::new("premier"),
            GameWeekIndex::new(1),
            &[PositionCategory::Gks, PositionCategory::Gks],
            &ids(&["a", "b"]),
            &points,
        )
        .unwrap_err();

        assert!(err.is_integrity());
        assert!(matches!(
            err,
            LeagueError::DuplicateCategory {
                category: PositionCategory::Gks
            }
        ));
    }
}
