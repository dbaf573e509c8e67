//! Unit tests for stat aggregation

use super::*;
use crate::league::{Fixture, GameWeek};
use chrono::{TimeZone, Utc};

fn line(pairs: &[(StatKey, i32)]) -> StatLine {
    pairs
        .iter()
        .fold(StatLine::default(), |acc, (key, value)| acc.with(*key, *value))
}

fn striker_lines() -> Vec<StatLine> {
    vec![
        line(&[(StatKey::Apps, 1), (StatKey::Goals, 2), (StatKey::CleanSheets, 1)]),
        line(&[(StatKey::Apps, 1), (StatKey::Assists, 1), (StatKey::YellowCards, 1)]),
        line(&[(StatKey::Subs, 1), (StatKey::Conceded, 3)]),
    ]
}

#[cfg(test)]
mod aggregate_tests {
    use super::*;

    #[test]
    fn test_empty_input_is_all_zero() {
        let rules = ScoringRules::default();
        let total = aggregate(&rules, &Vec::<StatLine>::new(), Position::Mid);
        assert!(total.is_empty());
        assert_eq!(total.points, 0);
    }

    #[test]
    fn test_sums_scoreable_stats() {
        let rules = ScoringRules::default();
        let total = aggregate(&rules, &striker_lines(), Position::Ca);

        assert_eq!(total.apps, 2);
        assert_eq!(total.subs, 1);
        assert_eq!(total.goals, 2);
        assert_eq!(total.assists, 1);
        assert_eq!(total.yellow_cards, 1);
        // 2+6 | 2+3-1 | 1
        assert_eq!(total.points, 13);
    }

    #[test]
    fn test_unscoreable_stats_are_zeroed_for_display() {
        let rules = ScoringRules::default();
        let total = aggregate(&rules, &striker_lines(), Position::Ca);

        assert_eq!(total.clean_sheets, 0);
        assert_eq!(total.conceded, 0);
    }

    #[test]
    fn test_keeper_ignores_assists_whatever_the_magnitude() {
        let rules = ScoringRules::default();
        for magnitude in [1, 5, 250] {
            let lines = vec![line(&[(StatKey::Assists, magnitude), (StatKey::Apps, 1)])];
            let total = aggregate(&rules, &lines, Position::Gk);
            assert_eq!(total.assists, 0);
            assert_eq!(total.points, 2);
        }
    }

    #[test]
    fn test_appearances_survive_for_non_scoring_position() {
        let rules = ScoringRules::default();
        let total = aggregate(&rules, &striker_lines(), Position::Sub);

        assert_eq!(total.apps, 2);
        assert_eq!(total.subs, 1);
        assert_eq!(total.goals, 0);
        assert_eq!(total.points, 0);
    }

    #[test]
    fn test_stored_points_on_raw_lines_are_rescored() {
        let rules = ScoringRules::default();
        let lines = vec![StatLine {
            points: 40,
            ..line(&[(StatKey::Goals, 1)])
        }];
        assert_eq!(aggregate(&rules, &lines, Position::Cb).points, 6);
    }

    #[test]
    fn test_huge_feed_counts_saturate_instead_of_overflowing() {
        let rules = ScoringRules::default();
        let huge: StatLine = serde_json::from_str(r#"{"apps": 2000000000}"#).unwrap();
        let lines = vec![huge, huge];

        let total = aggregate(&rules, &lines, Position::Gk);
        assert_eq!(total.apps, i32::MAX);
        assert_eq!(total.points, i32::MAX);
    }

    #[test]
    fn test_aggregation_is_additive_over_disjoint_sets() {
        let rules = ScoringRules::default();
        let all = striker_lines();
        let (a, b) = all.split_at(1);

        for pos in Position::ALL {
            let whole = aggregate(&rules, &all, pos);
            let parts = aggregate(&rules, a, pos) + aggregate(&rules, b, pos);
            assert_eq!(whole, parts, "additivity failed for {pos}");
        }
    }
}

#[cfg(test)]
mod player_season_tests {
    use super::*;

    fn calendar() -> GameWeekCalendar {
        let weeks = (1..=3)
            .map(|i| GameWeek {
                index: GameWeekIndex::new(i),
                start: Utc.with_ymd_and_hms(2024, 8, 1 + 7 * (i as u32 - 1), 0, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2024, 8, 1 + 7 * i as u32, 0, 0, 0).unwrap(),
                is_current: false,
            })
            .collect();
        GameWeekCalendar::new(weeks).unwrap()
    }

    fn fixture(day: u32, stats: StatLine) -> Fixture {
        Fixture {
            date: Utc.with_ymd_and_hms(2024, 8, day, 15, 0, 0).unwrap(),
            home_team: "Home".to_string(),
            away_team: "Away".to_string(),
            home_score: None,
            away_score: None,
            stats,
        }
    }

    fn defender(fixtures: Vec<Fixture>) -> Player {
        Player {
            code: PlayerCode::new(10),
            name: "Gabriel".to_string(),
            club: "Arsenal".to_string(),
            position: Position::Cb,
            status: None,
            is_new: false,
            fixtures,
        }
    }

    #[test]
    fn test_buckets_fixtures_by_week_and_accumulates() {
        let rules = ScoringRules::default();
        let player = defender(vec![
            fixture(2, line(&[(StatKey::Apps, 1), (StatKey::CleanSheets, 1)])),
            fixture(5, line(&[(StatKey::Apps, 1), (StatKey::Goals, 1)])),
            fixture(16, line(&[(StatKey::Apps, 1), (StatKey::Conceded, 2)])),
        ]);
        let mut report = DataQualityReport::new();

        let season = derive_player_season(&rules, &player, &calendar(), &mut report);

        assert!(report.is_empty());
        assert_eq!(season.game_week(GameWeekIndex::new(1)).points, 2 + 5 + 2 + 6);
        assert_eq!(season.game_week(GameWeekIndex::new(2)).points, 0);
        assert_eq!(season.game_week(GameWeekIndex::new(3)).points, 2 - 2);
        assert_eq!(season.season_to(GameWeekIndex::new(2)).points, 15);
        assert_eq!(season.season_to(GameWeekIndex::new(3)).points, 15);
        assert_eq!(season.season_to(GameWeekIndex::new(3)).apps, 3);
    }

    #[test]
    fn test_fixture_outside_calendar_is_reported() {
        let rules = ScoringRules::default();
        let player = defender(vec![fixture(30, line(&[(StatKey::Goals, 3)]))]);
        let mut report = DataQualityReport::new();

        let season = derive_player_season(&rules, &player, &calendar(), &mut report);

        assert_eq!(report.len(), 1);
        assert!(matches!(
            report.issues().next(),
            Some(DataQualityIssue::FixtureOutsideGameWeeks { .. })
        ));
        assert_eq!(season.season_to(GameWeekIndex::new(3)).points, 0);
    }
}
