//! Ordered game week calendar.

use chrono::{DateTime, Utc};

use crate::{
    cli::types::GameWeekIndex,
    error::{LeagueError, Result},
    league::types::GameWeek,
};

/// Validated, index-ordered list of game weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameWeekCalendar {
    weeks: Vec<GameWeek>,
}

impl GameWeekCalendar {
    /// Sort by index and reject inverted, overlapping or multiply-current weeks.
    pub fn new(mut weeks: Vec<GameWeek>) -> Result<Self> {
        weeks.sort_by_key(|w| w.index);

        for week in &weeks {
            if week.start >= week.end {
                return Err(LeagueError::InvalidGameWeeks {
                    message: format!("game week {} ends before it starts", week.index),
                });
            }
        }
        for pair in weeks.windows(2) {
            if pair[0].index == pair[1].index {
                return Err(LeagueError::InvalidGameWeeks {
                    message: format!("game week {} is listed twice", pair[0].index),
                });
            }
            if pair[0].end > pair[1].start {
                return Err(LeagueError::InvalidGameWeeks {
                    message: format!(
                        "game weeks {} and {} overlap",
                        pair[0].index, pair[1].index
                    ),
                });
            }
        }
        if weeks.iter().filter(|w| w.is_current).count() > 1 {
            return Err(LeagueError::InvalidGameWeeks {
                message: "more than one game week is flagged as current".to_string(),
            });
        }

        Ok(Self { weeks })
    }

    pub fn weeks(&self) -> &[GameWeek] {
        &self.weeks
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn get(&self, index: GameWeekIndex) -> Option<&GameWeek> {
        self.weeks.iter().find(|w| w.index == index)
    }

    /// The game week whose interval contains `at`.
    pub fn locate(&self, at: DateTime<Utc>) -> Option<&GameWeek> {
        self.weeks.iter().find(|w| w.contains(at))
    }

    pub fn season_start(&self) -> Option<DateTime<Utc>> {
        self.weeks.first().map(|w| w.start)
    }

    pub fn season_end(&self) -> Option<DateTime<Utc>> {
        self.weeks.last().map(|w| w.end)
    }

    /// The week flagged as current; `None` before or after the season.
    pub fn current(&self) -> Option<&GameWeek> {
        self.weeks.iter().find(|w| w.is_current)
    }

    /// Week to report on when none is requested: current, else the last one.
    pub fn default_week(&self) -> Option<GameWeekIndex> {
        self.current().or(self.weeks.last()).map(|w| w.index)
    }

    /// Weeks up to and including `index`, in order.
    pub fn through(&self, index: GameWeekIndex) -> impl Iterator<Item = &GameWeek> {
        self.weeks.iter().take_while(move |w| w.index <= index)
    }
}
