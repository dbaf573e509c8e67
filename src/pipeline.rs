//! Derive every league view from one snapshot.
//!
//! `League::build` does the per-player and per-manager work up front; the
//! per-(division, game week) views are computed on demand and memoised.

use rayon::prelude::*;
use std::{collections::HashMap, path::Path};
use tracing::{debug, info};

use crate::{
    cli::types::{DivisionId, GameWeekIndex, ManagerId},
    core::{LeagueConfig, MemoCache, StandingsKey},
    error::{LeagueError, Result},
    league::{load_snapshot, GameWeekCalendar, LeagueSnapshot, Manager, PlayerDirectory},
    quality::DataQualityReport,
    roster::{ResolvedSlot, RosterTimeline, TransferRecord},
    scoring::{derive_player_season, score_team, SeasonStats, TeamSheet},
    standings::{rank_changes, rank_division, DivisionRanking, DivisionStandings, ManagerPoints},
    validate::{validate_squads, SquadWarnings},
};


/// A season's derived state.
pub struct League {
    config: LeagueConfig,
    calendar: GameWeekCalendar,
    directory: PlayerDirectory,
    seasons: SeasonStats,
    managers: Vec<Manager>,
    timelines: HashMap<ManagerId, RosterTimeline>,
    divisions: Vec<DivisionId>,
    report: DataQualityReport,
    rankings: MemoCache<StandingsKey, DivisionRanking>,
    standings: MemoCache<StandingsKey, DivisionStandings>,
}

impl League {
    /// Validate the inputs and derive player seasons and roster timelines.
    pub fn build(snapshot: LeagueSnapshot, config: LeagueConfig) -> Result<Self> {
        config.validate()?;
        let calendar = GameWeekCalendar::new(snapshot.game_weeks)?;
        let directory = PlayerDirectory::new(snapshot.players);

        let players: Vec<_> = directory.iter().collect();
        let derived: Vec<_> = players
            .par_iter()
            .map(|player| {
                let mut report = DataQualityReport::new();
                let season = derive_player_season(&config.scoring, player, &calendar, &mut report);
                (season, report)
            })
            .collect();

        let mut report = DataQualityReport::new();
        let mut seasons = SeasonStats::with_capacity(derived.len());
        for (season, player_report) in derived {
            report.merge(player_report);
            seasons.insert(season.code, season);
        }

        let resolved: Vec<_> = snapshot
            .managers
            .par_iter()
            .map(|manager| {
                let mut report = DataQualityReport::new();
                let timeline = RosterTimeline::resolve(
                    &manager.id,
                    &manager.squad,
                    &snapshot.transfers,
                    &calendar,
                    &directory,
                    &mut report,
                );
                (timeline, report)
            })
            .collect();

        let mut timelines = HashMap::with_capacity(resolved.len());
        for (timeline, manager_report) in resolved {
            report.merge(manager_report);
            timelines.insert(timeline.manager_id.clone(), timeline);
        }

        let mut divisions: Vec<DivisionId> = Vec::new();
        for manager in &snapshot.managers {
            if !divisions.contains(&manager.division_id) {
                divisions.push(manager.division_id.clone());
            }
        }

        info!(
            game_weeks = calendar.weeks().len(),
            players = directory.len(),
            managers = snapshot.managers.len(),
            divisions = divisions.len(),
            issues = report.len(),
            "league built"
        );

        let capacity = config.cache_capacity;
        Ok(Self {
            config,
            calendar,
            directory,
            seasons,
            managers: snapshot.managers,
            timelines,
            divisions,
            report,
            rankings: MemoCache::new(capacity),
            standings: MemoCache::new(capacity),
        })
    }

    pub fn from_path(path: &Path, config: LeagueConfig) -> Result<Self> {
        Self::build(load_snapshot(path)?, config)
    }

    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }

    pub fn calendar(&self) -> &GameWeekCalendar {
        &self.calendar
    }

    pub fn directory(&self) -> &PlayerDirectory {
        &self.directory
    }

    /// Issues collected while deriving seasons and timelines.
    pub fn data_quality(&self) -> &DataQualityReport {
        &self.report
    }

    /// Divisions in order of first appearance in the manager feed.
    pub fn divisions(&self) -> &[DivisionId] {
        &self.divisions
    }

    pub fn manager(&self, manager_id: &ManagerId) -> Result<&Manager> {
        self.managers
            .iter()
            .find(|m| &m.id == manager_id)
            .ok_or_else(|| LeagueError::UnknownManager {
                manager: manager_id.clone(),
            })
    }

    /// A division's managers in feed order.
    pub fn managers_in(&self, division_id: &DivisionId) -> Result<Vec<&Manager>> {
        let managers: Vec<&Manager> = self
            .managers
            .iter()
            .filter(|m| &m.division_id == division_id)
            .collect();
        if managers.is_empty() {
            return Err(LeagueError::UnknownDivision {
                division: division_id.clone(),
            });
        }
        Ok(managers)
    }

    pub fn timeline(&self, manager_id: &ManagerId) -> Result<&RosterTimeline> {
        self.timelines
            .get(manager_id)
            .ok_or_else(|| LeagueError::UnknownManager {
                manager: manager_id.clone(),
            })
    }

    /// The requested week if it exists, else the current (or last) week.
    pub fn resolve_week(&self, requested: Option<GameWeekIndex>) -> Result<GameWeekIndex> {
        match requested {
            Some(game_week) => self
                .calendar
                .get(game_week)
                .map(|week| week.index)
                .ok_or(LeagueError::UnknownGameWeek { game_week }),
            None => self
                .calendar
                .default_week()
                .ok_or_else(|| LeagueError::InvalidGameWeeks {
                    message: "the snapshot has no game weeks".to_string(),
                }),
        }
    }

    fn previous_week(&self, game_week: GameWeekIndex) -> Option<GameWeekIndex> {
        self.calendar
            .weeks()
            .iter()
            .take_while(|week| week.index < game_week)
            .last()
            .map(|week| week.index)
    }

    pub fn team_sheet(&self, manager_id: &ManagerId, game_week: GameWeekIndex) -> Result<TeamSheet> {
        let manager = self.manager(manager_id)?;
        score_team(
            self.timeline(manager_id)?,
            &manager.division_id,
            game_week,
            &self.calendar,
            &self.seasons,
            &self.directory,
        )
    }

    /// Category ranks for a division, memoised per game week.
    pub fn division_ranking(
        &self,
        division_id: &DivisionId,
        game_week: GameWeekIndex,
    ) -> Result<DivisionRanking> {
        let key = (division_id.clone(), game_week);
        self.rankings.get_or_try_insert(key, || {
            let managers = self.managers_in(division_id)?;
            let roster: Vec<ManagerId> = managers.iter().map(|m| m.id.clone()).collect();
            let points = managers
                .iter()
                .map(|m| -> Result<ManagerPoints> {
                    Ok(ManagerPoints::from_sheet(&self.team_sheet(&m.id, game_week)?))
                })
                .collect::<Result<Vec<_>>>()?;

            debug!(division = %division_id, game_week = %game_week, "ranking division");
            rank_division(
                division_id,
                game_week,
                &self.config.categories,
                &roster,
                &points,
            )
        })
    }

    /// The ranked table with movement against the preceding game week.
    pub fn division_week(
        &self,
        division_id: &DivisionId,
        game_week: GameWeekIndex,
    ) -> Result<DivisionStandings> {
        let key = (division_id.clone(), game_week);
        self.standings.get_or_try_insert(key, || {
            let current = self.division_ranking(division_id, game_week)?;
            let previous = self
                .previous_week(game_week)
                .map(|week| self.division_ranking(division_id, week))
                .transpose()?;
            let changes = rank_changes(previous.as_ref(), &current);

            let (cached, capacity) = self.standings.stats();
            debug!(
                division = %division_id,
                game_week = %game_week,
                cached,
                capacity,
                "assembling standings"
            );

            Ok(DivisionStandings::assemble(&current, &changes, |id| {
                self.manager(id)
                    .map(|m| m.display_name().to_string())
                    .unwrap_or_else(|_| id.to_string())
            }))
        })
    }

    /// Every division's table for a game week, computed in parallel.
    ///
    /// Fails on the first division that fails.
    pub fn all_divisions(&self, game_week: GameWeekIndex) -> Result<Vec<DivisionStandings>> {
        self.divisions
            .par_iter()
            .map(|division| self.division_week(division, game_week))
            .collect()
    }

    pub fn squad_warnings(
        &self,
        division_id: &DivisionId,
        game_week: GameWeekIndex,
    ) -> Result<SquadWarnings> {
        let managers = self.managers_in(division_id)?;
        let squads = managers
            .iter()
            .map(|m| -> Result<(&ManagerId, &[ResolvedSlot])> {
                let slots: &[ResolvedSlot] = self
                    .timeline(&m.id)?
                    .week(game_week)
                    .ok_or(LeagueError::UnknownGameWeek { game_week })?;
                Ok((&m.id, slots))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(validate_squads(
            &squads,
            &self.directory,
            self.config.club_quota,
        ))
    }

    /// The manager's transfer rows in the order they were applied.
    pub fn transfer_history(&self, manager_id: &ManagerId) -> Result<&[TransferRecord]> {
        Ok(&self.timeline(manager_id)?.transfers)
    }
}
