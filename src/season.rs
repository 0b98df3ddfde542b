use std::collections::HashMap;

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::fixture::{Fixture, FixtureStatus};
use crate::schedule::{assign_dates, generate_round_robin, ScheduleOptions};
use crate::simulate::simulate_fixture;
use crate::standings::{league_table, TableRow};
use crate::team::Team;

/// In-memory season state: team strengths plus the fixture calendar.
///
/// This is the batch driver around the pure core. It owns fixture status
/// transitions and derives each fixture's seed as `base_seed + fixture id`,
/// so a result depends only on the base seed regardless of batch shape or
/// execution order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Season {
    pub season: i32,
    pub teams: HashMap<String, Team>,
    pub fixtures: Vec<Fixture>,
}

impl Season {
    pub fn new(season: i32, teams: impl IntoIterator<Item = Team>) -> Self {
        Season {
            season,
            teams: teams.into_iter().map(|t| (t.name.clone(), t)).collect(),
            fixtures: Vec::new(),
        }
    }

    /// Generate the season calendar and materialize fixture rows.
    ///
    /// Teams enter the generator in sorted-name order so the schedule is a
    /// function of (team set, options) alone; randomized orderings go
    /// through the options' shuffle seed. Fixture ids are 1-based and
    /// sequential in round order. Replaces any previous calendar.
    pub fn build_fixtures(
        &mut self,
        start_on: NaiveDate,
        interval_days: i64,
        opts: &ScheduleOptions,
    ) {
        let mut names: Vec<String> = self.teams.keys().cloned().collect();
        names.sort();

        let schedule = generate_round_robin(&names, opts);
        self.fixtures = assign_dates(&schedule, start_on, interval_days)
            .into_iter()
            .enumerate()
            .map(|(i, m)| {
                Fixture::scheduled(i as u64 + 1, self.season, m.round, m.date, m.home, m.away)
            })
            .collect();

        info!(
            season = self.season,
            teams = names.len(),
            fixtures = self.fixtures.len(),
            "built season calendar"
        );
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn fixtures_in_round(&self, round: u32) -> Vec<&Fixture> {
        self.fixtures.iter().filter(|f| f.round == round).collect()
    }

    /// Simulate every still-scheduled fixture of one round.
    ///
    /// Returns the number of fixtures played.
    pub fn play_round(&mut self, round: u32, base_seed: u64) -> Result<usize> {
        self.play_where(|fx| fx.round == round, base_seed)
    }

    /// Simulate every still-scheduled fixture of the season.
    pub fn play_all(&mut self, base_seed: u64) -> Result<usize> {
        self.play_where(|_| true, base_seed)
    }

    /// The current standings over played fixtures.
    pub fn table(&self) -> Result<Vec<TableRow>> {
        league_table(&self.fixtures)
    }

    fn play_where<F>(&mut self, pred: F, base_seed: u64) -> Result<usize>
    where
        F: Fn(&Fixture) -> bool + Sync,
    {
        let teams = &self.teams;
        let mut results: Vec<(u64, (u32, u32))> = self
            .fixtures
            .par_iter()
            .filter(|fx| fx.status == FixtureStatus::Scheduled && pred(fx))
            .map(|fx| {
                let home = teams
                    .get(&fx.home)
                    .ok_or_else(|| Error::UnknownTeam(fx.home.clone()))?;
                let away = teams
                    .get(&fx.away)
                    .ok_or_else(|| Error::UnknownTeam(fx.away.clone()))?;

                let seed = base_seed.wrapping_add(fx.id);
                let (hg, ag) = simulate_fixture(home, away, seed)?;
                debug!(
                    fixture = fx.id,
                    round = fx.round,
                    home = %fx.home,
                    away = %fx.away,
                    score_home = hg,
                    score_away = ag,
                    "simulated fixture"
                );
                Ok((fx.id, (hg, ag)))
            })
            .collect::<Result<Vec<_>>>()?;

        // Reassemble by fixture id, not completion order.
        results.sort_unstable_by_key(|(id, _)| *id);

        let count = results.len();
        let mut by_id: HashMap<u64, &mut Fixture> =
            self.fixtures.iter_mut().map(|fx| (fx.id, fx)).collect();
        for (id, (hg, ag)) in results {
            if let Some(fx) = by_id.get_mut(&id) {
                fx.record_score(hg, ag);
            }
        }

        info!(season = self.season, played = count, "recorded simulated results");
        Ok(count)
    }
}
