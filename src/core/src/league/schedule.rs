use crate::league::error::LeagueError;
use crate::league::fixture::Fixture;
use crate::league::league::{League, LeagueSettings};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A generated season: the fixture list, a per-team day-ordered index
/// of fixture ids, and the last day anything is scheduled on. Built
/// fresh per generation; carries no cross-call state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub season: u32,
    pub fixtures: Vec<Fixture>,
    pub by_team: HashMap<u32, Vec<u32>>,
    pub max_day: u16,
}

impl Schedule {
    /// Build the per-team index: every team gets the ids of its home
    /// and away fixtures sorted by day, emission order breaking ties
    /// (stable sort over the original fixture order).
    pub fn with_team_index(
        season: u32,
        fixtures: Vec<Fixture>,
        team_ids: impl Iterator<Item = u32>,
    ) -> Self {
        let mut by_team: HashMap<u32, Vec<u32>> = team_ids.map(|id| (id, Vec::new())).collect();

        let mut day_of: HashMap<u32, u16> = HashMap::with_capacity(fixtures.len());

        for fixture in &fixtures {
            day_of.insert(fixture.id, fixture.day);
            by_team
                .entry(fixture.home_team_id)
                .or_default()
                .push(fixture.id);
            by_team
                .entry(fixture.away_team_id)
                .or_default()
                .push(fixture.id);
        }

        for ids in by_team.values_mut() {
            ids.sort_by_key(|id| day_of[id]);
        }

        let max_day = fixtures.iter().map(|f| f.day).max().unwrap_or(0);

        Schedule {
            season,
            fixtures,
            by_team,
            max_day,
        }
    }

    pub fn fixture(&self, id: u32) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.id == id)
    }

    pub fn fixtures_for_team(&self, team_id: u32) -> Vec<&Fixture> {
        self.fixtures
            .iter()
            .filter(|f| f.home_team_id == team_id || f.away_team_id == team_id)
            .collect()
    }

    pub fn fixtures_on_day(&self, day: u16) -> Vec<&Fixture> {
        self.fixtures.iter().filter(|f| f.day == day).collect()
    }

    pub fn games_for_team(&self, team_id: u32) -> usize {
        self.by_team.get(&team_id).map(Vec::len).unwrap_or(0)
    }

    /// Post-generation checks: per-team totals, day bounds, distinct
    /// sides, no team booked twice on one day. A failure here is a
    /// generator defect, never bad caller input.
    pub fn verify(&self, league: &League, settings: &LeagueSettings) -> Result<(), LeagueError> {
        let target = settings.games_per_team() as usize;
        for team in &league.teams {
            let total = self.games_for_team(team.id);
            if total != target {
                return Err(LeagueError::InvariantViolation(format!(
                    "team {} has {} fixtures, expected {}",
                    team.id, total, target
                )));
            }
        }

        let mut booked: HashSet<(u16, u32)> = HashSet::with_capacity(self.fixtures.len() * 2);
        for fixture in &self.fixtures {
            if fixture.day < 1 {
                return Err(LeagueError::InvariantViolation(format!(
                    "fixture {} left unscheduled",
                    fixture.id
                )));
            }
            if fixture.home_team_id == fixture.away_team_id {
                return Err(LeagueError::InvariantViolation(format!(
                    "fixture {} has team {} on both sides",
                    fixture.id, fixture.home_team_id
                )));
            }
            for team_id in [fixture.home_team_id, fixture.away_team_id] {
                if !booked.insert((fixture.day, team_id)) {
                    return Err(LeagueError::InvariantViolation(format!(
                        "team {} plays twice on day {}",
                        team_id, fixture.day
                    )));
                }
            }
        }

        Ok(())
    }
}
