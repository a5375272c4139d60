use crate::league::error::LeagueError;
use crate::league::league::{League, LeagueSettings};
use crate::league::team::{Conference, Division};
use itertools::Itertools;
use std::collections::HashMap;

/// Season alignment of every team: which conference half and which
/// numbered division it plays in. Built as a pure mapping; the caller
/// merges it into its team records via [`League::apply_topology`].
#[derive(Debug, Clone)]
pub struct Topology {
    divisions: HashMap<u32, Division>,
}

impl Topology {
    /// Sort teams by name (plain ordinal comparison on the bytes, no
    /// locale involved), give the first half to the East and the second
    /// to the West, then cut each half into contiguous equal divisions.
    ///
    /// Uneven input is the caller's problem: anything that does not
    /// divide into `2 * divisions * division_size` is rejected here,
    /// not rebalanced.
    pub fn assign(league: &League, settings: &LeagueSettings) -> Result<Topology, LeagueError> {
        if league.teams.len() != settings.team_count() {
            return Err(LeagueError::Configuration(format!(
                "league has {} teams, expected {} (2 conferences x {} divisions x {} teams)",
                league.teams.len(),
                settings.team_count(),
                settings.divisions_per_conference,
                settings.teams_per_division
            )));
        }

        let ordered: Vec<u32> = league
            .teams
            .iter()
            .map(|t| (t.name.as_str(), t.id))
            .sorted()
            .map(|(_, id)| id)
            .collect();

        let division_size = settings.teams_per_division as usize;
        let conference_size = settings.conference_size();

        let mut divisions = HashMap::with_capacity(ordered.len());

        for (conference_idx, conference_ids) in ordered.chunks(conference_size).enumerate() {
            let conference = match conference_idx {
                0 => Conference::East,
                _ => Conference::West,
            };

            for (division_idx, division_ids) in conference_ids.chunks(division_size).enumerate() {
                let division = Division::new(conference, division_idx as u8 + 1);
                for &team_id in division_ids {
                    divisions.insert(team_id, division);
                }
            }
        }

        Ok(Topology { divisions })
    }

    pub fn division_of(&self, team_id: u32) -> Option<Division> {
        self.divisions.get(&team_id).copied()
    }

    pub fn conference_of(&self, team_id: u32) -> Option<Conference> {
        self.division_of(team_id).map(|d| d.conference)
    }

    /// Teams sharing the given team's division, excluding the team itself.
    pub fn division_rivals(&self, team_id: u32) -> Vec<u32> {
        match self.division_of(team_id) {
            Some(division) => self
                .divisions
                .iter()
                .filter(|&(&id, d)| id != team_id && *d == division)
                .map(|(&id, _)| id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Same conference, different division.
    pub fn conference_non_division(&self, team_id: u32) -> Vec<u32> {
        match self.division_of(team_id) {
            Some(division) => self
                .divisions
                .iter()
                .filter(|&(_, d)| d.conference == division.conference && *d != division)
                .map(|(&id, _)| id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Every team in the opposite conference.
    pub fn cross_conference(&self, team_id: u32) -> Vec<u32> {
        match self.conference_of(team_id) {
            Some(conference) => self
                .divisions
                .iter()
                .filter(|&(_, d)| d.conference != conference)
                .map(|(&id, _)| id)
                .collect(),
            None => Vec::new(),
        }
    }
}
