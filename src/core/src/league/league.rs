use crate::league::error::LeagueError;
use crate::league::team::Team;
use crate::league::topology::Topology;

#[derive(Debug)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub season: u32,
    pub teams: Vec<Team>,
}

impl League {
    pub fn new(id: u32, name: String, season: u32, teams: Vec<Team>) -> Self {
        League {
            id,
            name,
            season,
            teams,
        }
    }

    pub fn team(&self, id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Merge a season topology into the owned team records. This is the
    /// only place the generator touches league state.
    pub fn apply_topology(&mut self, topology: &Topology) {
        for team in &mut self.teams {
            if let Some(division) = topology.division_of(team.id) {
                team.conference = Some(division.conference);
                team.division = Some(division);
            }
        }
    }
}

/// Quota and packing configuration. Defaults mirror the reference
/// league: 30 teams, 2 conferences of 3 five-team divisions, 82 games
/// per team across a 175-day season.
#[derive(Debug, Clone)]
pub struct LeagueSettings {
    pub divisions_per_conference: u8,
    pub teams_per_division: u8,

    /// Total games against each division rival (split evenly home/away).
    pub division_rival_games: u8,
    /// Total games against each cross-conference opponent.
    pub cross_conference_games: u8,
    /// Conference non-division opponents that get four games this season.
    pub emphasized_pool_size: u8,
    /// Conference non-division opponents that get three games this season.
    pub reduced_pool_size: u8,

    pub regular_season_days: u16,
    pub max_games_per_day: usize,
    pub overflow_games_per_day: usize,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        LeagueSettings {
            divisions_per_conference: 3,
            teams_per_division: 5,
            division_rival_games: 4,
            cross_conference_games: 2,
            emphasized_pool_size: 6,
            reduced_pool_size: 4,
            regular_season_days: 175,
            max_games_per_day: 15,
            overflow_games_per_day: 15,
        }
    }
}

impl LeagueSettings {
    pub fn team_count(&self) -> usize {
        2 * self.divisions_per_conference as usize * self.teams_per_division as usize
    }

    pub fn conference_size(&self) -> usize {
        self.divisions_per_conference as usize * self.teams_per_division as usize
    }

    /// Conference opponents outside a team's own division.
    pub fn conference_pool_size(&self) -> usize {
        (self.divisions_per_conference as usize - 1) * self.teams_per_division as usize
    }

    /// Per-team season game target implied by the quotas.
    pub fn games_per_team(&self) -> u32 {
        let division = self.division_rival_games as u32 * (self.teams_per_division as u32 - 1);
        let cross = self.cross_conference_games as u32 * self.conference_size() as u32;
        let pool = 4 * self.emphasized_pool_size as u32 + 3 * self.reduced_pool_size as u32;

        division + cross + pool
    }

    /// The rotating 4/3-game split must cover the conference pool
    /// exactly, and the even-split quotas must halve cleanly.
    pub fn validate(&self) -> Result<(), LeagueError> {
        let pool = self.emphasized_pool_size as usize + self.reduced_pool_size as usize;
        if pool != self.conference_pool_size() {
            return Err(LeagueError::Configuration(format!(
                "conference pool split {}+{} does not cover the {} non-division opponents",
                self.emphasized_pool_size,
                self.reduced_pool_size,
                self.conference_pool_size()
            )));
        }

        if self.division_rival_games % 2 != 0 || self.cross_conference_games % 2 != 0 {
            return Err(LeagueError::Configuration(format!(
                "division ({}) and cross-conference ({}) quotas must split evenly home/away",
                self.division_rival_games, self.cross_conference_games
            )));
        }

        // The pool quotas are dealt per pair of divisions, so they
        // must divide across the other divisions of the conference.
        if self.divisions_per_conference > 1 {
            let division_pairs = self.divisions_per_conference - 1;
            if self.emphasized_pool_size % division_pairs != 0
                || self.reduced_pool_size % division_pairs != 0
            {
                return Err(LeagueError::Configuration(format!(
                    "pool quotas {}/{} do not divide across {} paired divisions",
                    self.emphasized_pool_size, self.reduced_pool_size, division_pairs
                )));
            }
        }

        Ok(())
    }
}
