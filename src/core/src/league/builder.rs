use crate::league::league::League;
use crate::league::team::Team;

pub struct LeagueBuilder {
    id: u32,
    name: String,
    season: u32,
    teams: Vec<Team>,
}

impl LeagueBuilder {
    pub fn new(id: u32, name: &str, season: u32) -> Self {
        LeagueBuilder {
            id,
            name: String::from(name),
            season,
            teams: Vec::new(),
        }
    }

    pub fn with_team(mut self, id: u32, name: impl Into<String>) -> Self {
        self.teams.push(Team::new(id, name.into()));
        self
    }

    pub fn with_teams<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next_id = self.teams.len() as u32 + 1;
        for (offset, name) in names.into_iter().enumerate() {
            self.teams.push(Team::new(next_id + offset as u32, name.into()));
        }
        self
    }

    pub fn build(self) -> League {
        League::new(self.id, self.name, self.season, self.teams)
    }
}
