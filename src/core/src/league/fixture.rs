use crate::league::matchup::MatchupMatrix;
use serde::{Deserialize, Serialize};

/// A single game. Created unscheduled (`day == 0`); the day scheduler
/// sets the day exactly once and nothing in this core touches it again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u32,
    pub season: u32,
    pub day: u16,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub played: bool,
}

pub struct FixtureExpander;

impl FixtureExpander {
    /// Flatten every matchup leg into `count` independent fixtures.
    /// Ids come from a monotonic counter starting at 1, so they are
    /// unique and collision-free within one schedule.
    pub fn expand(matrix: &MatchupMatrix, season: u32) -> Vec<Fixture> {
        let mut fixtures = Vec::with_capacity(matrix.total_games() as usize);
        let mut next_id = 1u32;

        for leg in matrix.legs() {
            for _ in 0..leg.count {
                fixtures.push(Fixture {
                    id: next_id,
                    season,
                    day: 0,
                    home_team_id: leg.home,
                    away_team_id: leg.away,
                    played: false,
                });
                next_id += 1;
            }
        }

        fixtures
    }
}
