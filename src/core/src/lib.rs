pub mod league;
pub mod utils;

// Re-export league items
pub use league::{
    // League itself
    League, LeagueBuilder, LeagueSettings,
    // Teams and season topology
    Team, Conference, Division, Topology,
    // Matchup matrix
    MatchupKey, MatchupLeg, MatchupMatrix,
    // Fixtures and day assignment
    Fixture, FixtureExpander, DayScheduler,
    // Generated schedule
    Schedule, ScheduleGenerator, ScheduleResult,
    // Errors
    LeagueError,
};

pub use utils::*;
