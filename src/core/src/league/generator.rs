use crate::league::error::LeagueError;
use crate::league::fixture::FixtureExpander;
use crate::league::league::{League, LeagueSettings};
use crate::league::matchup::MatchupMatrix;
use crate::league::schedule::Schedule;
use crate::league::scheduling::DayScheduler;
use crate::league::topology::Topology;
use log::{debug, info, warn};

pub struct ScheduleResult {
    pub schedule: Schedule,
    /// Fixtures the greedy pass could not fit inside the regular day
    /// cap. Zero on a normal season; non-zero is a capacity warning,
    /// not an error, and the overflow days stay conflict-free.
    pub overflowed: usize,
}

pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Run the full pipeline: topology, matchup matrix, fixture
    /// expansion, day assignment, per-team index. The league is only
    /// mutated to receive the conference/division labels.
    pub fn generate(
        league: &mut League,
        settings: &LeagueSettings,
    ) -> Result<ScheduleResult, LeagueError> {
        info!(
            "🏀 Generating season {} schedule for league: {}",
            league.season, league.name
        );

        let topology = Topology::assign(league, settings)?;
        league.apply_topology(&topology);

        let matrix = MatchupMatrix::build(league, &topology, settings)?;
        debug!(
            "matchup matrix: {} pairings, {} games",
            matrix.matchup_count(),
            matrix.total_games()
        );

        let mut fixtures = FixtureExpander::expand(&matrix, league.season);

        let overflowed = DayScheduler::assign_days(&mut fixtures, settings);
        if overflowed > 0 {
            warn!(
                "{} fixtures did not fit inside the {}-day season and were moved to overflow days",
                overflowed, settings.regular_season_days
            );
        }

        let schedule =
            Schedule::with_team_index(league.season, fixtures, league.teams.iter().map(|t| t.id));

        schedule.verify(league, settings)?;

        info!(
            "schedule ready: {} fixtures over {} days",
            schedule.fixtures.len(),
            schedule.max_day
        );

        Ok(ScheduleResult {
            schedule,
            overflowed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::builder::LeagueBuilder;
    use crate::league::team::Conference;
    use std::collections::HashSet;

    const TEAM_NAMES: [&str; 30] = [
        "Atlanta",
        "Boston",
        "Brooklyn",
        "Charlotte",
        "Chicago",
        "Cleveland",
        "Dallas",
        "Denver",
        "Detroit",
        "Golden State",
        "Houston",
        "Indiana",
        "Los Angeles",
        "Memphis",
        "Miami",
        "Milwaukee",
        "Minnesota",
        "New Orleans",
        "New York",
        "Oklahoma City",
        "Orlando",
        "Philadelphia",
        "Phoenix",
        "Portland",
        "Sacramento",
        "San Antonio",
        "Toronto",
        "Utah",
        "Washington",
        "Wichita",
    ];

    fn named_league(season: u32) -> League {
        LeagueBuilder::new(1, "Test League", season)
            .with_teams(TEAM_NAMES)
            .build()
    }

    #[test]
    fn test_full_generation_reference_league() {
        let mut league = named_league(2026);
        let settings = LeagueSettings::default();

        let result = ScheduleGenerator::generate(&mut league, &settings).unwrap();

        assert_eq!(result.overflowed, 0);
        assert_eq!(result.schedule.fixtures.len(), 1230);
        assert!(result.schedule.max_day <= settings.regular_season_days);

        for team in &league.teams {
            assert_eq!(result.schedule.games_for_team(team.id), 82);
        }
    }

    #[test]
    fn test_generation_succeeds_across_seasons() {
        let settings = LeagueSettings::default();

        for season in 2020..2030u32 {
            let mut league = named_league(season);
            let result = ScheduleGenerator::generate(&mut league, &settings)
                .unwrap_or_else(|err| panic!("season {} failed: {}", season, err));

            assert_eq!(result.schedule.fixtures.len(), 1230, "season {}", season);
            for team in &league.teams {
                assert_eq!(result.schedule.games_for_team(team.id), 82);
            }
        }
    }

    #[test]
    fn test_alphabetical_conference_split() {
        let mut league = named_league(2026);
        let settings = LeagueSettings::default();

        ScheduleGenerator::generate(&mut league, &settings).unwrap();

        // Names are already alphabetical, so ids 1..=15 form the East.
        for team in &league.teams {
            let expected = if team.id <= 15 {
                Conference::East
            } else {
                Conference::West
            };
            assert_eq!(team.conference, Some(expected), "team {}", team.name);
        }

        let east_divisions: HashSet<_> = league
            .teams
            .iter()
            .filter(|t| t.conference == Some(Conference::East))
            .map(|t| t.division.unwrap())
            .collect();
        assert_eq!(east_divisions.len(), 3);
    }

    #[test]
    fn test_category_split_per_team() {
        let mut league = named_league(2026);
        let settings = LeagueSettings::default();

        let result = ScheduleGenerator::generate(&mut league, &settings).unwrap();

        for team in &league.teams {
            let mut division = 0;
            let mut cross = 0;
            let mut pool = 0;

            for fixture in result.schedule.fixtures_for_team(team.id) {
                let opponent_id = if fixture.home_team_id == team.id {
                    fixture.away_team_id
                } else {
                    fixture.home_team_id
                };
                let opponent = league.team(opponent_id).unwrap();

                if opponent.division == team.division {
                    division += 1;
                } else if opponent.conference == team.conference {
                    pool += 1;
                } else {
                    cross += 1;
                }
            }

            assert_eq!(division, 16, "team {} division games", team.name);
            assert_eq!(cross, 30, "team {} cross-conference games", team.name);
            assert_eq!(pool, 36, "team {} conference pool games", team.name);
        }
    }

    #[test]
    fn test_team_index_is_ordered_and_complete() {
        let mut league = named_league(2026);
        let settings = LeagueSettings::default();

        let result = ScheduleGenerator::generate(&mut league, &settings).unwrap();
        let schedule = &result.schedule;

        for team in &league.teams {
            let ids = &schedule.by_team[&team.id];
            assert_eq!(ids.len(), 82);

            let days: Vec<u16> = ids.iter().map(|id| schedule.fixture(*id).unwrap().day).collect();
            assert!(days.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_forced_overflow_scenario() {
        let mut league = named_league(2026);
        let settings = LeagueSettings {
            regular_season_days: 1,
            ..LeagueSettings::default()
        };

        let result = ScheduleGenerator::generate(&mut league, &settings).unwrap();

        assert_eq!(result.schedule.fixtures_on_day(1).len(), 15);
        assert_eq!(result.overflowed, 1230 - 15);
        // verify() inside generate already proved there are no
        // double-bookings anywhere, overflow days included.
        assert!(result.schedule.max_day > 1);
    }

    #[test]
    fn test_wrong_team_count_fails_before_generation() {
        let mut league = LeagueBuilder::new(1, "Tiny League", 2026)
            .with_teams(["Boston", "Denver", "Miami", "Utah"])
            .build();

        let result = ScheduleGenerator::generate(&mut league, &LeagueSettings::default());

        assert!(matches!(result, Err(LeagueError::Configuration(_))));
        // No partial schedule and no partial labels on failure paths
        // that reject before topology assignment.
        assert!(league.teams.iter().all(|t| t.conference.is_none()));
    }
}
