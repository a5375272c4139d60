use crate::league::fixture::Fixture;
use crate::league::league::LeagueSettings;
use log::debug;
use std::collections::HashSet;

pub struct DayScheduler;

impl DayScheduler {
    /// Assign a 1-based day to every fixture so that no team plays
    /// twice on the same day.
    ///
    /// Main pass: for each day up to the regular-season cap, scan the
    /// unscheduled pool once in order and claim the first fixture whose
    /// teams are both free, stopping the day at `max_games_per_day`.
    /// Greedy and single-pass, so the packing is not provably minimal,
    /// only correct.
    ///
    /// Overflow pass: whatever the greedy pass could not place inside
    /// the cap goes onto extra days past it, `overflow_games_per_day`
    /// at a time in pool order. The same both-teams-free check applies
    /// there; a conflicting fixture spills to a later overflow day
    /// instead of double-booking a team.
    ///
    /// Returns the number of fixtures that landed past the cap.
    pub fn assign_days(fixtures: &mut [Fixture], settings: &LeagueSettings) -> usize {
        let mut pool: Vec<usize> = (0..fixtures.len()).collect();

        for day in 1..=settings.regular_season_days {
            if pool.is_empty() {
                break;
            }
            Self::pack_day(fixtures, &mut pool, day, settings.max_games_per_day);
        }

        let overflowed = pool.len();
        if overflowed == 0 {
            return 0;
        }

        debug!(
            "day cap {} exhausted with {} fixtures unplaced",
            settings.regular_season_days, overflowed
        );

        let mut day = settings.regular_season_days;
        while !pool.is_empty() {
            day += 1;
            let placed = Self::pack_day(fixtures, &mut pool, day, settings.overflow_games_per_day);
            // The first pool fixture is always claimable on a fresh
            // day, so the loop strictly shrinks the pool.
            debug_assert!(placed > 0);
        }

        overflowed
    }

    fn pack_day(
        fixtures: &mut [Fixture],
        pool: &mut Vec<usize>,
        day: u16,
        games_cap: usize,
    ) -> usize {
        let mut day_teams: HashSet<u32> = HashSet::new();
        let mut placed = 0;

        pool.retain(|&idx| {
            if placed >= games_cap {
                return true;
            }

            let fixture = &mut fixtures[idx];
            if day_teams.contains(&fixture.home_team_id) || day_teams.contains(&fixture.away_team_id)
            {
                return true;
            }

            fixture.day = day;
            day_teams.insert(fixture.home_team_id);
            day_teams.insert(fixture.away_team_id);
            placed += 1;
            false
        });

        placed
    }
}
