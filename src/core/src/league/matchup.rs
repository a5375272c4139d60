use crate::league::error::LeagueError;
use crate::league::league::{League, LeagueSettings};
use crate::league::team::Division;
use crate::league::topology::Topology;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical unordered pair of team ids. Structural, not stringly:
/// `new` sorts, so the same pair always produces the same key no matter
/// which side discovered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchupKey {
    pub low: u32,
    pub high: u32,
}

impl MatchupKey {
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            MatchupKey { low: a, high: b }
        } else {
            MatchupKey { low: b, high: a }
        }
    }
}

/// One direction of a matchup: `count` games hosted by `home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupLeg {
    pub home: u32,
    pub away: u32,
    pub count: u8,
}

impl MatchupLeg {
    fn new(home: u32, away: u32, count: u8) -> Self {
        MatchupLeg { home, away, count }
    }
}

/// The season's full pairing agreement: for every unordered team pair,
/// how many games each side hosts. Keyed by [`MatchupKey`] in a
/// `BTreeMap` so iteration (and therefore fixture emission) is
/// deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchupMatrix {
    matchups: BTreeMap<MatchupKey, Vec<MatchupLeg>>,
}

impl MatchupMatrix {
    /// Fill every unordered pair's quota, visiting each pair exactly
    /// once through its division pair:
    ///
    /// - division rivals: the full quota split evenly (reference 2+2),
    /// - cross-conference opponents: split evenly (reference 1+1),
    /// - conference non-division opponents: each team takes its
    ///   id-sorted position inside its division; a pair plays three
    ///   games when the two positions sum onto one of the season's
    ///   reduced residues, four games (2+2) otherwise. Both sides of a
    ///   pair evaluate the same sum, so the counts agree by
    ///   construction, and each position sees every residue exactly
    ///   once per opposing division, giving every team the same 6/4
    ///   split of fours and threes. The extra home game of a
    ///   three-game pair alternates by position-sum parity.
    ///
    /// The reduced residue set is keyed by `season mod pool size`, so
    /// four-game sets rotate season over season. Fully deterministic
    /// for a given league and season, no randomness.
    pub fn build(
        league: &League,
        topology: &Topology,
        settings: &LeagueSettings,
    ) -> Result<MatchupMatrix, LeagueError> {
        settings.validate()?;

        let division_size = settings.teams_per_division as usize;

        // Id-sorted division rosters; a team's roster position is its
        // deterministic "local index" for the pool split.
        let mut rosters: BTreeMap<Division, Vec<u32>> = BTreeMap::new();
        for team in &league.teams {
            let division = topology.division_of(team.id).ok_or_else(|| {
                LeagueError::Configuration(format!(
                    "team {} is missing from the season topology",
                    team.id
                ))
            })?;
            rosters.entry(division).or_default().push(team.id);
        }
        for roster in rosters.values_mut() {
            roster.sort_unstable();
        }

        if rosters.len() != 2 * settings.divisions_per_conference as usize {
            return Err(LeagueError::Configuration(format!(
                "league maps onto {} divisions, expected {}",
                rosters.len(),
                2 * settings.divisions_per_conference
            )));
        }
        for (division, roster) in &rosters {
            if roster.len() != division_size {
                return Err(LeagueError::Configuration(format!(
                    "division {} has {} teams, expected {}",
                    division,
                    roster.len(),
                    division_size
                )));
            }
        }

        let division_half = settings.division_rival_games / 2;
        let cross_half = settings.cross_conference_games / 2;
        let reduced_deltas = Self::reduced_deltas(settings, league.season);
        let season = league.season as usize;

        let mut matchups: BTreeMap<MatchupKey, Vec<MatchupLeg>> = BTreeMap::new();

        for roster in rosters.values() {
            for (&a, &b) in roster.iter().tuple_combinations() {
                matchups.insert(
                    MatchupKey::new(a, b),
                    vec![
                        MatchupLeg::new(a, b, division_half),
                        MatchupLeg::new(b, a, division_half),
                    ],
                );
            }
        }

        for ((division_a, roster_a), (division_b, roster_b)) in rosters.iter().tuple_combinations()
        {
            if division_a.conference != division_b.conference {
                for &a in roster_a {
                    for &b in roster_b {
                        matchups.insert(
                            MatchupKey::new(a, b),
                            vec![
                                MatchupLeg::new(a, b, cross_half),
                                MatchupLeg::new(b, a, cross_half),
                            ],
                        );
                    }
                }
                continue;
            }

            for (x, &a) in roster_a.iter().enumerate() {
                for (y, &b) in roster_b.iter().enumerate() {
                    let key = MatchupKey::new(a, b);

                    let legs = if reduced_deltas.contains(&((x + y) % division_size)) {
                        // Alternate which side hosts the odd third game
                        // so hosting stays balanced across the pool.
                        if (x + y + season) % 2 == 0 {
                            vec![
                                MatchupLeg::new(key.low, key.high, 2),
                                MatchupLeg::new(key.high, key.low, 1),
                            ]
                        } else {
                            vec![
                                MatchupLeg::new(key.high, key.low, 2),
                                MatchupLeg::new(key.low, key.high, 1),
                            ]
                        }
                    } else {
                        vec![MatchupLeg::new(a, b, 2), MatchupLeg::new(b, a, 2)]
                    };

                    matchups.insert(key, legs);
                }
            }
        }

        let matrix = MatchupMatrix { matchups };

        let target = settings.games_per_team();
        for team in &league.teams {
            let total = matrix.games_for_team(team.id);
            if total != target {
                return Err(LeagueError::Configuration(format!(
                    "team {} is scheduled for {} games, expected {}",
                    team.id, total, target
                )));
            }
        }

        Ok(matrix)
    }

    /// Position-sum residues whose pairs play three games this season.
    ///
    /// `season mod pool size` picks an anchor residue and a step, which
    /// for the reference sizing (two reduced residues out of five)
    /// enumerates all ten distinct residue pairs: seasons that differ
    /// modulo the ten-opponent pool select different four-game sets,
    /// while seasons congruent modulo the pool agree exactly.
    fn reduced_deltas(settings: &LeagueSettings, season: u32) -> Vec<usize> {
        let pool_size = settings.conference_pool_size();
        if pool_size == 0 {
            return Vec::new();
        }

        let division_size = settings.teams_per_division as usize;
        let division_pairs = settings.divisions_per_conference as usize - 1;
        let reduced_per_pair = settings.reduced_pool_size as usize / division_pairs;

        let rotation = season as usize % pool_size;
        let anchor = rotation % division_size;
        let step = 1 + rotation / division_size;

        (0..reduced_per_pair)
            .map(|j| (anchor + j * step) % division_size)
            .collect()
    }

    /// All legs in canonical key order.
    pub fn legs(&self) -> impl Iterator<Item = &MatchupLeg> {
        self.matchups.values().flatten()
    }

    pub fn matchup_count(&self) -> usize {
        self.matchups.len()
    }

    pub fn games_between(&self, a: u32, b: u32) -> u32 {
        self.matchups
            .get(&MatchupKey::new(a, b))
            .map(|legs| legs.iter().map(|l| l.count as u32).sum())
            .unwrap_or(0)
    }

    pub fn games_for_team(&self, team_id: u32) -> u32 {
        self.legs()
            .filter(|l| l.home == team_id || l.away == team_id)
            .map(|l| l.count as u32)
            .sum()
    }

    pub fn total_games(&self) -> u32 {
        self.legs().map(|l| l.count as u32).sum()
    }

    /// Opponents this team plays four times this season.
    pub fn emphasized_opponents(&self, team_id: u32) -> Vec<u32> {
        self.matchups
            .iter()
            .filter(|(key, legs)| {
                (key.low == team_id || key.high == team_id)
                    && legs.iter().map(|l| l.count as u32).sum::<u32>() == 4
            })
            .map(|(key, _)| if key.low == team_id { key.high } else { key.low })
            .collect()
    }
}
