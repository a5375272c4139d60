use core::utils::TimeEstimation;
use core::{LeagueBuilder, LeagueSettings, ScheduleGenerator};
use env_logger::Env;
use log::info;
use std::env;

const TEAM_NAMES: [&str; 30] = [
    "Atlanta", "Boston", "Brooklyn", "Charlotte", "Chicago",
    "Cleveland", "Dallas", "Denver", "Detroit", "Golden State",
    "Houston", "Indiana", "Los Angeles", "Memphis", "Miami",
    "Milwaukee", "Minnesota", "New Orleans", "New York", "Oklahoma City",
    "Orlando", "Philadelphia", "Phoenix", "Portland", "Sacramento",
    "San Antonio", "Toronto", "Utah", "Washington", "Wichita",
];

fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let season = env::var("SEASON")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(2026);

    let mut league = LeagueBuilder::new(1, "Open Basketball League", season)
        .with_teams(TEAM_NAMES)
        .build();

    let settings = LeagueSettings::default();

    let (result, estimated) =
        TimeEstimation::estimate(|| ScheduleGenerator::generate(&mut league, &settings));

    let result = match result {
        Ok(result) => result,
        Err(err) => {
            log::error!("schedule generation failed: {err}");
            std::process::exit(1);
        }
    };

    info!("schedule generated: {} ms", estimated);
    info!(
        "{} fixtures, max day {}, overflowed {}",
        result.schedule.fixtures.len(),
        result.schedule.max_day,
        result.overflowed
    );

    for team in &league.teams {
        info!(
            "{:<15} {:<7} {} games",
            team.name,
            team.division.map(|d| d.to_string()).unwrap_or_default(),
            result.schedule.games_for_team(team.id)
        );
    }
}
