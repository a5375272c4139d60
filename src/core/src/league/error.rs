use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeagueError {
    /// League sizing or quota arithmetic is broken. Fatal: surfaced
    /// before any fixture is generated, never silently corrected.
    #[error("league configuration invalid: {0}")]
    Configuration(String),

    /// A post-generation check failed. This is a defect in the
    /// generator, not bad input.
    #[error("schedule invariant violated: {0}")]
    InvariantViolation(String),
}
