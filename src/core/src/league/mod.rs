pub mod builder;
pub mod error;
pub mod fixture;
pub mod generator;
pub mod league;
pub mod matchup;
pub mod schedule;
pub mod scheduling;
pub mod team;
pub mod topology;

pub use builder::*;
pub use error::*;
pub use fixture::*;
pub use generator::*;
pub use league::*;
pub use matchup::*;
pub use schedule::*;
pub use scheduling::*;
pub use team::*;
pub use topology::*;
