use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two league halves. Sorted-name order decides membership:
/// the first half of the alphabet goes East, the rest West.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Conference {
    East,
    West,
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conference::East => write!(f, "East"),
            Conference::West => write!(f, "West"),
        }
    }
}

/// A numbered division scoped to its conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Division {
    pub conference: Conference,
    pub index: u8,
}

impl Division {
    pub fn new(conference: Conference, index: u8) -> Self {
        Division { conference, index }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.conference, self.index)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,

    // None until the season topology is merged in
    pub conference: Option<Conference>,
    pub division: Option<Division>,
}

impl Team {
    pub fn new(id: u32, name: String) -> Self {
        Team {
            id,
            name,
            conference: None,
            division: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_label_format() {
        let division = Division::new(Conference::East, 2);
        assert_eq!(division.to_string(), "East-2");

        let division = Division::new(Conference::West, 3);
        assert_eq!(division.to_string(), "West-3");
    }

    #[test]
    fn test_new_team_has_no_alignment() {
        let team = Team::new(7, String::from("Memphis"));

        assert_eq!(team.id, 7);
        assert!(team.conference.is_none());
        assert!(team.division.is_none());
    }
}
