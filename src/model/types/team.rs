use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides a vote can go to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Australia,
    England,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Australia, Team::England];

    /// the key the tally service uses on the wire
    pub fn key(self) -> &'static str {
        match self {
            Team::Australia => "australia",
            Team::England => "england",
        }
    }

    pub fn from_key(key: &str) -> Option<Team> {
        Self::ALL.into_iter().find(|team| team.key() == key)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Team::Australia => "Australia",
            Team::England => "England",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_resolve_back_to_teams() {
        for team in Team::ALL {
            assert_eq!(Team::from_key(team.key()), Some(team));
        }
        assert_eq!(Team::from_key("india"), None);
        assert_eq!(Team::from_key("Australia"), None);
    }

    #[test]
    fn serializes_as_lowercase_key() {
        assert_eq!(serde_json::to_string(&Team::England).unwrap(), "\"england\"");
        assert_eq!(
            serde_json::from_str::<Team>("\"australia\"").unwrap(),
            Team::Australia
        );
    }
}
