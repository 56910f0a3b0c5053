use serde::{Deserialize, Serialize};

use super::Team;

/// A single row of `GET /counts`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TallyRecord {
    /// kept as a raw key, the service may report teams we don't know about
    pub team: String,
    pub count: u64,
}

/// Body of `POST /vote`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteRequest {
    pub team: Team,
}

/// Last known vote count for every team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountState {
    pub australia: u64,
    pub england: u64,
}

impl CountState {
    /// Builds a fresh state from a tally response.
    ///
    /// Teams missing from `records` stay at 0, unknown teams are skipped and
    /// if a team shows up twice the later record wins.
    pub fn from_tallies<'a>(records: impl IntoIterator<Item = &'a TallyRecord>) -> Self {
        let mut counts = Self::default();
        for record in records {
            if let Some(team) = Team::from_key(&record.team) {
                *counts.slot(team) = record.count;
            }
        }
        counts
    }

    pub fn get(&self, team: Team) -> u64 {
        match team {
            Team::Australia => self.australia,
            Team::England => self.england,
        }
    }

    fn slot(&mut self, team: Team) -> &mut u64 {
        match team {
            Team::Australia => &mut self.australia,
            Team::England => &mut self.england,
        }
    }
}
