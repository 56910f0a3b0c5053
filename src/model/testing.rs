use std::cell::RefCell;
use std::collections::VecDeque;

use crate::model::{service::TallyService, types::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Counts,
    Vote(Team),
}

/// How a scripted `POST /vote` should behave.
pub enum VoteReply {
    Done(Result<(), Error>),
    /// never resolves
    Hang,
}

/// In-memory tally service that answers from queued replies and records
/// every call it gets. Empty queues answer with an empty tally / a
/// successful vote.
#[derive(Default)]
pub struct ScriptedService {
    counts: RefCell<VecDeque<Result<Vec<TallyRecord>, Error>>>,
    votes: RefCell<VecDeque<VoteReply>>,
    calls: RefCell<Vec<Call>>,
}

impl ScriptedService {
    pub fn reply_counts(&self, reply: Result<Vec<TallyRecord>, Error>) -> &Self {
        self.counts.borrow_mut().push_back(reply);
        self
    }

    pub fn reply_vote(&self, reply: VoteReply) -> &Self {
        self.votes.borrow_mut().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| **call == Call::Counts)
            .count()
    }
}

impl TallyService for ScriptedService {
    async fn counts(&self) -> Result<Vec<TallyRecord>, Error> {
        self.calls.borrow_mut().push(Call::Counts);
        let reply = self.counts.borrow_mut().pop_front();
        reply.unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn vote(&self, team: Team) -> Result<(), Error> {
        self.calls.borrow_mut().push(Call::Vote(team));
        let reply = self.votes.borrow_mut().pop_front();
        match reply {
            Some(VoteReply::Done(result)) => result,
            Some(VoteReply::Hang) => std::future::pending().await,
            None => Ok(()),
        }
    }
}

pub fn tally(team: &str, count: u64) -> TallyRecord {
    TallyRecord {
        team: team.to_string(),
        count,
    }
}
