use std::sync::Arc;

use leptos::{
    logging::{error, warn},
    prelude::*,
};

use crate::model::{
    service::TallyService,
    types::{CountState, Error, Team},
};

/// Owns the widget state and runs the two operations against the tally
/// service. Cloning is cheap, clones share the same state.
pub struct VotingClient<S> {
    service: Arc<S>,
    counts: RwSignal<CountState>,
    loading: RwSignal<bool>,
}

impl<S> Clone for VotingClient<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            counts: self.counts,
            loading: self.loading,
        }
    }
}

impl<S: TallyService> VotingClient<S> {
    pub fn new(service: S) -> Self {
        Self {
            service: Arc::new(service),
            counts: RwSignal::new(CountState::default()),
            loading: RwSignal::new(false),
        }
    }

    #[cfg(test)]
    pub(crate) fn service(&self) -> &S {
        &self.service
    }

    pub fn counts(&self) -> ReadSignal<CountState> {
        self.counts.read_only()
    }

    /// true while a vote and its follow-up refresh are in flight
    pub fn is_loading(&self) -> ReadSignal<bool> {
        self.loading.read_only()
    }

    /// Fetches the tallies and replaces the counts with them.
    ///
    /// On failure the error is logged and the current counts are left as
    /// they were.
    pub async fn refresh_counts(&self) -> Result<CountState, Error> {
        match self.service.counts().await {
            Ok(records) => {
                let counts = CountState::from_tallies(&records);
                // the page may be gone by the time a late response lands
                self.counts.try_set(counts);
                Ok(counts)
            }
            Err(e) => {
                error!("fetch counts: {}", e);
                Err(e)
            }
        }
    }

    /// Records a vote for `team`, then refreshes the counts whether the vote
    /// went through or not. Returns the outcome of the vote itself.
    pub async fn cast_vote(&self, team: Team) -> Result<(), Error> {
        if self.loading.try_get_untracked().unwrap_or(false) {
            warn!("vote for {} ignored, another vote is in flight", team);
            return Err(Error::VoteInFlight);
        }
        let _loading = LoadingGuard::acquire(self.loading);

        let vote = self.service.vote(team).await;
        if let Err(e) = &vote {
            error!("vote error: {}", e);
        }
        let _ = self.refresh_counts().await;
        vote
    }
}

/// Holds the loading flag up and drops it on every way out, including the
/// vote future being dropped halfway.
struct LoadingGuard(RwSignal<bool>);

impl LoadingGuard {
    fn acquire(flag: RwSignal<bool>) -> Self {
        flag.try_set(true);
        Self(flag)
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.try_set(false);
    }
}
