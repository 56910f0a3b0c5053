use std::rc::Rc;
use std::time::Duration;

use futures::{
    future::{self, AbortHandle, Abortable, LocalBoxFuture},
    FutureExt, Stream, StreamExt,
};

use crate::model::{client::VotingClient, service::TallyService};

/// How often the counts are polled while the page is up.
pub const REFRESH_PERIOD: Duration = Duration::from_millis(1000);

/// A running poll of the tally service.
///
/// Refreshes once right away and then once per item of the tick stream, each
/// refresh on its own spawned task. Dropping the schedule stops the ticking,
/// refreshes already sent are left to finish.
pub struct RefreshSchedule {
    handle: AbortHandle,
}

impl RefreshSchedule {
    pub fn start<S, T, F>(client: VotingClient<S>, ticks: T, spawn: F) -> Self
    where
        S: TallyService + 'static,
        T: Stream<Item = ()> + 'static,
        F: Fn(LocalBoxFuture<'static, ()>) + 'static,
    {
        let spawn = Rc::new(spawn);
        let refresh = {
            let spawn = Rc::clone(&spawn);
            move || {
                let client = client.clone();
                spawn(
                    async move {
                        let _ = client.refresh_counts().await;
                    }
                    .boxed_local(),
                );
            }
        };
        refresh();

        let (handle, registration) = AbortHandle::new_pair();
        let ticking = Abortable::new(
            ticks.for_each(move |()| {
                refresh();
                future::ready(())
            }),
            registration,
        );
        spawn(
            async move {
                let _ = ticking.await;
            }
            .boxed_local(),
        );

        Self { handle }
    }

    pub fn is_active(&self) -> bool {
        !self.handle.is_aborted()
    }

    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for RefreshSchedule {
    fn drop(&mut self) {
        self.stop();
    }
}
