use gloo::timers::future::IntervalStream;
use leptos::{prelude::*, task::spawn_local};

use crate::components::*;
use crate::model::{HttpTallyService, RefreshSchedule, Team, VotingClient, REFRESH_PERIOD};

#[component]
pub fn VotePage() -> impl IntoView {
    let client = VotingClient::new(HttpTallyService::default());

    // effects only run in the browser, so polling starts after hydration and
    // stops when the page is torn down
    Effect::new({
        let client = client.clone();
        move |_| {
            let ticks = IntervalStream::new(REFRESH_PERIOD.as_millis() as u32);
            let schedule =
                RefreshSchedule::start(client.clone(), ticks, |task| spawn_local(task));
            on_cleanup(move || drop(schedule));
        }
    });

    let on_vote = Callback::new({
        let client = client.clone();
        move |team: Team| {
            let client = client.clone();
            spawn_local(async move {
                let _ = client.cast_vote(team).await;
            });
        }
    });

    let counts = client.counts();
    let loading = client.is_loading();

    view! {
        <div id="vote-page">
            <h1>"Ashes – Vote for the winner"</h1>
            <div class="team-panels">
                {Team::ALL
                    .into_iter()
                    .map(|team| {
                        view! {
                            <TeamPanel
                                team
                                count=Signal::derive(move || counts.get().get(team))
                                loading
                                on_vote
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <LiveCounts counts />
        </div>
    }
}
