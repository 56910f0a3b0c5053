use leptos::prelude::*;

use crate::model::Team;

/// One side of the vote: name, vote button and its current count.
#[component]
pub fn TeamPanel(
    team: Team,
    #[prop(into)] count: Signal<u64>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_vote: Callback<Team>,
) -> impl IntoView {
    view! {
        <div class="team-panel">
            <h2>{team.display_name()}</h2>
            <button
                class="button"
                on:click=move |_| on_vote.run(team)
                disabled=move || loading.get()
            >
                "Vote "
                {team.display_name()}
            </button>
            <p>"Votes: " <strong>{move || count.get()}</strong></p>
        </div>
    }
}
