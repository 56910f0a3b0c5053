use leptos::prelude::*;

use crate::model::{CountState, Team};

#[component]
pub fn LiveCounts(#[prop(into)] counts: Signal<CountState>) -> impl IntoView {
    view! {
        <div class="live-counts">
            <h3>"Live counts"</h3>
            <div class="live-counts-row">
                {Team::ALL
                    .into_iter()
                    .map(|team| {
                        view! {
                            <div class="live-count">
                                <div>{team.display_name()}</div>
                                <div class="live-count-value">{move || counts.get().get(team)}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    #[test]
    fn readout_shows_both_counts() {
        let counts = CountState {
            australia: 31,
            england: 47,
        };
        let html = Owner::new().with(|| {
            view! { <LiveCounts counts=Signal::stored(counts) /> }.to_html()
        });

        assert!(html.contains("Live counts"), "{html}");
        assert!(html.contains("Australia"), "{html}");
        assert!(html.contains("England"), "{html}");
        assert!(html.contains("31"), "{html}");
        assert!(html.contains("47"), "{html}");
    }
}
