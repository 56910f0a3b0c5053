use axum::extract::FromRef;
use leptos::config::LeptosOptions;

#[derive(FromRef, Clone, Debug)]
pub struct AppState {
    pub reqwest_client: reqwest::Client,
    pub leptos_options: LeptosOptions,
}

impl AppState {
    pub fn new(leptos_options: LeptosOptions) -> Self {
        Self {
            reqwest_client: reqwest::Client::new(),
            leptos_options,
        }
    }
}
