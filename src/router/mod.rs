use axum::Router;
use leptos_axum::{file_and_error_handler, generate_route_list, LeptosRoutes};

use crate::app::{shell, App};
use crate::model::AppState;

/// Serves the rendered vote page, the wasm bundle and everything else under
/// the site root.
pub fn new(app_state: AppState) -> Router {
    let routes = generate_route_list(App);
    Router::new()
        .leptos_routes(&app_state, routes, {
            let options = app_state.leptos_options.clone();
            move || shell(options.clone())
        })
        .fallback(file_and_error_handler::<AppState, _>(shell))
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use leptos::config::LeptosOptions;

    use super::*;

    #[tokio::test]
    async fn router_builds_with_app_state() {
        let options = LeptosOptions::builder().output_name("ashes_vote").build();
        let _router = new(AppState::new(options));
    }
}
