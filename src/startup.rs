use leptos::{logging, prelude::*};

use crate::model::{self, AppState, TALLY_SERVICE_URL};
use crate::router;

pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    if dotenvy::dotenv().is_err() {
        logging::warn!("didn't find env file");
    }

    // Setting get_configuration(None) means we'll be using cargo-leptos's env values
    // Alternately a file can be specified such as Some("Cargo.toml")
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let state = AppState::new(leptos_options);

    match model::check_tally_service(&state.reqwest_client).await {
        Ok(()) => logging::log!("tally service is up at {}", TALLY_SERVICE_URL),
        Err(e) => logging::warn!("tally service at {} is not healthy: {}", TALLY_SERVICE_URL, e),
    }

    let app = router::new(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    logging::log!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
