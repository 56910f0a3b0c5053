#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    if let Err(e) = ashes_vote::startup::init().await {
        leptos::logging::error!("server stopped: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
