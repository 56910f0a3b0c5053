use std::time::Duration;

use crate::model::{service::TALLY_SERVICE_URL, types::*};

/// Asks the tally service's `GET /health` whether it is up.
pub async fn check_tally_service(client: &reqwest::Client) -> Result<(), Error> {
    let response = client
        .get(format!("{}/health", TALLY_SERVICE_URL))
        .timeout(Duration::from_secs(2))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::Status(response.status().as_u16()));
    }
    Ok(())
}
