use gloo::net::http::Request;

use crate::model::types::*;

/// Where the tally service lives, baked in at build time.
pub const TALLY_SERVICE_URL: &str = "http://backend:8080";

/// The two calls the voting widget makes against the tally service.
#[allow(async_fn_in_trait)]
pub trait TallyService {
    /// `GET /counts`
    async fn counts(&self) -> Result<Vec<TallyRecord>, Error>;
    /// `POST /vote`, only success or failure matters
    async fn vote(&self, team: Team) -> Result<(), Error>;
}

/// Talks to the tally service through the browser's fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTallyService {
    base_url: String,
}

impl HttpTallyService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for HttpTallyService {
    fn default() -> Self {
        Self::new(TALLY_SERVICE_URL)
    }
}

impl TallyService for HttpTallyService {
    async fn counts(&self) -> Result<Vec<TallyRecord>, Error> {
        let response = Request::get(&self.endpoint("/counts")).send().await?;
        if !response.ok() {
            return Err(Error::Status(response.status()));
        }
        let body = response.text().await?;
        parse_tallies(&body)
    }

    async fn vote(&self, team: Team) -> Result<(), Error> {
        let response = Request::post(&self.endpoint("/vote"))
            .json(&VoteRequest { team })?
            .send()
            .await?;
        if !response.ok() {
            return Err(Error::Status(response.status()));
        }
        Ok(())
    }
}

pub fn parse_tallies(body: &str) -> Result<Vec<TallyRecord>, Error> {
    Ok(serde_json::from_str(body)?)
}
