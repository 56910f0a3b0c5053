use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Could not reach the tally service: {0}")]
    Transport(String),
    #[error("The tally service answered with status {0}")]
    Status(u16),
    #[error("Error from serde decode: {0}")]
    Decode(String),
    #[error("Error from serde encode: {0}")]
    Encode(String),
    #[error("A vote is already being submitted")]
    VoteInFlight,
}

impl Error {
    /// Failures of the request itself, before any body was looked at.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::Status(_) | Error::Encode(_)
        )
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

impl From<gloo::net::Error> for Error {
    fn from(e: gloo::net::Error) -> Self {
        match e {
            gloo::net::Error::SerdeError(e) => Error::Encode(e.to_string()),
            e => Error::Transport(e.to_string()),
        }
    }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(format!("reqwest error: {:?}", e))
    }
}
