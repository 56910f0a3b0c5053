pub mod types;
pub use types::*;

pub mod client;
pub mod schedule;
pub mod service;

pub use client::VotingClient;
pub use schedule::{RefreshSchedule, REFRESH_PERIOD};
pub use service::{HttpTallyService, TallyService, TALLY_SERVICE_URL};

#[cfg(feature = "ssr")]
pub mod functions;
#[cfg(feature = "ssr")]
pub use functions::*;

#[cfg(test)]
mod testing;
