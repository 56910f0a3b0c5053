pub mod error;
pub mod tally;
pub mod team;

pub use error::*;
pub use tally::*;
pub use team::*;

#[cfg(feature = "ssr")]
pub mod app_state;
#[cfg(feature = "ssr")]
pub use app_state::*;
