pub mod live_counts;
pub mod team_panel;

#[allow(unused_imports)]
pub use live_counts::*;
#[allow(unused_imports)]
pub use team_panel::*;
