mod health;
pub use health::*;
