pub mod vote_page;

pub use vote_page::*;
