pub mod config;
pub mod endpoints;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod fixtures;
pub mod game;
pub mod http_client;
pub mod join;
pub mod league;
pub mod live_stats;
pub mod picks;
pub mod players;
pub mod report;
pub mod trades;

pub use error::{DraftError, Result};
pub use fetcher::Fetcher;
