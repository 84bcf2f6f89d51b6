use std::env;

use crate::error::{DraftError, Result};

pub const DRAFT_API_BASE: &str = "https://draft.premierleague.com/api";
pub const FPL_API_BASE: &str = "https://fantasy.premierleague.com/api";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_FETCH_PARALLELISM: usize = 6;
const MAX_FETCH_PARALLELISM: usize = 32;

#[derive(Debug, Clone)]
pub struct Config {
    /// Draft game API root (DRAFT_API_BASE)
    pub draft_api_base: String,
    /// Main fantasy site API root, only used for the global bootstrap (FPL_API_BASE)
    pub fpl_api_base: String,
    /// Per-request timeout of the HTTP client (HTTP_TIMEOUT_SECS)
    pub http_timeout_secs: u64,
    /// Concurrent per-team pick fetches; 1 means strictly sequential (FETCH_PARALLELISM)
    pub fetch_parallelism: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            draft_api_base: DRAFT_API_BASE.to_string(),
            fpl_api_base: FPL_API_BASE.to_string(),
            http_timeout_secs: DEFAULT_TIMEOUT_SECS,
            fetch_parallelism: DEFAULT_FETCH_PARALLELISM,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let http_timeout_secs = match non_empty("HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                DraftError::Config(format!("HTTP_TIMEOUT_SECS must be a whole number, got {raw:?}"))
            })?,
            None => defaults.http_timeout_secs,
        };
        let fetch_parallelism = match non_empty("FETCH_PARALLELISM") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                DraftError::Config(format!("FETCH_PARALLELISM must be a whole number, got {raw:?}"))
            })?,
            None => defaults.fetch_parallelism,
        }
        .clamp(1, MAX_FETCH_PARALLELISM);

        Ok(Self {
            draft_api_base: non_empty("DRAFT_API_BASE")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.draft_api_base),
            fpl_api_base: non_empty("FPL_API_BASE")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.fpl_api_base),
            http_timeout_secs,
            fetch_parallelism,
            log_level: non_empty("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }
}
