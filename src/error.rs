use thiserror::Error;

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("HTTP request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("invalid JSON from {url}: {source}")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("endpoint {endpoint} needs {{{placeholder}}} bound")]
    MissingParameter {
        endpoint: &'static str,
        placeholder: &'static str,
    },

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DraftError {
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DraftError::Transport { .. } | DraftError::HttpStatus { .. } | DraftError::InvalidJson { .. }
        )
    }

    pub(crate) fn malformed(what: &str, err: impl std::fmt::Display) -> Self {
        DraftError::MalformedResponse(format!("{what}: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, DraftError>;
