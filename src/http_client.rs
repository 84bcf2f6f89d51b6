use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde_json::Value;

use crate::config::Config;
use crate::error::{DraftError, Result};

const USER_AGENT_VALUE: &str = concat!("draft_report/", env!("CARGO_PKG_VERSION"));

pub trait Transport: Send + Sync {
    fn get_json(&self, url: &str) -> Result<Value>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(cfg: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.http_timeout_secs))
            .build()
            .map_err(client_build_error)?;
        Ok(Self { client })
    }
}

fn client_build_error(err: reqwest::Error) -> DraftError {
    DraftError::Config(format!("failed to build http client: {err}"))
}

impl Transport for HttpTransport {
    fn get_json(&self, url: &str) -> Result<Value> {
        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send()
            .map_err(|source| DraftError::Transport {
                url: url.to_string(),
                source,
            })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DraftError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = resp.text().map_err(|source| DraftError::Transport {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_str(body.trim()).map_err(|source| DraftError::InvalidJson {
            url: url.to_string(),
            source,
        })
    }
}
