use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::endpoints::{Endpoint, EndpointParams, EndpointTable};
use crate::error::Result;
use crate::http_client::{HttpTransport, Transport};

pub struct Fetcher<T: Transport = HttpTransport> {
    endpoints: EndpointTable,
    transport: T,
    fetch_parallelism: usize,
}

impl Fetcher<HttpTransport> {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let transport = HttpTransport::new(cfg)?;
        Ok(Self::new(EndpointTable::from_config(cfg), transport).with_parallelism(cfg.fetch_parallelism))
    }
}

impl<T: Transport> Fetcher<T> {
    pub fn new(endpoints: EndpointTable, transport: T) -> Self {
        Self {
            endpoints,
            transport,
            fetch_parallelism: 1,
        }
    }

    pub fn with_parallelism(mut self, threads: usize) -> Self {
        self.fetch_parallelism = threads.max(1);
        self
    }

    pub fn fetch_parallelism(&self) -> usize {
        self.fetch_parallelism
    }

    pub fn endpoints(&self) -> &EndpointTable {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn fetch(&self, endpoint: Endpoint, params: &EndpointParams) -> Result<Value> {
        let url = self.endpoints.url(endpoint, params)?;
        debug!(endpoint = endpoint.name(), %url, "GET");
        self.transport.get_json(&url)
    }
}
