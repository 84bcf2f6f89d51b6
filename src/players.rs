use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoints::{Endpoint, EndpointParams};
use crate::error::{DraftError, Result};
use crate::fetcher::Fetcher;
use crate::http_client::Transport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename(deserialize = "id"))]
    pub element: u32,
    pub code: u32,
    pub web_name: String,
    pub first_name: String,
    pub second_name: String,
    pub element_type: u8,
}

#[derive(Debug, Deserialize)]
struct Bootstrap {
    elements: Vec<Player>,
}

pub fn get_all_players<T: Transport>(fetcher: &Fetcher<T>) -> Result<Vec<Player>> {
    let raw = fetcher.fetch(Endpoint::BootstrapStatic, &EndpointParams::none())?;
    parse_players(raw)
}

pub fn parse_players(raw: Value) -> Result<Vec<Player>> {
    let bootstrap: Bootstrap =
        serde_json::from_value(raw).map_err(|err| DraftError::malformed("bootstrap elements", err))?;
    Ok(bootstrap.elements)
}
