use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoints::{Endpoint, EndpointParams};
use crate::error::{DraftError, Result};
use crate::fetcher::Fetcher;
use crate::http_client::Transport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStatus {
    #[serde(default)]
    pub current_event: Option<u32>,
    #[serde(default)]
    pub current_event_finished: bool,
    #[serde(default)]
    pub next_event: Option<u32>,
    #[serde(default)]
    pub waivers_processed: Option<bool>,
}

impl GameStatus {
    pub fn report_gameweek(&self) -> Option<u32> {
        self.current_event.or(self.next_event)
    }
}

pub fn get_game_status<T: Transport>(fetcher: &Fetcher<T>) -> Result<GameStatus> {
    let raw = fetcher.fetch(Endpoint::Game, &EndpointParams::none())?;
    serde_json::from_value(raw).map_err(|err| DraftError::malformed("game status", err))
}

pub fn get_data<T: Transport>(fetcher: &Fetcher<T>) -> Result<Value> {
    fetcher.fetch(Endpoint::FplBootstrapStatic, &EndpointParams::none())
}
