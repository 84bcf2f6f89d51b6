use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoints::{Endpoint, EndpointParams};
use crate::error::{DraftError, Result};
use crate::fetcher::Fetcher;
use crate::http_client::Transport;
use crate::league::TeamRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeItem {
    pub element_in: u32,
    pub element_out: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: u32,
    pub offered_entry: u32,
    pub received_entry: u32,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub offer_time: Option<String>,
    #[serde(default)]
    pub response_time: Option<String>,
    #[serde(default)]
    pub tradeitem_set: Vec<TradeItem>,
}

#[derive(Debug, Deserialize)]
struct TradesResponse {
    trades: Vec<Trade>,
}

pub fn get_trades<T: Transport>(fetcher: &Fetcher<T>, league_id: u32) -> Result<Vec<Trade>> {
    let raw = fetcher.fetch(Endpoint::DraftLeagueTrades, &EndpointParams::league(league_id))?;
    parse_trades(raw)
}

pub fn parse_trades(raw: Value) -> Result<Vec<Trade>> {
    let resp: TradesResponse =
        serde_json::from_value(raw).map_err(|err| DraftError::malformed("league trades", err))?;
    Ok(resp.trades)
}

/// Waiver and free-agent transactions need an authenticated session, which this
/// client never establishes.
pub fn get_transactions<T: Transport>(
    _fetcher: &Fetcher<T>,
    _teams: &[TeamRef],
    _gw: u32,
) -> Result<Vec<Value>> {
    Err(DraftError::NotImplemented(
        "entry transactions require an authenticated session",
    ))
}
