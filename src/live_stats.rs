use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoints::{Endpoint, EndpointParams};
use crate::error::{DraftError, Result};
use crate::fetcher::Fetcher;
use crate::http_client::Transport;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStat {
    #[serde(default)]
    pub element: u32,
    #[serde(default)]
    pub minutes: Option<i64>,
    #[serde(default)]
    pub goals_scored: Option<i64>,
    #[serde(default)]
    pub assists: Option<i64>,
    #[serde(default)]
    pub clean_sheets: Option<i64>,
    #[serde(default)]
    pub goals_conceded: Option<i64>,
    #[serde(default)]
    pub own_goals: Option<i64>,
    #[serde(default)]
    pub penalties_saved: Option<i64>,
    #[serde(default)]
    pub penalties_missed: Option<i64>,
    #[serde(default)]
    pub yellow_cards: Option<i64>,
    #[serde(default)]
    pub red_cards: Option<i64>,
    #[serde(default)]
    pub saves: Option<i64>,
    #[serde(default)]
    pub bonus: Option<i64>,
    #[serde(default)]
    pub bps: Option<i64>,
    #[serde(default)]
    pub total_points: Option<i64>,
    #[serde(default)]
    pub in_dreamteam: Option<bool>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct EventLive {
    elements: BTreeMap<String, LiveElement>,
}

#[derive(Debug, Deserialize)]
struct LiveElement {
    stats: PlayerStat,
}

pub fn get_weekly_player_stats<T: Transport>(fetcher: &Fetcher<T>, gw: u32) -> Result<Vec<PlayerStat>> {
    let raw = fetcher.fetch(Endpoint::EventLive, &EndpointParams::gameweek(gw))?;
    parse_weekly_player_stats(raw)
}

pub fn parse_weekly_player_stats(raw: Value) -> Result<Vec<PlayerStat>> {
    let live: EventLive =
        serde_json::from_value(raw).map_err(|err| DraftError::malformed("event live", err))?;

    live.elements
        .into_iter()
        .map(|(key, entry)| {
            let element = key
                .trim()
                .parse::<u32>()
                .map_err(|err| DraftError::malformed("event live element key", format!("{key:?}: {err}")))?;
            let mut stat = entry.stats;
            stat.element = element;
            stat.other.remove("element");
            Ok(stat)
        })
        .collect()
}
