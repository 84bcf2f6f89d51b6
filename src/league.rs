use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoints::{Endpoint, EndpointParams};
use crate::error::{DraftError, Result};
use crate::fetcher::Fetcher;
use crate::http_client::Transport;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueEntry {
    pub id: u32,
    pub entry_name: String,
    pub joined_time: NaiveDate,
    pub player_first_name: Option<String>,
    pub player_last_name: Option<String>,
    pub short_name: Option<String>,
    pub waiver_pick: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub scoring: Option<String>,
    #[serde(default)]
    pub start_event: Option<u32>,
    #[serde(default)]
    pub stop_event: Option<u32>,
    #[serde(default)]
    pub draft_status: Option<String>,
}

/// Head-to-head match as delivered; `league_entry_*` are league-membership ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub event: u32,
    pub league_entry_1: u32,
    pub league_entry_1_points: i32,
    pub league_entry_2: u32,
    pub league_entry_2_points: i32,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub started: bool,
    #[serde(default)]
    pub winning_league_entry: Option<u32>,
    #[serde(default)]
    pub winning_method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    pub league_entry: u32,
    pub entry_name: Option<String>,
    pub rank: Option<u32>,
    pub matches_won: Option<u32>,
    pub matches_drawn: Option<u32>,
    pub matches_lost: Option<u32>,
    pub points_for: Option<i32>,
    pub points_against: Option<i32>,
    pub total: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct LeagueDetails {
    pub league: Option<LeagueInfo>,
    pub entries: Vec<LeagueEntry>,
    pub matches: Vec<Match>,
    pub standings: Vec<Standing>,
    /// League-membership id -> entry name; the key space of `Match::league_entry_*`.
    pub league_entry_names: HashMap<u32, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRef {
    pub id: u32,
    pub entry_name: String,
}

impl LeagueDetails {
    pub fn team_refs(&self) -> Vec<TeamRef> {
        self.entries
            .iter()
            .map(|e| TeamRef {
                id: e.id,
                entry_name: e.entry_name.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct RawLeagueDetails {
    #[serde(default)]
    league: Option<LeagueInfo>,
    league_entries: Vec<RawLeagueEntry>,
    #[serde(default)]
    matches: Vec<Match>,
    #[serde(default)]
    standings: Vec<RawStanding>,
}

#[derive(Debug, Deserialize)]
struct RawLeagueEntry {
    id: u32,
    entry_id: u32,
    entry_name: String,
    joined_time: String,
    #[serde(default)]
    player_first_name: Option<String>,
    #[serde(default)]
    player_last_name: Option<String>,
    #[serde(default)]
    short_name: Option<String>,
    #[serde(default)]
    waiver_pick: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawStanding {
    league_entry: u32,
    #[serde(default)]
    rank: Option<u32>,
    #[serde(default)]
    matches_won: Option<u32>,
    #[serde(default)]
    matches_drawn: Option<u32>,
    #[serde(default)]
    matches_lost: Option<u32>,
    #[serde(default)]
    points_for: Option<i32>,
    #[serde(default)]
    points_against: Option<i32>,
    #[serde(default)]
    total: Option<i32>,
}

pub fn get_league_details<T: Transport>(fetcher: &Fetcher<T>, league_id: u32) -> Result<LeagueDetails> {
    let raw = fetcher.fetch(Endpoint::LeagueDetails, &EndpointParams::league(league_id))?;
    parse_league_details(raw)
}

pub fn parse_league_details(raw: Value) -> Result<LeagueDetails> {
    let raw: RawLeagueDetails =
        serde_json::from_value(raw).map_err(|err| DraftError::malformed("league details", err))?;

    let league_entry_names: HashMap<u32, String> = raw
        .league_entries
        .iter()
        .map(|e| (e.id, e.entry_name.clone()))
        .collect();

    let mut entries = Vec::with_capacity(raw.league_entries.len());
    for e in raw.league_entries {
        entries.push(LeagueEntry {
            id: e.entry_id,
            joined_time: parse_joined_date(&e.joined_time)?,
            entry_name: e.entry_name,
            player_first_name: e.player_first_name,
            player_last_name: e.player_last_name,
            short_name: e.short_name,
            waiver_pick: e.waiver_pick,
        });
    }

    let standings = raw
        .standings
        .into_iter()
        .map(|s| Standing {
            entry_name: league_entry_names.get(&s.league_entry).cloned(),
            league_entry: s.league_entry,
            rank: s.rank,
            matches_won: s.matches_won,
            matches_drawn: s.matches_drawn,
            matches_lost: s.matches_lost,
            points_for: s.points_for,
            points_against: s.points_against,
            total: s.total,
        })
        .collect();

    Ok(LeagueDetails {
        league: raw.league,
        entries,
        matches: raw.matches,
        standings,
        league_entry_names,
    })
}

pub fn parse_joined_date(raw: &str) -> Result<NaiveDate> {
    let prefix = raw
        .get(..10)
        .ok_or_else(|| DraftError::malformed("joined_time", format!("{raw:?} is too short")))?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
        .map_err(|err| DraftError::malformed("joined_time", format!("{raw:?}: {err}")))
}
