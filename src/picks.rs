use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::endpoints::{Endpoint, EndpointParams};
use crate::error::{DraftError, Result};
use crate::fetcher::Fetcher;
use crate::http_client::Transport;
use crate::league::TeamRef;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub element: u32,
    pub position: u32,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
    #[serde(default = "default_multiplier")]
    pub multiplier: u32,
    #[serde(default)]
    pub team_name: String,
}

fn default_multiplier() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    pub element_in: u32,
    pub element_out: u32,
    #[serde(default)]
    pub event: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct EntryEvent {
    picks: Vec<Pick>,
    #[serde(default)]
    subs: Vec<Substitution>,
}

pub fn get_team_picks<T: Transport>(
    fetcher: &Fetcher<T>,
    team: &TeamRef,
    gw: u32,
    filter_subs: bool,
) -> Result<Vec<Pick>> {
    let raw = fetcher.fetch(Endpoint::EntryEvent, &EndpointParams::team(team.id).with_gw(gw))?;
    let (picks, subs) = parse_entry_event(raw, &team.entry_name)?;
    if !filter_subs {
        return Ok(picks);
    }
    let before = picks.len();
    let picks = remove_substituted(picks, &subs);
    debug!(
        team = %team.entry_name,
        gw,
        removed = before - picks.len(),
        "filtered substituted-out picks"
    );
    Ok(picks)
}

pub fn parse_entry_event(raw: Value, team_name: &str) -> Result<(Vec<Pick>, Vec<Substitution>)> {
    let event: EntryEvent =
        serde_json::from_value(raw).map_err(|err| DraftError::malformed("entry event", err))?;
    let picks = event
        .picks
        .into_iter()
        .map(|mut p| {
            p.team_name = team_name.to_string();
            p
        })
        .collect();
    Ok((picks, event.subs))
}

pub fn remove_substituted(picks: Vec<Pick>, subs: &[Substitution]) -> Vec<Pick> {
    let out: HashSet<u32> = subs.iter().map(|s| s.element_out).collect();
    picks
        .into_iter()
        .filter(|p| !out.contains(&p.element))
        .collect()
}

pub fn get_team_picks_for_all_teams<T: Transport>(
    fetcher: &Fetcher<T>,
    teams: &[TeamRef],
    gw: u32,
    filter_subs: bool,
) -> Result<Vec<Pick>> {
    let per_team: Vec<Vec<Pick>> = if fetcher.fetch_parallelism() <= 1 || teams.len() <= 1 {
        teams
            .iter()
            .map(|team| get_team_picks(fetcher, team, gw, filter_subs))
            .collect::<Result<_>>()?
    } else {
        with_fetch_pool(fetcher.fetch_parallelism(), || {
            teams
                .par_iter()
                .map(|team| get_team_picks(fetcher, team, gw, filter_subs))
                .collect::<Result<Vec<_>>>()
        })?
    };
    Ok(per_team.into_iter().flatten().collect())
}

fn with_fetch_pool<R>(threads: usize, action: impl FnOnce() -> R + Send) -> R
where
    R: Send,
{
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(action),
        Err(err) => {
            warn!("fetch pool unavailable, running sequentially: {err}");
            action()
        }
    }
}
