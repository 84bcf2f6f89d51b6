use std::collections::HashMap;

use crate::config::Config;
use crate::error::{DraftError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    BootstrapDynamic,
    Game,
    BootstrapStatic,
    LeagueDetails,
    LeagueElementStatus,
    DraftLeagueTrades,
    DraftEntryTransactions,
    PlEventStatus,
    EventLive,
    EntryPublic,
    EntryMyTeam,
    DraftChoices,
    Watchlist,
    EntryEvent,
    FplBootstrapStatic,
}

impl Endpoint {
    pub const ALL: [Endpoint; 15] = [
        Endpoint::BootstrapDynamic,
        Endpoint::Game,
        Endpoint::BootstrapStatic,
        Endpoint::LeagueDetails,
        Endpoint::LeagueElementStatus,
        Endpoint::DraftLeagueTrades,
        Endpoint::DraftEntryTransactions,
        Endpoint::PlEventStatus,
        Endpoint::EventLive,
        Endpoint::EntryPublic,
        Endpoint::EntryMyTeam,
        Endpoint::DraftChoices,
        Endpoint::Watchlist,
        Endpoint::EntryEvent,
        Endpoint::FplBootstrapStatic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Endpoint::BootstrapDynamic => "bootstrap_dynamic",
            Endpoint::Game => "game",
            Endpoint::BootstrapStatic => "bootstrap_static",
            Endpoint::LeagueDetails => "league_details",
            Endpoint::LeagueElementStatus => "league_element_status",
            Endpoint::DraftLeagueTrades => "draft_league_trades",
            Endpoint::DraftEntryTransactions => "draft_entry_transactions",
            Endpoint::PlEventStatus => "pl_event_status",
            Endpoint::EventLive => "event_live",
            Endpoint::EntryPublic => "entry_public",
            Endpoint::EntryMyTeam => "entry_my_team",
            Endpoint::DraftChoices => "draft_choices",
            Endpoint::Watchlist => "watchlist",
            Endpoint::EntryEvent => "entry_event",
            Endpoint::FplBootstrapStatic => "fpl_bootstrap_static",
        }
    }

    // Path below the API root. Only the global FPL bootstrap lives on the main site.
    fn path(self) -> &'static str {
        match self {
            Endpoint::BootstrapDynamic => "/bootstrap-dynamic",
            Endpoint::Game => "/game",
            Endpoint::BootstrapStatic => "/bootstrap-static",
            Endpoint::LeagueDetails => "/league/{League_ID}/details",
            Endpoint::LeagueElementStatus => "/league/{League_ID}/element-status",
            Endpoint::DraftLeagueTrades => "/draft/league/{League_ID}/trades",
            Endpoint::DraftEntryTransactions => "/draft/entry/{Team_ID}/transactions",
            Endpoint::PlEventStatus => "/pl/event-status",
            Endpoint::EventLive => "/event/{GW}/live",
            Endpoint::EntryPublic => "/entry/{Team_ID}/public",
            Endpoint::EntryMyTeam => "/entry/{Team_ID}/my-team",
            Endpoint::DraftChoices => "/draft/{League_ID}/choices",
            Endpoint::Watchlist => "/watchlist/{Team_ID}",
            Endpoint::EntryEvent => "/entry/{Team_ID}/event/{GW}",
            Endpoint::FplBootstrapStatic => "/bootstrap-static/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    LeagueId,
    TeamId,
    Gw,
}

impl Placeholder {
    pub fn token(self) -> &'static str {
        match self {
            Placeholder::LeagueId => "League_ID",
            Placeholder::TeamId => "Team_ID",
            Placeholder::Gw => "GW",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "League_ID" => Some(Placeholder::LeagueId),
            "Team_ID" => Some(Placeholder::TeamId),
            "GW" => Some(Placeholder::Gw),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndpointParams {
    pub league_id: Option<u32>,
    pub team_id: Option<u32>,
    pub gw: Option<u32>,
}

impl EndpointParams {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn league(league_id: u32) -> Self {
        Self {
            league_id: Some(league_id),
            ..Self::default()
        }
    }

    pub fn team(team_id: u32) -> Self {
        Self {
            team_id: Some(team_id),
            ..Self::default()
        }
    }

    pub fn gameweek(gw: u32) -> Self {
        Self {
            gw: Some(gw),
            ..Self::default()
        }
    }

    pub fn with_gw(mut self, gw: u32) -> Self {
        self.gw = Some(gw);
        self
    }

    fn value(&self, placeholder: Placeholder) -> Option<u32> {
        match placeholder {
            Placeholder::LeagueId => self.league_id,
            Placeholder::TeamId => self.team_id,
            Placeholder::Gw => self.gw,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Template {
    endpoint: Endpoint,
    pattern: String,
    required: Vec<Placeholder>,
}

impl Template {
    fn new(endpoint: Endpoint, pattern: String) -> Self {
        let required = placeholders_in(&pattern);
        Self {
            endpoint,
            pattern,
            required,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn required(&self) -> &[Placeholder] {
        &self.required
    }

    pub fn bind(&self, params: &EndpointParams) -> Result<String> {
        let mut url = self.pattern.clone();
        for placeholder in &self.required {
            let value = params
                .value(*placeholder)
                .ok_or(DraftError::MissingParameter {
                    endpoint: self.endpoint.name(),
                    placeholder: placeholder.token(),
                })?;
            url = url.replace(&format!("{{{}}}", placeholder.token()), &value.to_string());
        }
        Ok(url)
    }
}

fn placeholders_in(pattern: &str) -> Vec<Placeholder> {
    let mut out = Vec::new();
    let mut rest = pattern;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start + 1..].find('}') else {
            break;
        };
        if let Some(p) = Placeholder::from_token(&rest[start + 1..start + 1 + len]) {
            if !out.contains(&p) {
                out.push(p);
            }
        }
        rest = &rest[start + 1 + len + 1..];
    }
    out
}

#[derive(Debug, Clone)]
pub struct EndpointTable {
    templates: HashMap<Endpoint, Template>,
}

impl EndpointTable {
    pub fn new(draft_api_base: &str, fpl_api_base: &str) -> Self {
        let draft = draft_api_base.trim_end_matches('/');
        let fpl = fpl_api_base.trim_end_matches('/');
        let templates = Endpoint::ALL
            .iter()
            .map(|&endpoint| {
                let base = if endpoint == Endpoint::FplBootstrapStatic {
                    fpl
                } else {
                    draft
                };
                (endpoint, Template::new(endpoint, format!("{base}{}", endpoint.path())))
            })
            .collect();
        Self { templates }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.draft_api_base, &cfg.fpl_api_base)
    }

    pub fn template(&self, endpoint: Endpoint) -> &Template {
        // Every variant is inserted by `new`.
        &self.templates[&endpoint]
    }

    pub fn url(&self, endpoint: Endpoint, params: &EndpointParams) -> Result<String> {
        self.template(endpoint).bind(params)
    }
}

impl Default for EndpointTable {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
