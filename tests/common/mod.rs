#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;

use draft_report::endpoints::EndpointTable;
use draft_report::error::{DraftError, Result};
use draft_report::fetcher::Fetcher;
use draft_report::http_client::Transport;

pub const DRAFT_BASE: &str = "http://draft.test/api";
pub const FPL_BASE: &str = "http://fpl.test/api";

pub fn read_fixture(name: &str) -> Value {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    let raw = fs::read_to_string(path).expect("fixture file should be readable");
    serde_json::from_str(&raw).expect("fixture should be valid json")
}

/// Serves canned JSON by URL; anything else is a 404.
#[derive(Default)]
pub struct StaticTransport {
    routes: HashMap<String, Value>,
    calls: Mutex<Vec<String>>,
}

impl StaticTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(format!("{DRAFT_BASE}{path}"), body);
        self
    }

    pub fn route_url(mut self, url: &str, body: Value) -> Self {
        self.routes.insert(url.to_string(), body);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl Transport for StaticTransport {
    fn get_json(&self, url: &str) -> Result<Value> {
        self.calls.lock().expect("calls lock").push(url.to_string());
        self.routes.get(url).cloned().ok_or(DraftError::HttpStatus {
            url: url.to_string(),
            status: 404,
        })
    }
}

pub fn fetcher(transport: StaticTransport) -> Fetcher<StaticTransport> {
    Fetcher::new(EndpointTable::new(DRAFT_BASE, FPL_BASE), transport)
}

/// League 77 at gameweek 1, served from `tests/fixtures`.
pub fn league_77_gw1() -> StaticTransport {
    StaticTransport::new()
        .route("/league/77/details", read_fixture("league_details.json"))
        .route("/bootstrap-static", read_fixture("bootstrap_static.json"))
        .route("/event/1/live", read_fixture("event_live_1.json"))
        .route("/entry/1001/event/1", read_fixture("entry_1001_event_1.json"))
        .route("/entry/1002/event/1", read_fixture("entry_1002_event_1.json"))
        .route("/draft/league/77/trades", read_fixture("trades.json"))
}
