use std::collections::HashMap;

use serde::Serialize;

use crate::error::{DraftError, Result};
use crate::fetcher::Fetcher;
use crate::http_client::Transport;
use crate::league::{Match, get_league_details};

pub const DRAW: &str = "draw";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture {
    pub event: u32,
    pub team_h_name: String,
    pub team_a_name: String,
    pub team_h_pts: i32,
    pub team_a_pts: i32,
    pub winner: String,
}

impl Fixture {
    pub fn is_draw(&self) -> bool {
        self.winner == DRAW
    }
}

pub fn decide_winner(home: &str, away: &str, home_pts: i32, away_pts: i32) -> String {
    if home_pts > away_pts {
        home.to_string()
    } else if away_pts > home_pts {
        away.to_string()
    } else {
        DRAW.to_string()
    }
}

pub fn get_league_fixtures<T: Transport>(
    fetcher: &Fetcher<T>,
    league_id: u32,
    gw: u32,
) -> Result<Vec<Fixture>> {
    let details = get_league_details(fetcher, league_id)?;
    build_fixtures(&details.matches, &details.league_entry_names, gw)
}

pub fn build_fixtures(
    matches: &[Match],
    entry_names: &HashMap<u32, String>,
    gw: u32,
) -> Result<Vec<Fixture>> {
    let name_of = |league_entry: u32| {
        entry_names.get(&league_entry).ok_or_else(|| {
            DraftError::MalformedResponse(format!("match references unknown league entry {league_entry}"))
        })
    };

    let mut out = Vec::new();
    for m in matches {
        let home = name_of(m.league_entry_1)?;
        let away = name_of(m.league_entry_2)?;
        if m.event > gw {
            continue;
        }
        out.push(Fixture {
            event: m.event,
            winner: decide_winner(home, away, m.league_entry_1_points, m.league_entry_2_points),
            team_h_name: home.clone(),
            team_a_name: away.clone(),
            team_h_pts: m.league_entry_1_points,
            team_a_pts: m.league_entry_2_points,
        });
    }
    Ok(out)
}
