use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::fixtures::{Fixture, get_league_fixtures};
use crate::http_client::Transport;
use crate::join::left_join;
use crate::league::get_league_details;
use crate::live_stats::{PlayerStat, get_weekly_player_stats};
use crate::picks::{Pick, get_team_picks_for_all_teams};
use crate::players::{Player, get_all_players};

pub const DROPPED_STAT_FIELDS: [&str; 4] = ["influence", "creativity", "threat", "ict_index"];

/// One (team, pick) row. `stats`/`player` are `None` when the join found no counterpart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStatsRow {
    pub team_name: String,
    pub element: u32,
    pub position: u32,
    pub stats: Option<PlayerStat>,
    pub player: Option<Player>,
}

impl TeamStatsRow {
    pub fn points(&self) -> i64 {
        self.stats
            .as_ref()
            .and_then(|s| s.total_points)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamPoints {
    pub team_name: String,
    pub points: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyReport {
    pub gameweek: u32,
    pub team_stats: Vec<TeamStatsRow>,
    pub fixtures: Vec<Fixture>,
}

impl WeeklyReport {
    pub fn into_parts(self) -> (Vec<TeamStatsRow>, Vec<Fixture>) {
        (self.team_stats, self.fixtures)
    }

    pub fn team_points(&self) -> Vec<TeamPoints> {
        let mut totals: HashMap<&str, i64> = HashMap::new();
        for row in &self.team_stats {
            *totals.entry(row.team_name.as_str()).or_default() += row.points();
        }
        let mut out: Vec<TeamPoints> = totals
            .into_iter()
            .map(|(team_name, points)| TeamPoints {
                team_name: team_name.to_string(),
                points,
            })
            .collect();
        out.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.team_name.cmp(&b.team_name)));
        out
    }
}

pub fn weekly_report_data<T: Transport>(
    fetcher: &Fetcher<T>,
    league_id: u32,
    gw: u32,
    filter_subs: bool,
) -> Result<WeeklyReport> {
    let details = get_league_details(fetcher, league_id)?;
    let teams = details.team_refs();

    let players = get_all_players(fetcher)?;
    let picks = get_team_picks_for_all_teams(fetcher, &teams, gw, filter_subs)?;
    let stats = get_weekly_player_stats(fetcher, gw)?;
    let team_stats = build_team_stats(picks, &stats, &players);

    let fixtures = get_league_fixtures(fetcher, league_id, gw)?;

    info!(
        league_id,
        gw,
        teams = teams.len(),
        rows = team_stats.len(),
        fixtures = fixtures.len(),
        "weekly report assembled"
    );
    Ok(WeeklyReport {
        gameweek: gw,
        team_stats,
        fixtures,
    })
}

pub fn build_team_stats(picks: Vec<Pick>, stats: &[PlayerStat], players: &[Player]) -> Vec<TeamStatsRow> {
    let with_stats = left_join(picks, stats, |p| p.element, |s| s.element);
    let with_players = left_join(with_stats, players, |(p, _)| p.element, |pl| pl.element);

    with_players
        .into_iter()
        .map(|((pick, stats), player)| TeamStatsRow {
            team_name: pick.team_name,
            element: pick.element,
            position: pick.position,
            stats: stats.map(strip_engagement_metrics),
            player,
        })
        .collect()
}

fn strip_engagement_metrics(mut stat: PlayerStat) -> PlayerStat {
    for field in DROPPED_STAT_FIELDS {
        stat.other.remove(field);
    }
    stat
}
