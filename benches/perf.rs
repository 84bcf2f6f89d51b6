use std::collections::HashMap;

use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use std::hint::black_box;

use draft_report::fixtures::build_fixtures;
use draft_report::league::Match;
use draft_report::live_stats::parse_weekly_player_stats;
use draft_report::picks::{Pick, Substitution, remove_substituted};
use draft_report::players::parse_players;
use draft_report::report::build_team_stats;

const PLAYERS: u32 = 700;
const TEAMS: u32 = 12;

fn bootstrap_json() -> Value {
    let elements: Vec<Value> = (1..=PLAYERS)
        .map(|id| {
            json!({
                "id": id, "code": 100_000 + id, "web_name": format!("P{id}"),
                "first_name": "First", "second_name": format!("Second{id}"),
                "element_type": (id % 4) + 1, "team": id % 20
            })
        })
        .collect();
    json!({ "elements": elements })
}

fn live_json() -> Value {
    let elements: serde_json::Map<String, Value> = (1..=PLAYERS)
        .map(|id| {
            (
                id.to_string(),
                json!({"stats": {
                    "minutes": id % 91, "goals_scored": id % 3, "assists": id % 2,
                    "bonus": id % 4, "bps": id % 40, "total_points": id % 15,
                    "influence": "10.0", "creativity": "4.2", "threat": "8.0", "ict_index": "2.2"
                }}),
            )
        })
        .collect();
    json!({ "elements": elements })
}

fn league_picks() -> Vec<Pick> {
    (0..TEAMS)
        .flat_map(|team| {
            (1..=15).map(move |pos| Pick {
                element: team * 15 + pos,
                position: pos,
                is_captain: false,
                is_vice_captain: false,
                multiplier: 1,
                team_name: format!("Team {team}"),
            })
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let bootstrap = bootstrap_json();
    let live = live_json();
    c.bench_function("parse_players", |b| {
        b.iter(|| black_box(parse_players(bootstrap.clone()).unwrap().len()))
    });
    c.bench_function("parse_weekly_player_stats", |b| {
        b.iter(|| black_box(parse_weekly_player_stats(live.clone()).unwrap().len()))
    });
}

fn bench_report_join(c: &mut Criterion) {
    let players = parse_players(bootstrap_json()).unwrap();
    let stats = parse_weekly_player_stats(live_json()).unwrap();
    let picks = league_picks();
    let subs: Vec<Substitution> = (0..TEAMS)
        .map(|team| Substitution {
            element_in: team * 15 + 12,
            element_out: team * 15 + 3,
            event: Some(1),
        })
        .collect();

    c.bench_function("build_team_stats", |b| {
        b.iter(|| {
            let kept = remove_substituted(picks.clone(), black_box(&subs));
            black_box(build_team_stats(kept, &stats, &players).len())
        })
    });
}

fn bench_fixtures(c: &mut Criterion) {
    let names: HashMap<u32, String> = (1..=TEAMS).map(|id| (id, format!("Team {id}"))).collect();
    let matches: Vec<Match> = (1..=38)
        .flat_map(|event| {
            (1..=TEAMS / 2).map(move |i| Match {
                event,
                league_entry_1: i,
                league_entry_1_points: ((event * i) % 70) as i32,
                league_entry_2: TEAMS + 1 - i,
                league_entry_2_points: ((event + i) % 70) as i32,
                finished: event <= 20,
                started: event <= 20,
                winning_league_entry: None,
                winning_method: None,
            })
        })
        .collect();

    c.bench_function("build_fixtures", |b| {
        b.iter(|| black_box(build_fixtures(&matches, &names, black_box(20)).unwrap().len()))
    });
}

criterion_group!(benches, bench_parse, bench_report_join, bench_fixtures);
criterion_main!(benches);
