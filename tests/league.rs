mod common;

use chrono::NaiveDate;
use serde_json::json;

use draft_report::endpoints::{Endpoint, EndpointParams};
use draft_report::error::DraftError;
use draft_report::fixtures::get_league_fixtures;
use draft_report::game::{get_data, get_game_status};
use draft_report::league::{TeamRef, get_league_details};
use draft_report::picks::get_team_picks;
use draft_report::trades::{get_trades, get_transactions};

use common::{FPL_BASE, StaticTransport, fetcher, league_77_gw1};

#[test]
fn tied_match_reports_draw_end_to_end() {
    let transport = StaticTransport::new().route(
        "/league/5/details",
        json!({
            "league_entries": [
                {"id": 10, "entry_id": 501, "entry_name": "Alpha", "joined_time": "2023-08-10T12:00:00Z"},
                {"id": 20, "entry_id": 502, "entry_name": "Beta", "joined_time": "2023-08-10T12:00:00Z"}
            ],
            "matches": [
                {"event": 1, "league_entry_1": 10, "league_entry_2": 20,
                 "league_entry_1_points": 50, "league_entry_2_points": 50}
            ]
        }),
    );
    let fixtures = get_league_fixtures(&fetcher(transport), 5, 1).unwrap();
    assert_eq!(fixtures.len(), 1);

    let out = serde_json::to_value(&fixtures[0]).unwrap();
    assert_eq!(
        out,
        json!({
            "event": 1,
            "team_h_name": "Alpha",
            "team_a_name": "Beta",
            "team_h_pts": 50,
            "team_a_pts": 50,
            "winner": "draw"
        })
    );
}

#[test]
fn fixtures_stop_at_gameweek() {
    let fixtures = get_league_fixtures(&fetcher(league_77_gw1()), 77, 2).unwrap();
    let events: Vec<u32> = fixtures.iter().map(|f| f.event).collect();
    assert_eq!(events, vec![1, 2]);
    assert!(fixtures[1].is_draw());
    assert_eq!(fixtures[1].team_h_name, "Beta");
}

#[test]
fn unplayed_fixture_is_a_draw() {
    let fixtures = get_league_fixtures(&fetcher(league_77_gw1()), 77, 4).unwrap();
    assert_eq!(fixtures.len(), 4);
    assert!(fixtures[2].is_draw());
    assert!(fixtures[3].is_draw());
}

#[test]
fn league_details_parse_entries_and_standings() {
    let details = get_league_details(&fetcher(league_77_gw1()), 77).unwrap();
    assert_eq!(details.league.as_ref().map(|l| l.name.as_str()), Some("Office Draft"));
    assert_eq!(details.entries[0].id, 1001);
    assert_eq!(
        details.entries[1].joined_time,
        NaiveDate::from_ymd_opt(2023, 8, 11).unwrap()
    );
    assert_eq!(details.standings.len(), 2);
    assert_eq!(details.standings[0].entry_name.as_deref(), Some("Alpha"));
    assert_eq!(details.matches.len(), 4);
}

#[test]
fn bad_joined_time_is_fatal() {
    let transport = StaticTransport::new().route(
        "/league/9/details",
        json!({
            "league_entries": [
                {"id": 1, "entry_id": 2, "entry_name": "X", "joined_time": "last tuesday"}
            ],
            "matches": []
        }),
    );
    let err = get_league_details(&fetcher(transport), 9).unwrap_err();
    assert!(matches!(err, DraftError::MalformedResponse(_)));
}

#[test]
fn team_picks_honour_filter_flag() {
    let f = fetcher(league_77_gw1());
    let team = TeamRef {
        id: 1001,
        entry_name: "Alpha".into(),
    };
    let filtered = get_team_picks(&f, &team, 1, true).unwrap();
    let all = get_team_picks(&f, &team, 1, false).unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(filtered.len(), 3);
    assert!(filtered.iter().all(|p| p.element != 2));
    assert!(all.iter().all(|p| p.team_name == "Alpha"));
}

#[test]
fn unbound_placeholder_never_reaches_transport() {
    let f = fetcher(StaticTransport::new());
    let err = f
        .fetch(Endpoint::EntryEvent, &EndpointParams::gameweek(3))
        .unwrap_err();
    assert!(matches!(
        err,
        DraftError::MissingParameter { placeholder: "Team_ID", .. }
    ));
    assert!(f.transport().calls().is_empty());
}

#[test]
fn trades_are_fetched_but_transactions_are_not_implemented() {
    let f = fetcher(league_77_gw1());
    let trades = get_trades(&f, 77).unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].tradeitem_set[0].element_in, 4);

    let err = get_transactions(&f, &[], 1).unwrap_err();
    assert!(matches!(err, DraftError::NotImplemented(_)));
}

#[test]
fn global_endpoints_use_their_own_bases() {
    let transport = StaticTransport::new()
        .route("/game", json!({"current_event": 12, "current_event_finished": true, "next_event": 13}))
        .route_url(&format!("{FPL_BASE}/bootstrap-static/"), json!({"events": [], "elements": []}));
    let f = fetcher(transport);

    assert_eq!(get_game_status(&f).unwrap().report_gameweek(), Some(12));
    assert!(get_data(&f).unwrap().get("events").is_some());
}
