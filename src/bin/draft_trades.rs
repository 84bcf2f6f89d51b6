use std::collections::HashMap;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use draft_report::config::Config;
use draft_report::fetcher::Fetcher;
use draft_report::league::get_league_details;
use draft_report::trades::get_trades;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let cfg = Config::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .with_writer(std::io::stderr)
        .init();

    let league_id = parse_league_arg().context("usage: draft_trades --league <id>")?;
    let fetcher = Fetcher::from_config(&cfg)?;

    let details = get_league_details(&fetcher, league_id)?;
    let names: HashMap<u32, &str> = details
        .entries
        .iter()
        .map(|e| (e.id, e.entry_name.as_str()))
        .collect();
    let trades = get_trades(&fetcher, league_id)?;

    println!("Trades in league {league_id}: {}", trades.len());
    for trade in &trades {
        let from = names.get(&trade.offered_entry).copied().unwrap_or("?");
        let to = names.get(&trade.received_entry).copied().unwrap_or("?");
        println!(
            " - #{} {from} -> {to} [{}] {} item(s)",
            trade.id,
            trade.state.as_deref().unwrap_or("-"),
            trade.tradeitem_set.len()
        );
        for item in &trade.tradeitem_set {
            println!("     in {} / out {}", item.element_in, item.element_out);
        }
    }

    Ok(())
}

fn parse_league_arg() -> Option<u32> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix("--league=") {
            return value.trim().parse().ok();
        }
        if arg == "--league" {
            return args.get(idx + 1)?.trim().parse().ok();
        }
    }
    None
}
