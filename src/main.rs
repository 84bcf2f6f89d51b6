use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tracing::error;
use tracing_subscriber::EnvFilter;

use draft_report::config::Config;
use draft_report::export::{export_report_xlsx, report_to_json};
use draft_report::fetcher::Fetcher;
use draft_report::game::get_game_status;
use draft_report::report::weekly_report_data;

struct Args {
    league_id: u32,
    gw: Option<u32>,
    keep_subs: bool,
    xlsx: Option<PathBuf>,
    json: bool,
}

fn main() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cfg) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cfg: Config) -> Result<()> {
    let args = parse_args(std::env::args().skip(1).collect())?;
    let fetcher = Fetcher::from_config(&cfg)?;

    let gw = match args.gw {
        Some(gw) => gw,
        None => get_game_status(&fetcher)?
            .report_gameweek()
            .context("game status has no current or next gameweek; pass --gw")?,
    };

    let report = weekly_report_data(&fetcher, args.league_id, gw, !args.keep_subs)
        .with_context(|| format!("weekly report for league {} gw {gw}", args.league_id))?;

    if let Some(path) = args.xlsx.as_deref() {
        let summary = export_report_xlsx(path, &report)?;
        println!("Workbook written: {}", path.display());
        println!(
            "Rows: {} team stats, {} fixtures, {} teams",
            summary.team_stat_rows, summary.fixtures, summary.teams
        );
    }

    if args.json {
        println!("{}", report_to_json(&report)?);
    } else if args.xlsx.is_none() {
        println!("Gameweek {gw}");
        for (rank, tp) in report.team_points().iter().enumerate() {
            println!("{:>3}. {:<28} {:>4}", rank + 1, tp.team_name, tp.points);
        }
        println!();
        for f in &report.fixtures {
            if f.event != gw {
                continue;
            }
            println!(
                "{} {} - {} {}  ({})",
                f.team_h_name, f.team_h_pts, f.team_a_pts, f.team_a_name, f.winner
            );
        }
    }

    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<Args> {
    let mut league_id = None;
    let mut gw = None;
    let mut keep_subs = false;
    let mut xlsx = None;
    let mut json = false;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
            None => (arg.clone(), None),
        };
        match flag.as_str() {
            "--keep-subs" => keep_subs = true,
            "--json" => json = true,
            "--league" | "--gw" | "--xlsx" => {
                let value = inline
                    .or_else(|| iter.next())
                    .filter(|v| !v.trim().is_empty())
                    .ok_or_else(|| anyhow!("{flag} needs a value"))?;
                match flag.as_str() {
                    "--league" => {
                        league_id = Some(value.trim().parse::<u32>().context("--league must be a number")?)
                    }
                    "--gw" => gw = Some(value.trim().parse::<u32>().context("--gw must be a number")?),
                    _ => xlsx = Some(PathBuf::from(value)),
                }
            }
            other => return Err(anyhow!("unknown argument {other}")),
        }
    }

    Ok(Args {
        league_id: league_id.context(
            "usage: draft_report --league <id> [--gw <n>] [--keep-subs] [--xlsx <path>] [--json]",
        )?,
        gw,
        keep_subs,
        xlsx,
        json,
    })
}
