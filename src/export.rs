use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::fixtures::Fixture;
use crate::report::{TeamStatsRow, WeeklyReport};

pub struct ExportSummary {
    pub team_stat_rows: usize,
    pub fixtures: usize,
    pub teams: usize,
}

pub fn export_report_xlsx(path: &Path, report: &WeeklyReport) -> Result<ExportSummary> {
    let team_rows = team_stats_rows(&report.team_stats);
    let fixture_rows = fixtures_rows(&report.fixtures);

    let mut points_rows = vec![vec!["Team".to_string(), "Points".to_string()]];
    let points = report.team_points();
    for tp in &points {
        points_rows.push(vec![tp.team_name.clone(), tp.points.to_string()]);
    }

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("TeamStats")?;
        write_rows(sheet, &team_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Fixtures")?;
        write_rows(sheet, &fixture_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(format!("GW{} Points", report.gameweek))?;
        write_rows(sheet, &points_rows)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;

    Ok(ExportSummary {
        team_stat_rows: team_rows.len().saturating_sub(1),
        fixtures: fixture_rows.len().saturating_sub(1),
        teams: points.len(),
    })
}

pub fn report_to_json(report: &WeeklyReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize weekly report")
}

pub fn team_stats_rows(rows: &[TeamStatsRow]) -> Vec<Vec<String>> {
    let mut out = vec![
        [
            "Team",
            "Element",
            "Position",
            "Web Name",
            "First Name",
            "Second Name",
            "Element Type",
            "Code",
            "Minutes",
            "Goals",
            "Assists",
            "Clean Sheets",
            "Goals Conceded",
            "Own Goals",
            "Penalties Saved",
            "Penalties Missed",
            "Yellow Cards",
            "Red Cards",
            "Saves",
            "Bonus",
            "BPS",
            "Total Points",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>(),
    ];

    for row in rows {
        let mut cells = vec![
            row.team_name.clone(),
            row.element.to_string(),
            row.position.to_string(),
        ];
        match &row.player {
            Some(p) => cells.extend([
                p.web_name.clone(),
                p.first_name.clone(),
                p.second_name.clone(),
                p.element_type.to_string(),
                p.code.to_string(),
            ]),
            None => cells.extend(std::iter::repeat_n(String::new(), 5)),
        }
        let s = row.stats.as_ref();
        for value in [
            s.and_then(|s| s.minutes),
            s.and_then(|s| s.goals_scored),
            s.and_then(|s| s.assists),
            s.and_then(|s| s.clean_sheets),
            s.and_then(|s| s.goals_conceded),
            s.and_then(|s| s.own_goals),
            s.and_then(|s| s.penalties_saved),
            s.and_then(|s| s.penalties_missed),
            s.and_then(|s| s.yellow_cards),
            s.and_then(|s| s.red_cards),
            s.and_then(|s| s.saves),
            s.and_then(|s| s.bonus),
            s.and_then(|s| s.bps),
            s.and_then(|s| s.total_points),
        ] {
            cells.push(opt_cell(value));
        }
        out.push(cells);
    }
    out
}

pub fn fixtures_rows(fixtures: &[Fixture]) -> Vec<Vec<String>> {
    let mut out = vec![vec![
        "Event".to_string(),
        "Home".to_string(),
        "Away".to_string(),
        "Home Pts".to_string(),
        "Away Pts".to_string(),
        "Winner".to_string(),
    ]];
    for f in fixtures {
        out.push(vec![
            f.event.to_string(),
            f.team_h_name.clone(),
            f.team_a_name.clone(),
            f.team_h_pts.to_string(),
            f.team_a_pts.to_string(),
            f.winner.clone(),
        ]);
    }
    out
}

fn opt_cell(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
