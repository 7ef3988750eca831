//! Season plus-minus command implementation

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::{
    cli::types::{BoundaryMode, FailurePolicy},
    core::{JsonFileSource, MatchSource, SeasonReport},
    football::pipeline::{compute_season_plus_minus, SeasonOptions},
    Result,
};

use super::{resolve_team, resolve_team_short};

/// Parameters for the season command
#[derive(Debug)]
pub struct SeasonParams {
    pub input: PathBuf,
    pub team: Option<String>,
    pub team_short: Option<String>,
    pub today: Option<NaiveDate>,
    pub boundary: BoundaryMode,
    pub on_error: FailurePolicy,
    pub include_latest: bool,
    pub as_json: bool,
}

/// Render the report as pretty JSON or a text table.
pub fn render_season(report: &SeasonReport, as_json: bool) -> Result<String> {
    if as_json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let mut out = vec![format!(
        "{} - season {} ({} matches, {} boundaries)",
        report.team, report.season, report.matches_counted, report.boundary
    )];
    if let Some(id) = &report.excluded_match {
        out.push(format!("Most recent match {} not counted", id));
    }
    for skipped in &report.skipped {
        out.push(format!("Skipped {}: {}", skipped.match_id, skipped.error));
    }
    out.extend(report.to_lines());
    Ok(out.join("\n"))
}

/// Handle the season command
pub fn handle_season(params: SeasonParams) -> Result<()> {
    let team = resolve_team(params.team)?;
    let team_short = resolve_team_short(params.team_short, &team);
    let today = params.today.unwrap_or_else(|| Local::now().date_naive());

    let source = JsonFileSource::new(params.input);
    info!("Loading match records from {}", source.path().display());
    let records = source.matches()?;

    let options = SeasonOptions {
        boundary: params.boundary,
        on_error: params.on_error,
        exclude_latest: !params.include_latest,
    };
    let report = compute_season_plus_minus(&team, &team_short, records, today, options)?;

    println!("{}", render_season(&report, params.as_json)?); // tarpaulin::skip
    Ok(())
}
