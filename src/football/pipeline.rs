//! Season pipeline: raw records in, ranked plus-minus out.

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::cli::types::{BoundaryMode, FailurePolicy, SeasonKey};
use crate::core::output::{SeasonReport, SkippedMatch};
use crate::error::Result;
use crate::football::compute::ScoreTable;
use crate::football::facts::{build_match_facts, involves_team, parse_record_date};
use crate::football::goals::TeamIdentity;
use crate::football::season::{select_season, split_latest};
use crate::football::types::{MatchFacts, RawMatchRecord};

/// Knobs for [`compute_season_plus_minus`].
#[derive(Debug, Clone, Copy)]
pub struct SeasonOptions {
    pub boundary: BoundaryMode,
    pub on_error: FailurePolicy,
    /// Hold the most recent match back from scoring.
    pub exclude_latest: bool,
}

impl Default for SeasonOptions {
    fn default() -> Self {
        Self {
            boundary: BoundaryMode::default(),
            on_error: FailurePolicy::default(),
            exclude_latest: true,
        }
    }
}

/// Apply the failure policy to one per-match result.
fn keep_or_skip<T>(
    result: Result<T>,
    policy: FailurePolicy,
    skipped: &mut Vec<SkippedMatch>,
) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) => match (policy, err.match_id().cloned()) {
            (FailurePolicy::Skip, Some(match_id)) => {
                warn!("Skipping match {}: {}", match_id, err);
                skipped.push(SkippedMatch {
                    match_id,
                    error: err.to_string(),
                });
                Ok(None)
            }
            _ => Err(err),
        },
    }
}

/// Compute the current season's plus-minus table for `team_name`.
///
/// Records are the whole competition's fixture list in listing order; the
/// team's matches are picked out by `team_name_short`. Matches dated `today`
/// or later are dropped before their line-ups are looked at.
pub fn compute_season_plus_minus(
    team_name: &str,
    team_name_short: &str,
    records: Vec<RawMatchRecord>,
    today: NaiveDate,
    options: SeasonOptions,
) -> Result<SeasonReport> {
    let team = TeamIdentity::new(team_name);
    let mut skipped = Vec::new();

    let mut dated = Vec::new();
    for record in records
        .into_iter()
        .filter(|r| involves_team(r, team_name_short))
    {
        if let Some(date) = keep_or_skip(parse_record_date(&record), options.on_error, &mut skipped)? {
            dated.push((date, record));
        }
    }
    let listed = dated.len();

    let season = select_season(dated, today, |(date, _)| *date);
    info!(
        "{} of {} listed matches of {} are played in season {}",
        season.len(),
        listed,
        team.name(),
        SeasonKey::for_date(today)
    );

    let built: Vec<Result<MatchFacts>> = season
        .par_iter()
        .map(|(date, record)| build_match_facts(record, *date, &team))
        .collect();

    let mut facts = Vec::with_capacity(built.len());
    for result in built {
        if let Some(f) = keep_or_skip(result, options.on_error, &mut skipped)? {
            facts.push(f);
        }
    }

    let (scored, latest) = if options.exclude_latest {
        split_latest(&facts)
    } else {
        (&facts[..], None)
    };
    if let Some(latest) = latest {
        info!("Holding back most recent match {} ({})", latest.match_id, latest.date);
    }

    let table = ScoreTable::seeded(&facts).with_matches(scored, options.boundary);

    Ok(SeasonReport {
        team: team.name().to_string(),
        season: SeasonKey::for_date(today),
        boundary: options.boundary,
        matches_counted: scored.len(),
        excluded_match: latest.map(|m| m.match_id.clone()),
        skipped,
        players: table.ranked(),
    })
}

