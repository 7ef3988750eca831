//! Turning raw scraped match records into [`MatchFacts`].

use chrono::NaiveDate;
use tracing::debug;

use crate::cli::types::parse_calendar_date;
use crate::error::{PlusMinusError, Result};
use crate::football::goals::{extract_goal_minutes, orient, Side, TeamIdentity};
use crate::football::lineup::{parse_lineup, LineupError};
use crate::football::types::{MatchFacts, RawMatchRecord};

/// Whether a fixture listing entry is one of the tracked team's matches.
///
/// Listings use short names inconsistently, so this is a substring test on
/// either team slot.
pub fn involves_team(record: &RawMatchRecord, team_name_short: &str) -> bool {
    let short = team_name_short.trim();
    !short.is_empty() && (record.home_team.contains(short) || record.away_team.contains(short))
}

pub fn parse_record_date(record: &RawMatchRecord) -> Result<NaiveDate> {
    parse_calendar_date(&record.date).ok_or_else(|| PlusMinusError::InvalidDate {
        match_id: record.match_id.clone(),
        raw: record.date.clone(),
    })
}

/// Build the facts of one played match: presences from the line-up and goal
/// minutes oriented to the tracked team.
pub fn build_match_facts(
    record: &RawMatchRecord,
    date: NaiveDate,
    team: &TeamIdentity,
) -> Result<MatchFacts> {
    let side = team
        .side_in(&record.home_team, &record.away_team)
        .ok_or_else(|| PlusMinusError::OrientationAmbiguous {
            match_id: record.match_id.clone(),
            team: team.name().to_string(),
            home: record.home_team.clone(),
            away: record.away_team.clone(),
        })?;

    let lineup_error = |source: LineupError| PlusMinusError::Lineup {
        match_id: record.match_id.clone(),
        source,
    };
    let raw_lineup = record
        .lineup
        .as_deref()
        .ok_or_else(|| lineup_error(LineupError::Missing))?;
    let player_presences = parse_lineup(raw_lineup, team.name()).map_err(lineup_error)?;

    let (our_goal_minutes, opponent_goal_minutes) = orient(
        extract_goal_minutes(&record.home_goals),
        extract_goal_minutes(&record.away_goals),
        side == Side::Home,
    );

    debug!(
        "Match {} on {}: {} presences, {}:{} goals",
        record.match_id,
        date,
        player_presences.len(),
        our_goal_minutes.len(),
        opponent_goal_minutes.len()
    );

    Ok(MatchFacts {
        match_id: record.match_id.clone(),
        date,
        our_goal_minutes,
        opponent_goal_minutes,
        player_presences,
    })
}
