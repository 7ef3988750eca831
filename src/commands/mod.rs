//! Command implementations for the plus-minus CLI

pub mod lineup;
pub mod season;

use crate::{error::PlusMinusError, Result, TEAM_ENV_VAR, TEAM_SHORT_ENV_VAR};


/// Pick the team name from the flag, falling back to an environment value.
fn pick_team(flag: Option<String>, env_value: Option<String>) -> Option<String> {
    flag.or(env_value)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Resolve the full team name from `--team` or `PLUS_MINUS_TEAM`.
pub fn resolve_team(team: Option<String>) -> Result<String> {
    pick_team(team, std::env::var(TEAM_ENV_VAR).ok()).ok_or_else(|| PlusMinusError::MissingTeam {
        env_var: TEAM_ENV_VAR.to_string(),
    })
}

/// Resolve the listing short name from `--team-short` or `PLUS_MINUS_TEAM_SHORT`,
/// defaulting to the full team name.
pub fn resolve_team_short(team_short: Option<String>, team: &str) -> String {
    pick_team(team_short, std::env::var(TEAM_SHORT_ENV_VAR).ok())
        .unwrap_or_else(|| team.to_string())
}
