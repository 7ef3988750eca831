//! Output models used for printing and JSON serialization.

use serde::Serialize;

use crate::cli::types::{BoundaryMode, MatchId, SeasonKey};
use crate::football::types::PlayerScore;

/// A match left out of the computation under the skip policy.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedMatch {
    pub match_id: MatchId,
    /// Rendered error.
    pub error: String,
}

/// Ranked plus-minus table for one team and season.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonReport {
    pub team: String,
    pub season: SeasonKey,
    pub boundary: BoundaryMode,
    /// Matches whose goals were applied.
    pub matches_counted: usize,
    /// Most recent match, held back from scoring.
    pub excluded_match: Option<MatchId>,
    pub skipped: Vec<SkippedMatch>,
    /// Descending by score.
    pub players: Vec<PlayerScore>,
}

impl SeasonReport {
    /// One line per player: rank, name, signed score.
    pub fn to_lines(&self) -> Vec<String> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{:>3}. {:<30} {:+}", i + 1, s.player, s.score))
            .collect()
    }
}
