use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cli::types::MatchId;

/// Out-minute for players still on the pitch at the final whistle.
pub const MAX_MINUTE: u32 = 500;

/// One contiguous stretch a player spent on the pitch, `[in_minute, out_minute)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerPresence {
    pub player: String,
    pub in_minute: u32,
    pub out_minute: u32,
}

impl PlayerPresence {
    /// A player who started and finished the match.
    pub fn full_match(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            in_minute: 0,
            out_minute: MAX_MINUTE,
        }
    }
}

/// Raw facts about one match as supplied by the page scraper.
///
/// Goal texts are free text with the goal minutes embedded as digits; `lineup`
/// is the tracked team's part of the printed line-ups, still carrying the
/// team's own name and the site's empty `[-]` markers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawMatchRecord {
    pub match_id: MatchId,
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub home_goals: String,
    #[serde(default)]
    pub away_goals: String,
    #[serde(default)]
    pub lineup: Option<String>,
}

/// One processed match of the tracked team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchFacts {
    pub match_id: MatchId,
    pub date: NaiveDate,
    pub our_goal_minutes: Vec<u32>,
    pub opponent_goal_minutes: Vec<u32>,
    pub player_presences: Vec<PlayerPresence>,
}

/// Final plus-minus of one player, as printed or serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerScore {
    pub player: String,
    pub score: i32,
}
