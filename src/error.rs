//! Error types for the plus-minus CLI

use thiserror::Error;

use crate::cli::types::MatchId;
use crate::football::lineup::LineupError;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, PlusMinusError>;

#[derive(Error, Debug)]
pub enum PlusMinusError {
    #[error("Match {match_id}: line-up could not be parsed: {source}")]
    Lineup {
        match_id: MatchId,
        #[source]
        source: LineupError,
    },

    #[error("Match {match_id}: neither '{home}' nor '{away}' is '{team}', cannot tell home from away")]
    OrientationAmbiguous {
        match_id: MatchId,
        team: String,
        home: String,
        away: String,
    },

    #[error("Match {match_id}: unrecognised date '{raw}'")]
    InvalidDate { match_id: MatchId, raw: String },

    #[error("Team name not provided and {env_var} environment variable not set")]
    MissingTeam { env_var: String },

    #[error("Invalid date argument: {raw}")]
    InvalidDateArgument { raw: String },

    #[error("Invalid boundary mode: {value} (expected 'exclusive' or 'inclusive')")]
    InvalidBoundary { value: String },

    #[error("Invalid failure policy: {value} (expected 'abort' or 'skip')")]
    InvalidPolicy { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlusMinusError {
    /// The match this error belongs to, for errors raised while processing one match.
    pub fn match_id(&self) -> Option<&MatchId> {
        match self {
            PlusMinusError::Lineup { match_id, .. }
            | PlusMinusError::OrientationAmbiguous { match_id, .. }
            | PlusMinusError::InvalidDate { match_id, .. } => Some(match_id),
            _ => None,
        }
    }
}
