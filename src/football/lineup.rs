//! Line-up notation parsing.
//!
//! The source prints a team's line-up as comma-separated names, with formation
//! lines separated by ` - ` and at most one substitution per slot written as
//! `Starter (minute. Replacement)`:
//!
//! ```text
//! FC Slušovice: Novák - Svoboda, Král (62. Dvořák), Malý [-]
//! ```
//!
//! Grammar, after normalization:
//!
//! ```text
//! lineup := token ("," token)*
//! token  := name | name "(" minute ". " name ")"
//! ```

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::football::types::{PlayerPresence, MAX_MINUTE};


/// Empty bracket markers the site prints for unused slots, e.g. `[-]` or `[]`.
static EMPTY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\s*-?\s*\]").expect("valid regex"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineupError {
    #[error("no line-up printed for the team")]
    Missing,

    #[error("line-up contains no players")]
    Empty,

    #[error("unbalanced parenthesis in '{token}'")]
    UnbalancedParenthesis { token: String },

    #[error("chained substitution in '{token}' is not supported")]
    ChainedSubstitution { token: String },

    #[error("invalid substitution minute '{minute}' in '{token}'")]
    InvalidMinute { token: String, minute: String },

    #[error("missing player name in '{token}'")]
    MissingName { token: String },

    #[error("substitution in '{token}' has no '. ' between minute and name")]
    MissingSeparator { token: String },

    #[error("unexpected text after substitution in '{token}'")]
    TrailingText { token: String },
}

/// One comma-separated slot of a line-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineupToken {
    /// Played the whole match.
    Player(String),
    /// `starter` went off in `minute` and `replacement` came on.
    Substitution {
        starter: String,
        minute: u32,
        replacement: String,
    },
}

impl LineupToken {
    /// Presence intervals this slot produces, starter first.
    pub fn presences(&self) -> Vec<PlayerPresence> {
        match self {
            LineupToken::Player(name) => vec![PlayerPresence::full_match(name.as_str())],
            LineupToken::Substitution {
                starter,
                minute,
                replacement,
            } => vec![
                PlayerPresence {
                    player: starter.clone(),
                    in_minute: 0,
                    out_minute: *minute,
                },
                PlayerPresence {
                    player: replacement.clone(),
                    in_minute: *minute,
                    out_minute: MAX_MINUTE,
                },
            ],
        }
    }
}

/// Collapse whitespace, turn formation breaks into commas and drop the team
/// marker and empty bracket markers.
pub fn normalize_lineup_text(raw: &str, team_marker: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut text = EMPTY_MARKER.replace_all(&collapsed, "").replace(" - ", " , ");

    let marker = team_marker.split_whitespace().collect::<Vec<_>>().join(" ");
    if !marker.is_empty() {
        text = text.replace(&marker, "");
    }

    // The team name is printed as a "Team:" heading.
    text.trim().trim_start_matches(':').trim().to_string()
}

/// Parse a single slot.
pub fn parse_token(token: &str) -> Result<LineupToken, LineupError> {
    let token = token.trim();
    let opens = token.matches('(').count();
    let closes = token.matches(')').count();

    if opens == 0 && closes == 0 {
        if token.is_empty() {
            return Err(LineupError::MissingName {
                token: token.to_string(),
            });
        }
        return Ok(LineupToken::Player(token.to_string()));
    }
    if opens > 1 {
        return Err(LineupError::ChainedSubstitution {
            token: token.to_string(),
        });
    }

    let (Some(open), Some(close)) = (token.find('('), token.find(')')) else {
        return Err(LineupError::UnbalancedParenthesis {
            token: token.to_string(),
        });
    };
    if closes != 1 || close < open {
        return Err(LineupError::UnbalancedParenthesis {
            token: token.to_string(),
        });
    }

    let starter = token[..open].trim();
    if starter.is_empty() {
        return Err(LineupError::MissingName {
            token: token.to_string(),
        });
    }
    if !token[close + 1..].trim().is_empty() {
        return Err(LineupError::TrailingText {
            token: token.to_string(),
        });
    }

    let inner = token[open + 1..close].trim();
    let Some((minute_text, replacement)) = inner.split_once(". ") else {
        return Err(LineupError::MissingSeparator {
            token: token.to_string(),
        });
    };

    let minute = minute_text
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|m| (1..MAX_MINUTE).contains(m))
        .ok_or_else(|| LineupError::InvalidMinute {
            token: token.to_string(),
            minute: minute_text.trim().to_string(),
        })?;

    let replacement = replacement.trim();
    if replacement.is_empty() {
        return Err(LineupError::MissingName {
            token: token.to_string(),
        });
    }

    Ok(LineupToken::Substitution {
        starter: starter.to_string(),
        minute,
        replacement: replacement.to_string(),
    })
}

/// Split a normalized line-up into slots. Empty slots left behind by removed
/// markers are skipped.
pub fn tokenize(normalized: &str) -> Result<Vec<LineupToken>, LineupError> {
    let tokens = normalized
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(parse_token)
        .collect::<Result<Vec<_>, _>>()?;

    if tokens.is_empty() {
        return Err(LineupError::Empty);
    }
    Ok(tokens)
}

/// Parse a raw line-up block into presence intervals, in printed order.
pub fn parse_lineup(raw: &str, team_marker: &str) -> Result<Vec<PlayerPresence>, LineupError> {
    let normalized = normalize_lineup_text(raw, team_marker);
    let tokens = tokenize(&normalized)?;
    Ok(tokens.iter().flat_map(LineupToken::presences).collect())
}
