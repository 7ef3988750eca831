//! ID types for matches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for a match identifier as supplied by the match source.
///
/// The identifier is opaque (on the source site it is the match page path) and
/// is only used to attribute per-match errors and to label the excluded match.
///
/// # Examples
///
/// ```rust
/// use plus_minus::MatchId;
///
/// let id = MatchId::new("/zapas/4506");
/// assert_eq!(id.as_str(), "/zapas/4506");
/// assert_eq!(id.to_string(), "/zapas/4506");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub String);

impl MatchId {
    /// Create a new MatchId from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MatchId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
