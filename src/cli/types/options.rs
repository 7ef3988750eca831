//! Pipeline options selectable from the command line.

use crate::error::{PlusMinusError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How goal minutes are compared against a presence interval `[in, out)`.
///
/// - **Exclusive** (default): a goal counts when `in < minute < out`, so a
///   player coming on or going off in the scoring minute is not credited.
/// - **Inclusive**: a goal counts when `in <= minute <= out`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    #[default]
    Exclusive,
    Inclusive,
}

impl BoundaryMode {
    /// Whether a goal in `minute` is attributed to an interval `[in_minute, out_minute)`.
    pub fn contains(&self, in_minute: u32, out_minute: u32, minute: u32) -> bool {
        match self {
            BoundaryMode::Exclusive => in_minute < minute && minute < out_minute,
            BoundaryMode::Inclusive => in_minute <= minute && minute <= out_minute,
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoundaryMode::Exclusive => "exclusive",
            BoundaryMode::Inclusive => "inclusive",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for BoundaryMode {
    type Err = PlusMinusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "exclusive" | "strict" => Ok(BoundaryMode::Exclusive),
            "inclusive" => Ok(BoundaryMode::Inclusive),
            _ => Err(PlusMinusError::InvalidBoundary {
                value: s.to_string(),
            }),
        }
    }
}

/// What the season computation does when one match cannot be processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop and return the first per-match error.
    #[default]
    Abort,
    /// Leave the failed match out entirely (neither seeded nor scored) and report it.
    Skip,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailurePolicy::Abort => "abort",
            FailurePolicy::Skip => "skip",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for FailurePolicy {
    type Err = PlusMinusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "skip" => Ok(FailurePolicy::Skip),
            _ => Err(PlusMinusError::InvalidPolicy {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_boundary_ignores_edges() {
        let mode = BoundaryMode::Exclusive;
        assert!(!mode.contains(10, 500, 10));
        assert!(mode.contains(10, 500, 11));
        assert!(!mode.contains(0, 37, 37));
        assert!(mode.contains(0, 37, 36));
    }

    #[test]
    fn test_inclusive_boundary_counts_edges() {
        let mode = BoundaryMode::Inclusive;
        assert!(mode.contains(10, 500, 10));
        assert!(mode.contains(0, 37, 37));
        assert!(!mode.contains(0, 37, 38));
    }

    #[test]
    fn test_boundary_from_str() {
        assert_eq!("exclusive".parse::<BoundaryMode>().unwrap(), BoundaryMode::Exclusive);
        assert_eq!("INCLUSIVE".parse::<BoundaryMode>().unwrap(), BoundaryMode::Inclusive);
        assert!(matches!(
            "sideways".parse::<BoundaryMode>(),
            Err(PlusMinusError::InvalidBoundary { .. })
        ));
    }

    #[test]
    fn test_failure_policy_from_str_and_display() {
        assert_eq!("skip".parse::<FailurePolicy>().unwrap(), FailurePolicy::Skip);
        assert_eq!(FailurePolicy::default(), FailurePolicy::Abort);
        assert_eq!(FailurePolicy::Skip.to_string(), "skip");
        assert!("retry".parse::<FailurePolicy>().is_err());
    }
}
