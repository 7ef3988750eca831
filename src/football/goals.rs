//! Goal-minute extraction and home/away orientation.

use regex::Regex;
use std::sync::LazyLock;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Which slot of the fixture a team occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// The tracked team, compared by its printed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamIdentity {
    name: String,
}

impl TeamIdentity {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is(&self, printed: &str) -> bool {
        self.name == printed.trim()
    }

    /// Locate this team in a fixture. `None` when it is in neither slot, or in both.
    pub fn side_in(&self, home: &str, away: &str) -> Option<Side> {
        match (self.is(home), self.is(away)) {
            (true, false) => Some(Side::Home),
            (false, true) => Some(Side::Away),
            _ => None,
        }
    }
}

/// Every digit run in `raw`, in order of appearance.
///
/// Goal lists are free text such as `"Novák 5', Král 15'"`; anything that is
/// not a digit run (or overflows a minute) is ignored, so text without digits
/// means no goals.
pub fn extract_goal_minutes(raw: &str) -> Vec<u32> {
    DIGITS
        .find_iter(raw)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Split home/away goal minutes into `(ours, opponents)`.
pub fn orient(home: Vec<u32>, away: Vec<u32>, our_team_is_home: bool) -> (Vec<u32>, Vec<u32>) {
    if our_team_is_home {
        (home, away)
    } else {
        (away, home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_goal_minutes() {
        assert_eq!(extract_goal_minutes("Goal 5' Goal 15'"), vec![5, 15]);
        assert_eq!(extract_goal_minutes("Novák 23., Novák 23."), vec![23, 23]);
        assert!(extract_goal_minutes("").is_empty());
        assert!(extract_goal_minutes("vlastní gól").is_empty());
    }

    #[test]
    fn test_extract_skips_overflowing_digit_runs() {
        assert_eq!(extract_goal_minutes("99999999999999 12"), vec![12]);
    }

    #[test]
    fn test_orient_is_a_swap() {
        let home = vec![5, 15];
        let away = vec![80];
        assert_eq!(
            orient(home.clone(), away.clone(), true),
            (home.clone(), away.clone())
        );
        assert_eq!(orient(home.clone(), away.clone(), false), (away, home));
    }

    #[test]
    fn test_orient_keeps_empty_lists() {
        assert_eq!(orient(vec![], vec![3], true), (vec![], vec![3]));
    }

    #[test]
    fn test_team_identity_side() {
        let team = TeamIdentity::new("FC Slušovice");
        assert_eq!(team.side_in("FC Slušovice", "SK Lukov"), Some(Side::Home));
        assert_eq!(team.side_in("SK Lukov", " FC Slušovice "), Some(Side::Away));
        assert_eq!(team.side_in("SK Lukov", "FK Vizovice"), None);
        assert_eq!(team.side_in("Slušovice", "SK Lukov"), None);
        assert_eq!(team.side_in("FC Slušovice", "FC Slušovice"), None);
    }
}
