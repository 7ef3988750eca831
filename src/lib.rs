//! Football plus-minus library
//!
//! Credits every goal of a season to the players who were on the pitch when it
//! was scored: +1 for the team's goals, -1 for the opponent's.
//!
//! ## Pipeline
//!
//! - **Line-ups**: free-text line-ups such as `Novák, Svoboda (10. Král)` become
//!   presence intervals (`Novák 0-end`, `Svoboda 0-10`, `Král 10-end`)
//! - **Goals**: home/away goal minutes are oriented to the tracked team
//! - **Season**: only matches already played in the current July-June season
//!   count, and the most recent one is held back
//! - **Aggregation**: goal minutes strictly inside a presence interval count
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use plus_minus::{compute_season_plus_minus, MatchId, RawMatchRecord, SeasonOptions};
//!
//! let record = |id: &str, date: &str, lineup: &str| RawMatchRecord {
//!     match_id: MatchId::new(id),
//!     date: date.to_string(),
//!     home_team: "FC Slušovice".to_string(),
//!     away_team: "SK Lukov".to_string(),
//!     home_goals: "Goal 5' Goal 15'".to_string(),
//!     away_goals: String::new(),
//!     lineup: Some(lineup.to_string()),
//! };
//! let records = vec![
//!     record("m1", "2024-08-17", "Novak, Svoboda (10. Kral)"),
//!     record("m2", "2024-08-24", "Novak"),
//! ];
//!
//! let today = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
//! let report = compute_season_plus_minus(
//!     "FC Slušovice",
//!     "Slušovice",
//!     records,
//!     today,
//!     SeasonOptions::default(),
//! )?;
//! assert_eq!(report.players[0].player, "Novak");
//! assert_eq!(report.players[0].score, 2);
//! # Ok::<(), plus_minus::PlusMinusError>(())
//! ```
//!
//! ## Environment Configuration
//!
//! Set the team to avoid passing it in every command:
//! ```bash
//! export PLUS_MINUS_TEAM="FC Slušovice"
//! export PLUS_MINUS_TEAM_SHORT="Slušovice"
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod football;

// Re-export commonly used types
pub use cli::types::{BoundaryMode, FailurePolicy, MatchId, SeasonKey};
pub use error::{PlusMinusError, Result};
pub use football::compute::{aggregate, ScoreTable};
pub use football::goals::{orient, TeamIdentity};
pub use football::lineup::{parse_lineup, LineupError};
pub use football::pipeline::{compute_season_plus_minus, SeasonOptions};
pub use football::season::in_current_season;
pub use football::types::{MatchFacts, PlayerPresence, PlayerScore, RawMatchRecord, MAX_MINUTE};

pub const TEAM_ENV_VAR: &str = "PLUS_MINUS_TEAM";
pub const TEAM_SHORT_ENV_VAR: &str = "PLUS_MINUS_TEAM_SHORT";
