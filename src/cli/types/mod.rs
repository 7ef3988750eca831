//! Type-safe wrappers and enums for match data and pipeline options.

pub mod ids;
pub mod options;
pub mod time;

pub use ids::MatchId;
pub use options::{BoundaryMode, FailurePolicy};
pub use time::{parse_calendar_date, SeasonKey};
