//! Core utilities for the plus-minus CLI
//!
//! - `source`: where raw match records come from
//! - `output`: serializable report shapes

pub mod output;
pub mod source;

pub use output::{SeasonReport, SkippedMatch};
pub use source::{JsonFileSource, MatchSource};
