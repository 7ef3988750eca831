//! CLI argument definitions and parsing.

pub mod types;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{BoundaryMode, FailurePolicy};

fn parse_date_arg(s: &str) -> std::result::Result<NaiveDate, String> {
    types::parse_calendar_date(s).ok_or_else(|| format!("not a date: {s} (use YYYY-MM-DD or D. M. YYYY)"))
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rank the team's players by plus-minus for the season in progress.
    ///
    /// Reads the competition's match records (JSON array), keeps the team's
    /// played matches of the current season and credits every goal to the
    /// players on the pitch. The most recent match is not counted.
    Season {
        /// Match records file, or `-` for standard input.
        #[clap(long, short, default_value = "-")]
        input: PathBuf,

        /// Team name as printed on match pages (or set `PLUS_MINUS_TEAM` env var).
        #[clap(long, short)]
        team: Option<String>,

        /// Short name used to find the team in the fixture list
        /// (or set `PLUS_MINUS_TEAM_SHORT`; defaults to the team name).
        #[clap(long)]
        team_short: Option<String>,

        /// Treat this date as today (default: local date).
        #[clap(long, value_parser = parse_date_arg)]
        today: Option<NaiveDate>,

        /// Goal minute on a substitution minute: exclusive | inclusive.
        #[clap(long, default_value_t = BoundaryMode::default())]
        boundary: BoundaryMode,

        /// On a match that cannot be processed: abort | skip.
        #[clap(long = "on-error", default_value_t = FailurePolicy::default())]
        on_error: FailurePolicy,

        /// Count the most recent match as well.
        #[clap(long)]
        include_latest: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Parse one line-up block and print each player's minutes.
    Lineup {
        /// Line-up text, e.g. "Novák, Svoboda (10. Král)".
        text: String,

        /// Team name to strip from the block.
        #[clap(long, short)]
        team: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "plus-minus", about = "Football plus-minus from line-ups and goal minutes")]
pub struct PlusMinus {
    /// Log debug details to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
