//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use plus_minus::{
    cli::{Commands, PlusMinus},
    commands::{
        lineup::handle_lineup,
        season::{handle_season, SeasonParams},
    },
};
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout carries only results.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default = if verbose {
        "plus_minus=debug,warn"
    } else {
        "plus_minus=info,warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {e}"))
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = PlusMinus::parse();
    init_tracing(app.verbose)?;

    match app.command {
        Commands::Season {
            input,
            team,
            team_short,
            today,
            boundary,
            on_error,
            include_latest,
            json,
        } => handle_season(SeasonParams {
            input,
            team,
            team_short,
            today,
            boundary,
            on_error,
            include_latest,
            as_json: json,
        })?,

        Commands::Lineup { text, team, json } => handle_lineup(&text, team.as_deref(), json)?,
    }

    Ok(())
}
