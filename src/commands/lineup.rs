//! Line-up inspection command implementation

use crate::{
    cli::types::MatchId,
    error::PlusMinusError,
    football::{lineup::parse_lineup, types::{PlayerPresence, MAX_MINUTE}},
    Result,
};

/// Parse one line-up block, attributing failures to a placeholder match id.
pub fn lineup_presences(text: &str, team: Option<&str>) -> Result<Vec<PlayerPresence>> {
    parse_lineup(text, team.unwrap_or_default()).map_err(|source| PlusMinusError::Lineup {
        match_id: MatchId::new("<command line>"),
        source,
    })
}

/// Text form of a presence, e.g. `Král  0' - 62'` or `Dvořák  62' - end`.
pub fn describe_presence(p: &PlayerPresence) -> String {
    let out = if p.out_minute >= MAX_MINUTE {
        "end".to_string()
    } else {
        format!("{}'", p.out_minute)
    };
    format!("{:<30} {:>3}' - {}", p.player, p.in_minute, out)
}

/// Handle the lineup command
pub fn handle_lineup(text: &str, team: Option<&str>, as_json: bool) -> Result<()> {
    let presences = lineup_presences(text, team)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&presences)?); // tarpaulin::skip
    } else {
        for p in &presences {
            println!("{}", describe_presence(p)); // tarpaulin::skip
        }
    }
    Ok(())
}
