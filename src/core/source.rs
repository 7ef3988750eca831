//! Match record sources.
//!
//! Fetching and scraping match pages happens outside this crate; a source only
//! has to hand over [`RawMatchRecord`]s in fixture-listing order.

use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{football::types::RawMatchRecord, Result};

/// Supplier of raw match records, in the order the fixture list prints them.
pub trait MatchSource {
    fn matches(&self) -> Result<Vec<RawMatchRecord>>;
}

/// Reads a JSON array of records from a file, or standard input for `-`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_to_string(&self) -> Result<String> {
        let mut s = String::new();
        if self.path.as_os_str() == "-" {
            std::io::stdin().read_to_string(&mut s)?;
        } else {
            fs::File::open(&self.path)?.read_to_string(&mut s)?;
        }
        Ok(s)
    }
}

impl MatchSource for JsonFileSource {
    fn matches(&self) -> Result<Vec<RawMatchRecord>> {
        let records: Vec<RawMatchRecord> = serde_json::from_str(&self.read_to_string()?)?;
        debug!("Read {} match records from {}", records.len(), self.path.display());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlusMinusError;
    use std::io::Write;

    #[test]
    fn test_json_file_source_reads_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"match_id": "/zapas/1", "date": "2024-08-17",
                "home_team": "FC Slušovice", "away_team": "SK Lukov",
                "home_goals": "5' 15'", "lineup": "Novák"}}]"#
        )
        .unwrap();

        let records = JsonFileSource::new(file.path()).matches().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].match_id.as_str(), "/zapas/1");
        assert_eq!(records[0].away_goals, "");
        assert_eq!(records[0].lineup.as_deref(), Some("Novák"));
    }

    #[test]
    fn test_json_file_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("missing.json"));
        assert!(matches!(source.matches(), Err(PlusMinusError::Io(_))));
    }

    #[test]
    fn test_json_file_source_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let source = JsonFileSource::new(file.path());
        assert!(matches!(source.matches(), Err(PlusMinusError::Json(_))));
    }
}
