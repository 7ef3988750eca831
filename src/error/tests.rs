//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod plus_minus_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = PlusMinusError::from(json_error);

        match error {
            PlusMinusError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = PlusMinusError::from(io_error);

        match error {
            PlusMinusError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_missing_team_error() {
        let error = PlusMinusError::MissingTeam {
            env_var: "PLUS_MINUS_TEAM".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Team name not provided"));
        assert!(error_string.contains("PLUS_MINUS_TEAM"));
        assert!(error.match_id().is_none());
    }

    #[test]
    fn test_lineup_error_carries_match_id_and_source() {
        let error = PlusMinusError::Lineup {
            match_id: MatchId::new("/zapas/42"),
            source: LineupError::Empty,
        };

        assert_eq!(error.match_id(), Some(&MatchId::new("/zapas/42")));
        let error_string = error.to_string();
        assert!(error_string.contains("/zapas/42"));

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_orientation_ambiguous_error() {
        let error = PlusMinusError::OrientationAmbiguous {
            match_id: MatchId::new("m7"),
            team: "FC Slušovice".to_string(),
            home: "FK Vizovice".to_string(),
            away: "SK Lukov".to_string(),
        };

        assert_eq!(error.match_id().map(|id| id.as_str()), Some("m7"));
        let error_string = error.to_string();
        assert!(error_string.contains("FK Vizovice"));
        assert!(error_string.contains("SK Lukov"));
        assert!(error_string.contains("FC Slušovice"));
    }

    #[test]
    fn test_invalid_date_error() {
        let error = PlusMinusError::InvalidDate {
            match_id: MatchId::new("m1"),
            raw: "next sunday".to_string(),
        };

        assert_eq!(error.to_string(), "Match m1: unrecognised date 'next sunday'");
        assert!(error.match_id().is_some());
    }

    #[test]
    fn test_invalid_boundary_error() {
        let error = PlusMinusError::InvalidBoundary {
            value: "sideways".to_string(),
        };
        assert!(error.to_string().contains("sideways"));
        assert!(error.match_id().is_none());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(PlusMinusError::InvalidPolicy {
                value: "retry".to_string(),
            })
        }

        match test_function().unwrap_err() {
            PlusMinusError::InvalidPolicy { value } => assert_eq!(value, "retry"),
            _ => panic!("Expected InvalidPolicy error"),
        }
    }
}
