//! CSV format handling for grading rows and standings output
//!
//! This module centralizes all CSV format concerns of the batch grader:
//! - `PlacementCsvRecord` structure for deserialization
//! - Conversion from CSV rows to `PlacementRecord`
//! - Standings output serialization
//!
//! Input columns are `action,player,text,payable`. Drop rows (`payable`,
//! `recoverable`) need both `text` and `payable`; `check` rows ignore them.
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{
    Bucket, HstError, PlacementAction, PlacementRecord, PlayerId, PlayerStanding,
    TransactionRecord,
};
use serde::Deserialize;
use std::io::Write;

/// CSV row structure for deserialization
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PlacementCsvRecord {
    pub action: String,
    pub player: PlayerId,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub payable: Option<String>,
}

/// Parse a payable flag
///
/// Accepts `true`/`false` in any case.
pub fn parse_flag(value: &str) -> Result<bool, HstError> {
    match value.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(HstError::invalid_flag(value)),
    }
}

/// Convert a PlacementCsvRecord to a PlacementRecord
///
/// - Parses the action (case-insensitive)
/// - For drops, requires a non-empty text and a valid payable flag
/// - For checks, ignores any text or flag given
pub fn convert_csv_record(csv_record: PlacementCsvRecord) -> Result<PlacementRecord, HstError> {
    let action = match csv_record.action.to_lowercase().as_str() {
        "payable" => PlacementAction::Drop(Bucket::Payable),
        "recoverable" => PlacementAction::Drop(Bucket::Recoverable),
        "check" => PlacementAction::Check,
        _ => return Err(HstError::invalid_action(&csv_record.action)),
    };

    let record = match action {
        PlacementAction::Drop(bucket) => {
            let text = csv_record
                .text
                .filter(|t| !t.trim().is_empty())
                .ok_or_else(|| HstError::missing_record(bucket.as_str(), csv_record.player))?;
            let flag = csv_record
                .payable
                .filter(|f| !f.trim().is_empty())
                .ok_or_else(|| HstError::missing_record(bucket.as_str(), csv_record.player))?;

            Some(TransactionRecord::new(text.trim(), parse_flag(&flag)?))
        }
        PlacementAction::Check => None,
    };

    Ok(PlacementRecord {
        action,
        player: csv_record.player,
        record,
    })
}

/// Write player standings to CSV format
///
/// Columns: `player,games_played,correct_total`, sorted by player ID.
pub fn write_standings_csv(
    standings: &[PlayerStanding],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["player", "games_played", "correct_total"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    let mut sorted = standings.to_vec();
    sorted.sort_by_key(|standing| standing.player);

    for standing in sorted {
        writer
            .write_record(&[
                standing.player.to_string(),
                standing.state.games_played.to_string(),
                standing.state.correct_total.to_string(),
            ])
            .map_err(|e| format!("Failed to write standing record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScoreState;
    use rstest::rstest;

    fn csv_record(
        action: &str,
        player: PlayerId,
        text: Option<&str>,
        payable: Option<&str>,
    ) -> PlacementCsvRecord {
        PlacementCsvRecord {
            action: action.to_string(),
            player,
            text: text.map(|s| s.to_string()),
            payable: payable.map(|s| s.to_string()),
        }
    }

    #[rstest]
    #[case("payable", Bucket::Payable)]
    #[case("recoverable", Bucket::Recoverable)]
    #[case("PAYABLE", Bucket::Payable)] // case insensitive
    #[case("Recoverable", Bucket::Recoverable)]
    fn test_convert_drop_rows(#[case] action: &str, #[case] expected: Bucket) {
        let result = convert_csv_record(csv_record(
            action,
            3,
            Some("Sold goods for $500 + HST"),
            Some("true"),
        ));

        let row = result.unwrap();
        assert_eq!(row.action, PlacementAction::Drop(expected));
        assert_eq!(row.player, 3);
        assert_eq!(
            row.record,
            Some(TransactionRecord::new("Sold goods for $500 + HST", true))
        );
    }

    #[rstest]
    #[case::bare(None, None)]
    #[case::with_extra_fields(Some("ignored"), Some("maybe"))]
    fn test_convert_check_rows(#[case] text: Option<&str>, #[case] payable: Option<&str>) {
        let row = convert_csv_record(csv_record("check", 1, text, payable)).unwrap();
        assert_eq!(row.action, PlacementAction::Check);
        assert_eq!(row.record, None);
    }

    #[rstest]
    #[case::invalid_action("toss", Some("x"), Some("true"), "Invalid action")]
    #[case::missing_text("payable", None, Some("true"), "requires a text")]
    #[case::blank_text("payable", Some("   "), Some("true"), "requires a text")]
    #[case::missing_flag("recoverable", Some("x"), None, "requires a text and a payable flag")]
    #[case::invalid_flag("recoverable", Some("x"), Some("maybe"), "Invalid payable flag")]
    fn test_convert_errors(
        #[case] action: &str,
        #[case] text: Option<&str>,
        #[case] payable: Option<&str>,
        #[case] expected_error: &str,
    ) {
        let result = convert_csv_record(csv_record(action, 1, text, payable));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(expected_error));
    }

    #[rstest]
    #[case("true", true)]
    #[case("FALSE", false)]
    #[case("  True ", true)]
    fn test_parse_flag(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(parse_flag(raw), Ok(expected));
    }

    #[rstest]
    #[case::single_player(
        vec![PlayerStanding { player: 1, state: ScoreState::new(2, 7) }],
        "player,games_played,correct_total\n1,2,7\n"
    )]
    #[case::sorted_by_player(
        vec![
            PlayerStanding { player: 3, state: ScoreState::new(1, 4) },
            PlayerStanding { player: 1, state: ScoreState::new(1, 0) },
        ],
        "player,games_played,correct_total\n1,1,0\n3,1,4\n"
    )]
    #[case::empty(vec![], "player,games_played,correct_total\n")]
    fn test_write_standings_csv(
        #[case] standings: Vec<PlayerStanding>,
        #[case] expected_output: &str,
    ) {
        let mut output = Vec::new();
        let result = write_standings_csv(&standings, &mut output);
        assert!(result.is_ok());

        assert_eq!(String::from_utf8(output).unwrap(), expected_output);
    }
}
