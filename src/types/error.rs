//! Error types for the HST tutor
//!
//! The quiz and the match scorer never reject input: every choice and every
//! dropped record is classified rather than refused. Errors only appear at the
//! edges of the system:
//!
//! # Error Categories
//!
//! - **I/O Errors**: score store or grading input cannot be read or written
//! - **CSV Parsing Errors**: malformed rows in a grading input or score store
//! - **Grading Row Errors**: unknown actions, drops without a record, bad flags
//! - **Presentation Errors**: a number typed in the terminal is out of range

use thiserror::Error;

/// Main error type for the HST tutor
///
/// Each variant carries the context needed to print a useful message on
/// stderr. Row-level errors are recoverable: the row is skipped and
/// processing continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HstError {
    /// I/O error occurred while reading or writing files
    ///
    /// Fatal for the operation that raised it (store write, input open).
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable when raised for a single grading row.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A persisted counter holds something other than a non-negative integer
    #[error("Invalid value '{value}' for counter '{key}'")]
    InvalidCounter {
        /// Counter name
        key: String,
        /// The raw stored value
        value: String,
    },

    /// Grading row action is not one of payable, recoverable or check
    #[error("Invalid action '{action}'")]
    InvalidAction {
        /// The unrecognized action string
        action: String,
    },

    /// A drop row is missing the record text or its payable flag
    #[error("{action} row for player {player} requires a text and a payable flag")]
    MissingRecord {
        /// Action of the incomplete row
        action: String,
        /// Player the row belongs to
        player: u32,
    },

    /// Payable flag could not be read as a boolean
    #[error("Invalid payable flag '{value}'")]
    InvalidFlag {
        /// The raw flag string
        value: String,
    },

    /// A choice or card number typed in the terminal does not exist
    #[error("Invalid selection {index}: pick a number from 1 to {available}")]
    InvalidSelection {
        /// The 1-based index the user typed
        index: usize,
        /// Number of entries on screen
        available: usize,
    },
}

// Conversion from io::Error to HstError
impl From<std::io::Error> for HstError {
    fn from(error: std::io::Error) -> Self {
        HstError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to HstError
impl From<csv::Error> for HstError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        HstError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl HstError {
    /// Create an InvalidCounter error
    pub fn invalid_counter(key: &str, value: &str) -> Self {
        HstError::InvalidCounter {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an InvalidAction error
    pub fn invalid_action(action: &str) -> Self {
        HstError::InvalidAction {
            action: action.to_string(),
        }
    }

    /// Create a MissingRecord error
    pub fn missing_record(action: &str, player: u32) -> Self {
        HstError::MissingRecord {
            action: action.to_string(),
            player,
        }
    }

    /// Create an InvalidFlag error
    pub fn invalid_flag(value: &str) -> Self {
        HstError::InvalidFlag {
            value: value.to_string(),
        }
    }

    /// Create an InvalidSelection error
    pub fn invalid_selection(index: usize, available: usize) -> Self {
        HstError::InvalidSelection { index, available }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::io_error(
        HstError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        HstError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        HstError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::invalid_counter(
        HstError::InvalidCounter { key: "gamesPlayed".to_string(), value: "-3".to_string() },
        "Invalid value '-3' for counter 'gamesPlayed'"
    )]
    #[case::invalid_action(
        HstError::InvalidAction { action: "toss".to_string() },
        "Invalid action 'toss'"
    )]
    #[case::missing_record(
        HstError::MissingRecord { action: "payable".to_string(), player: 7 },
        "payable row for player 7 requires a text and a payable flag"
    )]
    #[case::invalid_flag(
        HstError::InvalidFlag { value: "maybe".to_string() },
        "Invalid payable flag 'maybe'"
    )]
    #[case::invalid_selection(
        HstError::InvalidSelection { index: 9, available: 4 },
        "Invalid selection 9: pick a number from 1 to 4"
    )]
    fn test_error_display(#[case] error: HstError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_counter(
        HstError::invalid_counter("correctTotal", "abc"),
        HstError::InvalidCounter { key: "correctTotal".to_string(), value: "abc".to_string() }
    )]
    #[case::invalid_action(
        HstError::invalid_action("toss"),
        HstError::InvalidAction { action: "toss".to_string() }
    )]
    #[case::missing_record(
        HstError::missing_record("recoverable", 3),
        HstError::MissingRecord { action: "recoverable".to_string(), player: 3 }
    )]
    #[case::invalid_selection(
        HstError::invalid_selection(0, 4),
        HstError::InvalidSelection { index: 0, available: 4 }
    )]
    fn test_helper_functions(#[case] result: HstError, #[case] expected: HstError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: HstError = io_error.into();
        assert!(matches!(error, HstError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
