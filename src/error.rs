use gantt_calendar::CalendarError;
use thiserror::Error;

/// Error types for the ghdr command line
#[derive(Error, Debug)]
pub enum CliError {
    /// Error preparing calendar inputs (view mode, locale, date range)
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Date or date-time argument that could not be parsed
    #[error("Invalid date '{value}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]")]
    InvalidDate { value: String },

    /// Numeric argument outside its valid range
    #[error("Invalid value for --{name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Error serializing JSON output
    #[error("Failed to serialize header: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = CliError::InvalidDate {
            value: "yesterday".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date 'yesterday': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]"
        );
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument {
            name: "column-width",
            reason: "must be a positive number, got 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for --column-width: must be a positive number, got 0"
        );
    }

    #[test]
    fn test_calendar_error_is_transparent() {
        let err: CliError = CalendarError::InvalidLocale {
            tag: "1x".to_string(),
            reason: "language must be 2-3 ASCII letters".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid locale tag '1x': language must be 2-3 ASCII letters"
        );
    }
}
