use chrono::NaiveDateTime;
use thiserror::Error;

/// Error types for calendar header inputs.
///
/// The header computation itself never fails; these cover parsing and
/// preparing the inputs it is given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// View mode name that does not match any known granularity
    #[error("Unknown view mode '{name}'. Valid modes are: {valid}")]
    UnknownViewMode { name: String, valid: String },

    /// Locale tag that is not shaped like a language tag
    #[error("Invalid locale tag '{tag}': {reason}")]
    InvalidLocale { tag: String, reason: String },

    /// Axis range whose start comes after its end
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Axis range that would need more ticks than a header can hold
    #[error("Axis range from {start} to {end} needs more than {limit} ticks")]
    RangeTooLarge {
        start: NaiveDateTime,
        end: NaiveDateTime,
        limit: usize,
    },

    /// Date arithmetic left the representable range
    #[error("Date out of range: {message}")]
    InvalidDate { message: String },
}

/// Result type alias for calendar operations
pub type CalendarResult<T> = Result<T, CalendarError>;
