//! Parsing and validation of command line values.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{CliError, CliResult};

/// Date-time layouts accepted in addition to a bare date.
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse an axis date given as `YYYY-MM-DD` or a date-time.
///
/// A bare date means midnight at the start of that day.
pub fn parse_axis_date(value: &str) -> CliResult<NaiveDateTime> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| CliError::InvalidDate {
            value: value.to_string(),
        })
}

/// Require a finite, strictly positive pixel size.
pub fn require_positive(name: &'static str, value: f64) -> CliResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CliError::InvalidArgument {
            name,
            reason: format!("must be a positive number, got {}", value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        assert_eq!(parse_axis_date("2024-03-05").unwrap(), at(2024, 3, 5, 0, 0));
    }

    #[test]
    fn test_parse_date_time_variants() {
        assert_eq!(
            parse_axis_date("2024-03-05T14:30").unwrap(),
            at(2024, 3, 5, 14, 30)
        );
        assert_eq!(
            parse_axis_date("2024-03-05T14:30:00").unwrap(),
            at(2024, 3, 5, 14, 30)
        );
        assert_eq!(
            parse_axis_date(" 2024-03-05 09:15 ").unwrap(),
            at(2024, 3, 5, 9, 15)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        match parse_axis_date("next tuesday") {
            Err(CliError::InvalidDate { value }) => assert_eq!(value, "next tuesday"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        assert!(parse_axis_date("2023-02-29").is_err());
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("column-width", 60.0).unwrap(), 60.0);
        assert!(require_positive("column-width", 0.0).is_err());
        assert!(require_positive("header-height", -5.0).is_err());
        assert!(require_positive("header-height", f64::NAN).is_err());
        assert!(require_positive("header-height", f64::INFINITY).is_err());
    }
}
