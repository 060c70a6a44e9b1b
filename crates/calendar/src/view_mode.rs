//! Time granularity of a chart's axis.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CalendarError;

/// Granularity the chart's time axis is rendered at.
///
/// Exactly one mode is active per header computation; it selects which
/// labelling algorithm runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Hour,
    QuarterDay,
    HalfDay,
    Day,
    Week,
    Month,
    QuarterYear,
    Year,
}

impl ViewMode {
    /// All modes, finest first.
    pub const ALL: [ViewMode; 8] = [
        ViewMode::Hour,
        ViewMode::QuarterDay,
        ViewMode::HalfDay,
        ViewMode::Day,
        ViewMode::Week,
        ViewMode::Month,
        ViewMode::QuarterYear,
        ViewMode::Year,
    ];

    /// Returns the canonical display name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Hour => "Hour",
            ViewMode::QuarterDay => "Quarter Day",
            ViewMode::HalfDay => "Half Day",
            ViewMode::Day => "Day",
            ViewMode::Week => "Week",
            ViewMode::Month => "Month",
            ViewMode::QuarterYear => "QuarterYear",
            ViewMode::Year => "Year",
        }
    }

    /// Number of columns a part-of-day caption spans.
    pub fn part_of_day_ticks(&self) -> u32 {
        match self {
            ViewMode::HalfDay => 2,
            _ => 4,
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "half-day", "half day", "half_day" and "HalfDay" all normalize to "halfday"
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "hour" => Ok(ViewMode::Hour),
            "quarterday" => Ok(ViewMode::QuarterDay),
            "halfday" => Ok(ViewMode::HalfDay),
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            "quarteryear" => Ok(ViewMode::QuarterYear),
            "year" => Ok(ViewMode::Year),
            _ => Err(CalendarError::UnknownViewMode {
                name: s.to_string(),
                valid: "hour, quarter-day, half-day, day, week, month, quarter-year, year"
                    .to_string(),
            }),
        }
    }
}
