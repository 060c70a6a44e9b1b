//! Axis date seeding for a chart's visible range.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date_helper::{DateUnit, add_to, monday_of, start_of};
use crate::error::{CalendarError, CalendarResult};
use crate::view_mode::ViewMode;

/// Most ticks a seeded axis may hold.
pub const MAX_AXIS_TICKS: usize = 100_000;

/// Ordered axis dates together with the view mode they were seeded for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSetup {
    /// Tick dates in chronological order.
    pub dates: Vec<NaiveDateTime>,
    /// Granularity the ticks were generated at.
    pub view_mode: ViewMode,
}

impl DateSetup {
    /// Create a setup from already-resolved tick dates.
    pub fn new(dates: Vec<NaiveDateTime>, view_mode: ViewMode) -> Self {
        Self { dates, view_mode }
    }

    /// Seed ticks covering the span from `start` to `end`.
    ///
    /// The span is first widened to the padded, unit-aligned range the chart
    /// shows (see [`gantt_date_range`]), then stepped through one tick at a time.
    pub fn for_range(
        start: NaiveDateTime,
        end: NaiveDateTime,
        view_mode: ViewMode,
        pre_steps: u32,
    ) -> CalendarResult<Self> {
        let (range_start, range_end) = gantt_date_range(start, end, view_mode, pre_steps)?;
        let dates = seed_dates(range_start, range_end, view_mode)?;
        debug!(
            view_mode = %view_mode,
            start = %range_start,
            end = %range_end,
            ticks = dates.len(),
            "seeded axis dates"
        );
        Ok(Self { dates, view_mode })
    }

    /// Number of axis ticks.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether there are no axis ticks.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Widen a task span to the padded, unit-aligned range shown on the axis.
///
/// # Errors
///
/// Returns `CalendarError::InvalidRange` if `start` is after `end`, or
/// `CalendarError::InvalidDate` if padding leaves the representable range.
pub fn gantt_date_range(
    start: NaiveDateTime,
    end: NaiveDateTime,
    view_mode: ViewMode,
    pre_steps: u32,
) -> CalendarResult<(NaiveDateTime, NaiveDateTime)> {
    if start > end {
        return Err(CalendarError::InvalidRange { start, end });
    }

    let pre = i64::from(pre_steps);
    let range = match view_mode {
        ViewMode::Year => (
            start_of(add_to(start, -1, DateUnit::Year)?, DateUnit::Year),
            start_of(add_to(end, 1, DateUnit::Year)?, DateUnit::Year),
        ),
        ViewMode::QuarterYear => (
            start_of(add_to(start, -3, DateUnit::Month)?, DateUnit::Month),
            start_of(add_to(end, 3, DateUnit::Year)?, DateUnit::Year),
        ),
        ViewMode::Month => (
            start_of(add_to(start, -pre, DateUnit::Month)?, DateUnit::Month),
            start_of(add_to(end, 1, DateUnit::Year)?, DateUnit::Year),
        ),
        ViewMode::Week => (
            add_to(
                monday_of(start_of(start, DateUnit::Day))?,
                -7 * pre,
                DateUnit::Day,
            )?,
            add_to(start_of(end, DateUnit::Day), 1, DateUnit::Month)?,
        ),
        ViewMode::Day => (
            add_to(start_of(start, DateUnit::Day), -pre, DateUnit::Day)?,
            add_to(start_of(end, DateUnit::Day), 19, DateUnit::Day)?,
        ),
        ViewMode::QuarterDay => (
            add_to(start_of(start, DateUnit::Day), -pre, DateUnit::Day)?,
            add_to(start_of(end, DateUnit::Day), 66, DateUnit::Hour)?,
        ),
        ViewMode::HalfDay => (
            add_to(start_of(start, DateUnit::Day), -pre, DateUnit::Day)?,
            add_to(start_of(end, DateUnit::Day), 108, DateUnit::Hour)?,
        ),
        ViewMode::Hour => (
            add_to(start_of(start, DateUnit::Hour), -pre, DateUnit::Hour)?,
            add_to(start_of(end, DateUnit::Day), 1, DateUnit::Day)?,
        ),
    };

    Ok(range)
}

/// Step from `start` by the view mode's unit until reaching or passing `end`.
///
/// The first tick is always `start`, so the result is never empty.
///
/// # Errors
///
/// Returns `CalendarError::RangeTooLarge` if the range needs more than
/// [`MAX_AXIS_TICKS`] ticks.
pub fn seed_dates(
    start: NaiveDateTime,
    end: NaiveDateTime,
    view_mode: ViewMode,
) -> CalendarResult<Vec<NaiveDateTime>> {
    let (amount, unit) = match view_mode {
        ViewMode::Year => (1, DateUnit::Year),
        ViewMode::QuarterYear => (3, DateUnit::Month),
        ViewMode::Month => (1, DateUnit::Month),
        ViewMode::Week => (7, DateUnit::Day),
        ViewMode::Day => (1, DateUnit::Day),
        ViewMode::HalfDay => (12, DateUnit::Hour),
        ViewMode::QuarterDay => (6, DateUnit::Hour),
        ViewMode::Hour => (1, DateUnit::Hour),
    };

    let mut current = start;
    let mut dates = vec![current];
    while current < end {
        if dates.len() >= MAX_AXIS_TICKS {
            return Err(CalendarError::RangeTooLarge {
                start,
                end,
                limit: MAX_AXIS_TICKS,
            });
        }
        current = add_to(current, amount, unit)?;
        dates.push(current);
    }

    Ok(dates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_range_rejects_reversed_span() {
        let result = gantt_date_range(at(2024, 2, 1, 0), at(2024, 1, 1, 0), ViewMode::Day, 1);
        assert!(matches!(result, Err(CalendarError::InvalidRange { .. })));
    }

    #[test]
    fn test_range_for_year() {
        let (start, end) =
            gantt_date_range(at(2024, 5, 3, 10), at(2024, 8, 1, 0), ViewMode::Year, 1).unwrap();
        assert_eq!(start, at(2023, 1, 1, 0));
        assert_eq!(end, at(2025, 1, 1, 0));
    }

    #[test]
    fn test_range_for_quarter_year() {
        let (start, end) = gantt_date_range(
            at(2024, 5, 3, 10),
            at(2024, 8, 1, 0),
            ViewMode::QuarterYear,
            1,
        )
        .unwrap();
        assert_eq!(start, at(2024, 2, 1, 0));
        assert_eq!(end, at(2027, 1, 1, 0));
    }

    #[test]
    fn test_range_for_month_uses_pre_steps() {
        let (start, end) =
            gantt_date_range(at(2024, 5, 3, 10), at(2024, 8, 1, 0), ViewMode::Month, 2).unwrap();
        assert_eq!(start, at(2024, 3, 1, 0));
        assert_eq!(end, at(2025, 1, 1, 0));
    }

    #[test]
    fn test_range_for_week_starts_on_monday() {
        // 2024-01-10 is a Wednesday
        let (start, end) =
            gantt_date_range(at(2024, 1, 10, 15), at(2024, 1, 20, 8), ViewMode::Week, 1).unwrap();
        assert_eq!(start, at(2024, 1, 1, 0));
        assert_eq!(end, at(2024, 2, 20, 0));
    }

    #[test]
    fn test_range_for_week_at_earliest_date_is_an_error() {
        let earliest = NaiveDate::MIN.and_time(NaiveTime::MIN);
        let result = gantt_date_range(earliest, earliest, ViewMode::Week, 1);
        assert!(
            matches!(result, Err(CalendarError::InvalidDate { .. })),
            "Expected InvalidDate, got {:?}",
            result
        );
    }

    #[test]
    fn test_range_for_day() {
        let (start, end) =
            gantt_date_range(at(2024, 1, 10, 15), at(2024, 1, 12, 8), ViewMode::Day, 1).unwrap();
        assert_eq!(start, at(2024, 1, 9, 0));
        assert_eq!(end, at(2024, 1, 31, 0));
    }

    #[test]
    fn test_range_for_part_of_day_modes() {
        let (_, quarter_end) = gantt_date_range(
            at(2024, 1, 10, 15),
            at(2024, 1, 10, 15),
            ViewMode::QuarterDay,
            1,
        )
        .unwrap();
        assert_eq!(quarter_end, at(2024, 1, 12, 18));

        let (half_start, half_end) = gantt_date_range(
            at(2024, 1, 10, 15),
            at(2024, 1, 10, 15),
            ViewMode::HalfDay,
            1,
        )
        .unwrap();
        assert_eq!(half_start, at(2024, 1, 9, 0));
        assert_eq!(half_end, at(2024, 1, 14, 12));
    }

    #[test]
    fn test_range_for_hour() {
        let (start, end) =
            gantt_date_range(at(2024, 1, 10, 15), at(2024, 1, 10, 18), ViewMode::Hour, 3).unwrap();
        assert_eq!(start, at(2024, 1, 10, 12));
        assert_eq!(end, at(2024, 1, 11, 0));
    }

    #[test]
    fn test_seed_dates_includes_start_and_passes_end() {
        let dates = seed_dates(at(2024, 1, 1, 0), at(2024, 1, 3, 12), ViewMode::Day).unwrap();
        assert_eq!(
            dates,
            vec![
                at(2024, 1, 1, 0),
                at(2024, 1, 2, 0),
                at(2024, 1, 3, 0),
                at(2024, 1, 4, 0),
            ]
        );
    }

    #[test]
    fn test_seed_dates_single_tick_when_start_equals_end() {
        let dates = seed_dates(at(2024, 1, 1, 0), at(2024, 1, 1, 0), ViewMode::Week).unwrap();
        assert_eq!(dates, vec![at(2024, 1, 1, 0)]);
    }

    #[test]
    fn test_seed_dates_steps_per_mode() {
        let start = at(2024, 1, 1, 0);
        let step = |mode| seed_dates(start, at(2024, 1, 1, 1), mode).unwrap()[1];
        assert_eq!(step(ViewMode::Year), at(2025, 1, 1, 0));
        assert_eq!(step(ViewMode::QuarterYear), at(2024, 4, 1, 0));
        assert_eq!(step(ViewMode::Month), at(2024, 2, 1, 0));
        assert_eq!(step(ViewMode::Week), at(2024, 1, 8, 0));
        assert_eq!(step(ViewMode::Day), at(2024, 1, 2, 0));
        assert_eq!(step(ViewMode::HalfDay), at(2024, 1, 1, 12));
        assert_eq!(step(ViewMode::QuarterDay), at(2024, 1, 1, 6));
        assert_eq!(step(ViewMode::Hour), at(2024, 1, 1, 1));
    }

    #[test]
    fn test_seed_dates_rejects_oversized_range() {
        // Twenty years of hours is well past the tick limit
        let result = seed_dates(at(2000, 1, 1, 0), at(2020, 1, 1, 0), ViewMode::Hour);
        match result {
            Err(CalendarError::RangeTooLarge { limit, .. }) => assert_eq!(limit, MAX_AXIS_TICKS),
            other => panic!("Expected RangeTooLarge, got {:?}", other.map(|d| d.len())),
        }
    }

    #[test]
    fn test_seed_dates_same_range_fits_at_coarser_mode() {
        let dates = seed_dates(at(2000, 1, 1, 0), at(2020, 1, 1, 0), ViewMode::Day).unwrap();
        assert_eq!(dates.len(), 7306);
    }

    #[test]
    fn test_for_range_builds_month_setup() {
        let setup =
            DateSetup::for_range(at(2024, 3, 15, 0), at(2024, 6, 1, 0), ViewMode::Month, 1)
                .unwrap();
        assert_eq!(setup.view_mode, ViewMode::Month);
        assert_eq!(setup.dates.first(), Some(&at(2024, 2, 1, 0)));
        assert_eq!(setup.dates.last(), Some(&at(2025, 1, 1, 0)));
        assert_eq!(setup.len(), 12);
        assert!(!setup.is_empty());
    }

    #[test]
    fn test_new_setup_can_be_empty() {
        let setup = DateSetup::new(Vec::new(), ViewMode::Day);
        assert!(setup.is_empty());
        assert_eq!(setup.len(), 0);
    }
}
