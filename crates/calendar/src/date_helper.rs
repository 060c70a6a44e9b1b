//! Calendar arithmetic used to seed axis dates and measure header spans.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{CalendarError, CalendarResult};

/// Calendar unit for truncation and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateUnit {
    Year,
    Month,
    Day,
    Hour,
}

/// Number of days in a 0-based month of the given year.
///
/// Returns 0 for a month index outside 0..=11.
pub fn days_in_month(month0: u32, year: i32) -> u32 {
    if month0 > 11 {
        return 0;
    }
    let month = month0 + 1;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

/// ISO-8601 week number as a two-digit string ("01".."53").
pub fn week_number_iso8601(date: &NaiveDateTime) -> String {
    format!("{:02}", date.iso_week().week())
}

/// Truncate a date to the start of the given unit.
pub fn start_of(date: NaiveDateTime, unit: DateUnit) -> NaiveDateTime {
    let day = date.date();
    match unit {
        DateUnit::Year => NaiveDate::from_ymd_opt(day.year(), 1, 1)
            .unwrap_or(day)
            .and_time(NaiveTime::MIN),
        DateUnit::Month => day.with_day(1).unwrap_or(day).and_time(NaiveTime::MIN),
        DateUnit::Day => day.and_time(NaiveTime::MIN),
        DateUnit::Hour => date
            .with_minute(0)
            .and_then(|d| d.with_second(0))
            .and_then(|d| d.with_nanosecond(0))
            .unwrap_or(date),
    }
}

/// Shift a date by a signed amount of the given unit.
///
/// Month and year steps clamp the day-of-month to the length of the
/// target month (Jan 31 + 1 month = Feb 28/29).
pub fn add_to(date: NaiveDateTime, amount: i64, unit: DateUnit) -> CalendarResult<NaiveDateTime> {
    let shifted = match unit {
        DateUnit::Year => amount.checked_mul(12).and_then(|m| add_months(date, m)),
        DateUnit::Month => add_months(date, amount),
        DateUnit::Day => Duration::try_days(amount).and_then(|d| date.checked_add_signed(d)),
        DateUnit::Hour => Duration::try_hours(amount).and_then(|d| date.checked_add_signed(d)),
    };

    shifted.ok_or_else(|| CalendarError::InvalidDate {
        message: format!("cannot add {} {:?} to {}", amount, unit, date),
    })
}

fn add_months(date: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = u32::try_from(months.unsigned_abs()).ok()?;
    if months >= 0 {
        date.checked_add_months(Months::new(magnitude))
    } else {
        date.checked_sub_months(Months::new(magnitude))
    }
}

/// The Monday of the date's week, keeping the time of day.
pub fn monday_of(date: NaiveDateTime) -> CalendarResult<NaiveDateTime> {
    let back = i64::from(date.weekday().num_days_from_monday());
    date.checked_sub_signed(Duration::days(back))
        .ok_or_else(|| CalendarError::InvalidDate {
            message: format!("no Monday on or before {}", date),
        })
}
