//! Calendar header computation for Gantt charts
//!
//! Turns the resolved tick dates of a chart's time axis into the labels and
//! divider lines of its two-row date header. The computation is pure: the
//! same dates, view mode, locale, and geometry always give the same header.

pub mod calendar;
pub mod date_helper;
pub mod date_setup;
pub mod error;
pub mod header;
pub mod locale;
pub mod view_mode;

pub use calendar::{CalendarProps, DEFAULT_COLUMN_WIDTH, DEFAULT_HEADER_HEIGHT, compute_header};
pub use date_helper::{DateUnit, days_in_month, week_number_iso8601};
pub use date_setup::{DateSetup, MAX_AXIS_TICKS, gantt_date_range, seed_dates};
pub use error::{CalendarError, CalendarResult};
pub use header::{CalendarHeader, LabelDescriptor, SeparatorDescriptor};
pub use locale::{DEFAULT_LOCALE_TAG, DateFormatter, WeekdayStyle};
pub use view_mode::ViewMode;
