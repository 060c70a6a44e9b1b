//! Header label computation for the calendar band of a Gantt chart.
//!
//! Given the axis dates of a [`DateSetup`], produces the bottom band (one
//! label per tick) and the top band (a caption and divider line at each
//! detected boundary). Boundaries are always found by comparing adjacent
//! dates; the view mode selects which boundary and which label format apply.

use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::debug;

use crate::date_helper::{days_in_month, week_number_iso8601};
use crate::date_setup::DateSetup;
use crate::header::{CalendarHeader, LabelDescriptor, SeparatorDescriptor};
use crate::locale::{DateFormatter, WeekdayStyle};
use crate::view_mode::ViewMode;

/// Default width of one axis column, in pixels.
pub const DEFAULT_COLUMN_WIDTH: f64 = 60.0;

/// Default height of the header band, in pixels.
pub const DEFAULT_HEADER_HEIGHT: f64 = 50.0;

/// Geometry and text settings for the header.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarProps {
    /// Width of one axis column.
    pub column_width: f64,
    /// Height of the whole header band.
    pub header_height: f64,
    /// Right-to-left rendering.
    pub rtl: bool,
    pub font_family: String,
    pub font_size: String,
}

impl Default for CalendarProps {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            header_height: DEFAULT_HEADER_HEIGHT,
            rtl: false,
            font_family: "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Oxygen, \
                          Ubuntu, Cantarell, \"Fira Sans\", \"Droid Sans\", \"Helvetica Neue\""
                .to_string(),
            font_size: "14px".to_string(),
        }
    }
}

type Bands = (Vec<SeparatorDescriptor>, Vec<LabelDescriptor>);

/// Compute both header bands for the setup's dates and view mode.
///
/// The bottom band always has one label per date. An empty setup yields a
/// blank header of zero width.
pub fn compute_header(
    setup: &DateSetup,
    formatter: &DateFormatter,
    props: &CalendarProps,
) -> CalendarHeader {
    let ctx = Context {
        dates: &setup.dates,
        formatter,
        props,
    };

    let (top, bottom) = if ctx.dates.is_empty() {
        (Vec::new(), Vec::new())
    } else {
        match setup.view_mode {
            ViewMode::Year => ctx.year_values(),
            ViewMode::Month => ctx.month_values(),
            ViewMode::Week => ctx.week_values(),
            ViewMode::HalfDay => ctx.part_of_day_values(setup.view_mode.part_of_day_ticks()),
            ViewMode::Hour => ctx.hour_values(),
            ViewMode::Day | ViewMode::QuarterDay | ViewMode::QuarterYear => ctx.day_values(),
        }
    };

    debug!(
        view_mode = %setup.view_mode,
        dates = setup.len(),
        top = top.len(),
        bottom = bottom.len(),
        "computed calendar header"
    );

    CalendarHeader {
        top,
        bottom,
        width: props.column_width * setup.len() as f64,
        height: props.header_height,
        font_family: props.font_family.clone(),
        font_size: props.font_size.clone(),
    }
}

struct Context<'a> {
    dates: &'a [NaiveDateTime],
    formatter: &'a DateFormatter,
    props: &'a CalendarProps,
}

impl Context<'_> {
    fn column(&self, i: usize) -> f64 {
        self.props.column_width * i as f64
    }

    fn column_center(&self, i: usize) -> f64 {
        self.column(i) + self.props.column_width * 0.5
    }

    /// Column edge used by labels anchored at a tick; shifts one column in RTL.
    fn tick_edge(&self, i: usize) -> f64 {
        self.column(i + usize::from(self.props.rtl))
    }

    fn bottom_y(&self) -> f64 {
        self.props.header_height * 0.8
    }

    fn top_height(&self) -> f64 {
        self.props.header_height * 0.5
    }

    fn previous(&self, i: usize) -> Option<&NaiveDateTime> {
        i.checked_sub(1).and_then(|p| self.dates.get(p))
    }

    fn label(&self, key: String, text: String, x: f64) -> LabelDescriptor {
        LabelDescriptor {
            key,
            text,
            x,
            y: self.bottom_y(),
        }
    }

    fn separator(
        &self,
        key: String,
        text: String,
        x_line: f64,
        x_text: f64,
        top_height: f64,
    ) -> SeparatorDescriptor {
        SeparatorDescriptor::vertical(key, text, x_line, 0.0, top_height, x_text, top_height * 0.9)
    }

    /// Caption x for Year and Month separators.
    ///
    /// The offset term is the year (Year mode) or 0-based month (Month mode).
    /// The result lies far outside the band for Year mode; renderers rely on
    /// this exact placement.
    fn far_caption_x(&self, i: usize, offset: i32) -> f64 {
        let base = 6.0 + i as f64;
        let offset = f64::from(offset);
        let columns = if self.props.rtl {
            base + offset + 1.0
        } else {
            base - offset
        };
        columns * self.props.column_width
    }

    fn starts_new_year(&self, i: usize, date: &NaiveDateTime) -> bool {
        self.previous(i)
            .is_none_or(|prev| prev.year() != date.year())
    }

    fn year_values(&self) -> Bands {
        let top_height = self.props.header_height;
        let mut top = Vec::new();
        let mut bottom = Vec::with_capacity(self.dates.len());

        for (i, date) in self.dates.iter().enumerate() {
            let year = date.year().to_string();
            bottom.push(self.label(year.clone(), year.clone(), self.column_center(i)));

            if self.starts_new_year(i, date) {
                top.push(self.separator(
                    year.clone(),
                    year,
                    self.column(i),
                    self.far_caption_x(i, date.year()),
                    top_height,
                ));
            }
        }

        (top, bottom)
    }

    fn month_values(&self) -> Bands {
        let top_height = self.top_height();
        let mut top = Vec::new();
        let mut bottom = Vec::with_capacity(self.dates.len());

        for (i, date) in self.dates.iter().enumerate() {
            let month = self.formatter.month_name(date);
            let key = format!("{}{}", month, date.year());
            bottom.push(self.label(key, month, self.column_center(i)));

            if self.starts_new_year(i, date) {
                let year = date.year().to_string();
                // month0 is at most 11
                let month0 = date.month0() as i32;
                top.push(self.separator(
                    year.clone(),
                    year,
                    self.column(i),
                    self.far_caption_x(i, month0),
                    top_height,
                ));
            }
        }

        (top, bottom)
    }

    /// Week captions are found scanning newest to oldest, so each caption
    /// knows how many weeks its month spans to the right of it.
    fn week_values(&self) -> Bands {
        let top_height = self.top_height();
        let last = self.dates.len() - 1;

        let state = self.dates.iter().enumerate().rev().fold(
            WeekFold::new(self.dates.len()),
            |mut state, (i, date)| {
                let label = format!("W{}", week_number_iso8601(date));
                state.bottom.push(self.label(
                    timestamp_key(date),
                    label,
                    self.tick_edge(i),
                ));

                let month_starts = self
                    .previous(i)
                    .is_none_or(|prev| prev.month() != date.month());
                if month_starts {
                    // A month that begins on the newest tick has nothing to its right.
                    if i != last {
                        let caption =
                            format!("{}, {}", self.formatter.month_name(date), date.year());
                        let span = f64::from(state.weeks_count) * self.props.column_width;
                        state.top.push(self.separator(
                            caption.clone(),
                            caption,
                            self.column(i) + span,
                            self.column(i) + span * 0.5,
                            top_height,
                        ));
                    }
                    state.weeks_count = 0;
                }
                state.weeks_count += 1;
                state
            },
        );

        (state.top, state.bottom)
    }

    fn day_values(&self) -> Bands {
        let top_height = self.top_height();
        let mut top = Vec::new();
        let mut bottom = Vec::with_capacity(self.dates.len());

        for (i, date) in self.dates.iter().enumerate() {
            let label = format!(
                "{}, {}",
                self.formatter.weekday_name(date, WeekdayStyle::Short),
                date.day()
            );
            bottom.push(self.label(timestamp_key(date), label, self.column_center(i)));

            if let Some(next) = self.dates.get(i + 1)
                && next.month() != date.month()
            {
                let month = self.formatter.month_name(date);
                let key = format!("{}{}", month, date.year());
                let month_span = f64::from(days_in_month(date.month0(), date.year()))
                    * self.props.column_width;
                top.push(self.separator(
                    key,
                    month,
                    self.column(i + 1),
                    self.column(i + 1) - month_span * 0.5,
                    top_height,
                ));
            }
        }

        (top, bottom)
    }

    fn part_of_day_values(&self, ticks: u32) -> Bands {
        let top_height = self.top_height();
        let span = f64::from(ticks) * self.props.column_width;
        let mut top = Vec::new();
        let mut bottom = Vec::with_capacity(self.dates.len());

        for (i, date) in self.dates.iter().enumerate() {
            bottom.push(self.label(
                timestamp_key(date),
                self.formatter.hour_label(date),
                self.tick_edge(i),
            ));

            let day_starts = self.previous(i).is_none_or(|prev| prev.day() != date.day());
            if day_starts {
                let caption = format!(
                    "{}, {} {}",
                    self.formatter.weekday_name(date, WeekdayStyle::Short),
                    date.day(),
                    self.formatter.month_name(date)
                );
                let key = format!("{}{}", caption, date.year());
                top.push(self.separator(
                    key,
                    caption,
                    self.column(i) + span,
                    self.column(i) + span * 0.5,
                    top_height,
                ));
            }
        }

        (top, bottom)
    }

    /// Hour captions name the day that just ended, centred back over it.
    fn hour_values(&self) -> Bands {
        let top_height = self.top_height();
        let mut top = Vec::new();
        let mut bottom = Vec::with_capacity(self.dates.len());

        for (i, date) in self.dates.iter().enumerate() {
            bottom.push(self.label(
                timestamp_key(date),
                self.formatter.hour_label(date),
                self.tick_edge(i),
            ));

            if let Some(ended) = self.previous(i)
                && ended.day() != date.day()
            {
                let caption = format!(
                    "{}, {} {}",
                    self.formatter.weekday_name(ended, WeekdayStyle::Long),
                    ended.day(),
                    self.formatter.month_name(ended)
                );
                let key = format!("{}{}", caption, ended.year());
                let back = (f64::from(date.hour()) - 24.0) / 2.0;
                top.push(self.separator(
                    key,
                    caption,
                    self.column(i),
                    self.props.column_width * (i as f64 + back),
                    top_height,
                ));
            }
        }

        (top, bottom)
    }
}

/// Accumulator for the reverse scan in Week mode.
struct WeekFold {
    /// Columns covered since the last month boundary, including the current one.
    weeks_count: u32,
    top: Vec<SeparatorDescriptor>,
    bottom: Vec<LabelDescriptor>,
}

impl WeekFold {
    fn new(capacity: usize) -> Self {
        Self {
            weeks_count: 1,
            top: Vec::new(),
            bottom: Vec::with_capacity(capacity),
        }
    }
}

fn timestamp_key(date: &NaiveDateTime) -> String {
    date.and_utc().timestamp_millis().to_string()
}
