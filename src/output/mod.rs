//! Output formatting module for ghdr
//!
//! Provides table, JSON, and terminal preview renderings of a computed
//! calendar header.

pub mod preview;

use chrono::NaiveDateTime;
use gantt_calendar::{CalendarHeader, LabelDescriptor, SeparatorDescriptor, ViewMode};
use serde::Serialize;

use crate::error::CliResult;

pub use preview::{preview_text, render_preview};

/// Everything needed to reproduce a header, serialized for `--format json`.
#[derive(Debug, Serialize)]
pub struct HeaderReport<'a> {
    /// Resolved locale tag
    pub locale: &'a str,
    pub view_mode: ViewMode,
    /// Axis dates the header was computed from
    pub dates: &'a [NaiveDateTime],
    pub header: &'a CalendarHeader,
}

/// Serialize a header report as pretty-printed JSON.
pub fn format_header_json(report: &HeaderReport<'_>) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Format both header bands as aligned tables.
///
/// Produces output in the format:
/// ```text
/// Top band (1)
/// KEY           TEXT      LINE X  LINE TOP  LINE BOTTOM  TEXT X  TEXT Y
/// ------------  --------  ------  --------  -----------  ------  ------
/// December2023  December  120     0         25           -810    22.5
///
/// Bottom band (3)
/// KEY            TEXT     X    Y
/// -------------  -------  ---  --
/// 1703894400000  Sat, 30  30   40
/// ```
pub fn format_header_table(header: &CalendarHeader) -> String {
    if header.is_blank() {
        return "No axis dates.".to_string();
    }

    let top_rows: Vec<Vec<String>> = header.top.iter().map(separator_row).collect();
    let bottom_rows: Vec<Vec<String>> = header.bottom.iter().map(label_row).collect();

    let mut output = String::new();
    output.push_str(&format!("Top band ({})\n", header.top.len()));
    output.push_str(&format_rows(
        &[
            "KEY",
            "TEXT",
            "LINE X",
            "LINE TOP",
            "LINE BOTTOM",
            "TEXT X",
            "TEXT Y",
        ],
        &top_rows,
    ));
    output.push('\n');
    output.push_str(&format!("Bottom band ({})\n", header.bottom.len()));
    output.push_str(&format_rows(&["KEY", "TEXT", "X", "Y"], &bottom_rows));

    // Remove trailing newline
    output.pop();

    output
}

fn separator_row(sep: &SeparatorDescriptor) -> Vec<String> {
    vec![
        sep.key.clone(),
        sep.label_text.clone(),
        format_coord(sep.x1),
        format_coord(sep.y1),
        format_coord(sep.y2),
        format_coord(sep.label_x),
        format_coord(sep.label_y),
    ]
}

fn label_row(label: &LabelDescriptor) -> Vec<String> {
    vec![
        label.key.clone(),
        label.text.clone(),
        format_coord(label.x),
        format_coord(label.y),
    ]
}

/// Lay out a header row, a dashed rule, and data rows with two-space gaps.
fn format_rows(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, h)| {
            rows.iter()
                .map(|r| r[col].chars().count())
                .max()
                .unwrap_or(0)
                .max(h.len())
        })
        .collect();

    let render = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut output = render(headers.to_vec());
    output.push_str(&render(rule.iter().map(String::as_str).collect()));
    for row in rows {
        output.push_str(&render(row.iter().map(String::as_str).collect()));
    }
    output
}

/// Whole pixel values print without decimals, others with one.
fn format_coord(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
