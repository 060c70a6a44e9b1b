//! Terminal preview of a calendar header.
//!
//! Scales the header's pixel coordinates down to character cells and draws
//! three rows: top captions, a rule with junctions where divider lines fall,
//! and bottom labels. Text is centred on its x coordinate and anything
//! falling outside the header is clipped.

use gantt_calendar::CalendarHeader;
use ratatui::text::Line;

/// Render the header into `width` character cells.
///
/// Returns no lines when the header has no width or `width` is zero.
pub fn render_preview(header: &CalendarHeader, width: u16) -> Vec<Line<'static>> {
    if header.width <= 0.0 || width == 0 {
        return Vec::new();
    }

    let cells = width as usize;
    let scale = f64::from(width) / header.width;

    let mut top_chars = vec![' '; cells];
    for sep in &header.top {
        place_centered(&mut top_chars, &sep.label_text, sep.label_x * scale);
    }

    let mut rule_chars = vec!['\u{2500}'; cells]; // Horizontal line
    for sep in &header.top {
        let pos = (sep.x1 * scale).round();
        if pos > 0.0 && pos < cells as f64 {
            rule_chars[pos as usize] = '\u{253C}'; // Cross character
        }
    }
    rule_chars[0] = '\u{251C}'; // Left T-junction
    if cells > 1 {
        rule_chars[cells - 1] = '\u{2524}'; // Right T-junction
    }

    let mut bottom_chars = vec![' '; cells];
    for label in &header.bottom {
        place_centered(&mut bottom_chars, &label.text, label.x * scale);
    }

    [top_chars, rule_chars, bottom_chars]
        .into_iter()
        .map(|row| Line::raw(row.into_iter().collect::<String>()))
        .collect()
}

/// Join preview lines into plain text, one line per row.
pub fn preview_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `text` centred on `center`, dropping characters outside the row.
fn place_centered(row: &mut [char], text: &str, center: f64) {
    let len = text.chars().count() as f64;
    let start = (center - len / 2.0).round() as i64;

    for (offset, c) in text.chars().enumerate() {
        if let Ok(idx) = usize::try_from(start + offset as i64)
            && let Some(cell) = row.get_mut(idx)
        {
            *cell = c;
        }
    }
}
