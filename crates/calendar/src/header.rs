//! Descriptors produced for the two bands of the calendar header.

use serde::{Deserialize, Serialize};

/// A per-tick label in the bottom band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDescriptor {
    /// Key that stays stable across recomputations for the same tick.
    pub key: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// A top-band entry: a vertical divider line plus its caption.
///
/// The divider runs from `(x1, y1)` to `(x2, y2)`; `x2` always equals `x1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparatorDescriptor {
    pub key: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub label_text: String,
    pub label_x: f64,
    pub label_y: f64,
}

impl SeparatorDescriptor {
    /// Build a vertical divider from `y1` to `y2` at `x` with a caption.
    pub(crate) fn vertical(
        key: String,
        label_text: String,
        x: f64,
        y1: f64,
        y2: f64,
        label_x: f64,
        label_y: f64,
    ) -> Self {
        Self {
            key,
            x1: x,
            y1,
            x2: x,
            y2,
            label_text,
            label_x,
            label_y,
        }
    }
}

/// The computed header: background rectangle, top band, and bottom band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarHeader {
    /// Grouping captions with their divider lines.
    pub top: Vec<SeparatorDescriptor>,
    /// One label per axis date.
    pub bottom: Vec<LabelDescriptor>,
    /// Header rectangle width: column width times the number of dates.
    pub width: f64,
    /// Header rectangle height.
    pub height: f64,
    pub font_family: String,
    pub font_size: String,
}

impl CalendarHeader {
    /// Whether neither band has any content.
    pub fn is_blank(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }

    /// Bottom labels ordered left to right.
    ///
    /// Week headers are produced newest first; this gives a stable
    /// positional order regardless of view mode.
    pub fn bottom_by_position(&self) -> Vec<&LabelDescriptor> {
        let mut labels: Vec<&LabelDescriptor> = self.bottom.iter().collect();
        labels.sort_by(|a, b| a.x.total_cmp(&b.x));
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(key: &str, x: f64) -> LabelDescriptor {
        LabelDescriptor {
            key: key.to_string(),
            text: key.to_string(),
            x,
            y: 40.0,
        }
    }

    #[test]
    fn test_vertical_separator_has_equal_x() {
        let sep = SeparatorDescriptor::vertical(
            "2024".to_string(),
            "2024".to_string(),
            120.0,
            0.0,
            25.0,
            60.0,
            22.5,
        );
        assert_eq!(sep.x1, 120.0);
        assert_eq!(sep.x2, 120.0);
        assert_eq!(sep.y1, 0.0);
        assert_eq!(sep.y2, 25.0);
        assert_eq!(sep.label_text, "2024");
    }

    #[test]
    fn test_blank_header() {
        let header = CalendarHeader {
            top: Vec::new(),
            bottom: Vec::new(),
            width: 0.0,
            height: 50.0,
            font_family: String::new(),
            font_size: String::new(),
        };
        assert!(header.is_blank());
    }

    #[test]
    fn test_bottom_by_position_sorts_by_x() {
        let header = CalendarHeader {
            top: Vec::new(),
            bottom: vec![label("c", 120.0), label("a", 0.0), label("b", 60.0)],
            width: 180.0,
            height: 50.0,
            font_family: String::new(),
            font_size: String::new(),
        };
        let keys: Vec<&str> = header
            .bottom_by_position()
            .iter()
            .map(|l| l.key.as_str())
            .collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert!(!header.is_blank());
    }

    #[test]
    fn test_header_serializes_to_json() {
        let header = CalendarHeader {
            top: Vec::new(),
            bottom: vec![label("2024", 30.0)],
            width: 60.0,
            height: 50.0,
            font_family: "Arial".to_string(),
            font_size: "14px".to_string(),
        };
        let json = serde_json::to_value(&header).unwrap();
        assert_eq!(json["bottom"][0]["text"], "2024");
        assert_eq!(json["width"], 60.0);
        assert_eq!(json["font_family"], "Arial");
    }
}
