//! Locale-aware names and hour labels for header captions.
//!
//! Month and weekday names come from chrono's locale tables. A
//! [`DateFormatter`] is resolved once from a language tag and then reused
//! for every label of a header computation.

use chrono::{Locale, NaiveDateTime};
use tracing::warn;

use crate::error::{CalendarError, CalendarResult};

/// Tag used when a requested locale has no table.
pub const DEFAULT_LOCALE_TAG: &str = "en-US";

/// Weekday name length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayStyle {
    /// Abbreviated name ("Sat")
    Short,
    /// Full name ("Saturday")
    Long,
}

/// A supported locale: language, region, chrono table, hour-only pattern.
struct LocaleEntry {
    language: &'static str,
    region: &'static str,
    locale: Locale,
    hour_pattern: &'static str,
}

/// Supported locales. The first entry for a language is its default region.
const LOCALES: &[LocaleEntry] = &[
    LocaleEntry {
        language: "en",
        region: "US",
        locale: Locale::en_US,
        hour_pattern: "%-I %p",
    },
    LocaleEntry {
        language: "en",
        region: "GB",
        locale: Locale::en_GB,
        hour_pattern: "%H",
    },
    LocaleEntry {
        language: "de",
        region: "DE",
        locale: Locale::de_DE,
        hour_pattern: "%H Uhr",
    },
    LocaleEntry {
        language: "de",
        region: "AT",
        locale: Locale::de_AT,
        hour_pattern: "%H Uhr",
    },
    LocaleEntry {
        language: "fr",
        region: "FR",
        locale: Locale::fr_FR,
        hour_pattern: "%H h",
    },
    LocaleEntry {
        language: "es",
        region: "ES",
        locale: Locale::es_ES,
        hour_pattern: "%-H",
    },
    LocaleEntry {
        language: "it",
        region: "IT",
        locale: Locale::it_IT,
        hour_pattern: "%H",
    },
    LocaleEntry {
        language: "pt",
        region: "BR",
        locale: Locale::pt_BR,
        hour_pattern: "%H",
    },
    LocaleEntry {
        language: "nl",
        region: "NL",
        locale: Locale::nl_NL,
        hour_pattern: "%H",
    },
    LocaleEntry {
        language: "sv",
        region: "SE",
        locale: Locale::sv_SE,
        hour_pattern: "%H",
    },
    LocaleEntry {
        language: "ja",
        region: "JP",
        locale: Locale::ja_JP,
        hour_pattern: "%-H時",
    },
];

/// Formatter for month names, weekday names, and hour labels in one locale.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    tag: String,
    locale: Locale,
    hour_pattern: &'static str,
}

impl DateFormatter {
    /// Resolve a language tag such as `en`, `en-US`, or `de_DE`.
    ///
    /// Matching is case-insensitive. A language without a matching region
    /// uses that language's default region; a language with no table at all
    /// falls back to [`DEFAULT_LOCALE_TAG`] with a warning.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidLocale` if the tag is empty or its
    /// language subtag is not 2-3 ASCII letters.
    pub fn new(tag: &str) -> CalendarResult<Self> {
        let (language, region) = parse_tag(tag)?;

        let exact = LOCALES
            .iter()
            .find(|e| e.language == language && Some(e.region) == region.as_deref());
        let entry = match exact {
            Some(entry) => entry,
            None => match LOCALES.iter().find(|e| e.language == language) {
                Some(entry) => entry,
                None => {
                    warn!(tag, fallback = DEFAULT_LOCALE_TAG, "no locale data, falling back");
                    &LOCALES[0]
                }
            },
        };

        Ok(Self {
            tag: format!("{}-{}", entry.language, entry.region),
            locale: entry.locale,
            hour_pattern: entry.hour_pattern,
        })
    }

    /// The resolved tag, e.g. `de-DE` for an input of `de`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Long month name with its first letter upper-cased.
    pub fn month_name(&self, date: &NaiveDateTime) -> String {
        capitalize(&self.format(date, "%B"))
    }

    /// Weekday name with its first letter upper-cased.
    pub fn weekday_name(&self, date: &NaiveDateTime, style: WeekdayStyle) -> String {
        let pattern = match style {
            WeekdayStyle::Short => "%a",
            WeekdayStyle::Long => "%A",
        };
        capitalize(&self.format(date, pattern))
    }

    /// Hour-only label in the locale's clock convention.
    pub fn hour_label(&self, date: &NaiveDateTime) -> String {
        self.format(date, self.hour_pattern)
    }

    fn format(&self, date: &NaiveDateTime, pattern: &str) -> String {
        date.and_utc()
            .format_localized(pattern, self.locale)
            .to_string()
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        let entry = &LOCALES[0];
        Self {
            tag: DEFAULT_LOCALE_TAG.to_string(),
            locale: entry.locale,
            hour_pattern: entry.hour_pattern,
        }
    }
}

/// Split a tag into a lower-case language and an optional upper-case region.
fn parse_tag(tag: &str) -> CalendarResult<(String, Option<String>)> {
    let invalid = |reason: &str| CalendarError::InvalidLocale {
        tag: tag.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = tag.trim();
    if trimmed.is_empty() {
        return Err(invalid("tag is empty"));
    }

    let mut subtags = trimmed.split(['-', '_']);
    let language = subtags.next().unwrap_or_default();
    if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid("language must be 2-3 ASCII letters"));
    }

    // Script subtags ("Latn") and variants are skipped; the first two-letter
    // or three-digit subtag is the region.
    let region = subtags
        .find(|s| {
            (s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
                || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit()))
        })
        .map(str::to_ascii_uppercase);

    Ok((language.to_ascii_lowercase(), region))
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
