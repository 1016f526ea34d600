use crate::error::{CoverageError, Result};
use once_cell::sync::Lazy;

// Fixed offsets only: no DST rules, no history. `IST` really is +5:30, and the
// engine floors the shifted window onto whole UTC hours.
const DEFAULT_OFFSETS: &[(&str, f64)] = &[
    ("AEST", 10.0),     // Australian Eastern Standard Time
    ("AEDT", 11.0),     // Australian Eastern Daylight Time
    ("NZST", 12.0),     // New Zealand Standard Time
    ("NZDT", 13.0),     // New Zealand Daylight Time
    ("JST", 9.0),       // Japan Standard Time
    ("KST", 9.0),       // Korea Standard Time
    ("CST_CHINA", 8.0), // China Standard Time
    ("IST", 5.5),       // India Standard Time
    ("GST", 4.0),       // Gulf Standard Time
    ("MSK", 3.0),       // Moscow Standard Time
    ("EET", 2.0),       // Eastern European Time
    ("CET", 1.0),       // Central European Time
    ("GMT", 0.0),
    ("UTC", 0.0),
    ("WET", 0.0),       // Western European Time
    ("AST", -4.0),      // Atlantic Standard Time
    ("EST", -5.0),      // Eastern Standard Time
    ("CST", -6.0),      // Central Standard Time (North America)
    ("MST", -7.0),      // Mountain Standard Time
    ("PST", -8.0),      // Pacific Standard Time
    ("AKST", -9.0),     // Alaska Standard Time
    ("HST", -10.0),     // Hawaii Standard Time
    ("BRT", -3.0),      // Brazil Time
    ("ART", -3.0),      // Argentina Time
];

static DEFAULT_TABLE: Lazy<TimezoneTable> = Lazy::new(|| TimezoneTable::new(DEFAULT_OFFSETS.iter().copied()));

/// Immutable mapping from timezone code to UTC offset in hours.
///
/// Codes keep their insertion order so listings are stable. Lookups are
/// exact: `"est"` is not `"EST"`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimezoneTable {
    entries: Vec<(String, f64)>,
}

impl TimezoneTable {
    /// Build a table from `(code, offset_hours)` pairs. A repeated code keeps
    /// its first position and takes the last offset.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut table: Vec<(String, f64)> = Vec::new();
        for (code, offset) in entries {
            let code = code.into();
            match table.iter_mut().find(|(existing, _)| *existing == code) {
                Some(slot) => slot.1 = offset,
                None => table.push((code, offset)),
            }
        }
        Self { entries: table }
    }

    /// The built-in table of 24 common support-desk timezones.
    pub fn default_table() -> &'static TimezoneTable {
        &DEFAULT_TABLE
    }

    /// Offset of `code` in hours east of UTC.
    pub fn resolve_offset(&self, code: &str) -> Result<f64> {
        self.entries
            .iter()
            .find(|(known, _)| known == code)
            .map(|(_, offset)| *offset)
            .ok_or_else(|| CoverageError::UnknownTimezone(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|(known, _)| known == code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(code, offset)| (code.as_str(), *offset))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TimezoneTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}
