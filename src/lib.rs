//! UTC staff-coverage calculator for follow-the-sun support rosters.
//!
//! Each [`Team`] works a local-hours window in some timezone. The engine shifts
//! every window onto the UTC day, adds the team's staff to the hour buckets it
//! covers and classifies the resulting [`CoverageVector`] into gaps (nobody on
//! duty), warnings (a single person) and well-covered hours.
//!
//! ```
//! use tzcoverage::{Team, analyze};
//!
//! let teams = vec![Team::new("US East", "EST", 7, 15, 1)];
//! let report = analyze(&teams);
//!
//! assert_eq!(report.coverage[12], 1);
//! assert_eq!(tzcoverage::format_ranges(&report.gaps.warnings), "12:00-20:00");
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod format;
mod roster;
mod timezone;

pub use api::{
    CoverageReport, CoverageReportVerbose, CoverageSummary, Recommendation, TeamCoverage, analyze,
    analyze_verbose_with, analyze_with,
};
pub use engine::{
    Accumulation, GapReport, RunMetrics, Tier, TeamOutcome, UtcWindow, accumulate, accumulate_outcomes, classify,
    compute_utc_window, resolve_team,
};
pub use error::{CoverageError, Result};
pub use format::{format_hour, format_ranges};
pub use roster::{load_roster_json, parse_team_spec, sample_roster, validate_roster};
pub use timezone::TimezoneTable;

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::ops::{Index, Range};

/// Number of one-hour buckets in the UTC day.
pub const HOURS_PER_DAY: usize = 24;

// --- Data model -------------------------------------------------------------

/// A support team working a fixed local-hours window.
///
/// Field names match the JSON roster format, so a roster file is just an
/// array of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Display label, e.g. `"Queensland"`.
    pub region: String,
    /// Code looked up in a [`TimezoneTable`], e.g. `"AEST"`.
    pub timezone: String,
    /// Local `(start, end)` hours, half-open. Both in `0..=24`, `start < end`.
    pub local_working_hours: (u8, u8),
    pub number_of_staff: u32,
}

impl Team {
    pub fn new(
        region: impl Into<String>,
        timezone: impl Into<String>,
        start: u8,
        end: u8,
        number_of_staff: u32,
    ) -> Self {
        Self {
            region: region.into(),
            timezone: timezone.into(),
            local_working_hours: (start, end),
            number_of_staff,
        }
    }

    pub fn local_start(&self) -> u8 {
        self.local_working_hours.0
    }

    pub fn local_end(&self) -> u8 {
        self.local_working_hours.1
    }
}

/// Staff on duty for each UTC hour, indexed `0..24`.
///
/// Always exactly [`HOURS_PER_DAY`] entries; built fresh by every
/// [`accumulate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CoverageVector([u32; HOURS_PER_DAY]);

impl CoverageVector {
    /// All-zero vector: every hour is a gap.
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn from_array(hours: [u32; HOURS_PER_DAY]) -> Self {
        Self(hours)
    }

    pub fn as_array(&self) -> &[u32; HOURS_PER_DAY] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// Staff on duty during `hour`, or `None` past the end of the day.
    pub fn get(&self, hour: usize) -> Option<u32> {
        self.0.get(hour).copied()
    }

    /// Staff-hours across the whole day.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&staff| u64::from(staff)).sum()
    }

    /// Mean staff on duty per hour.
    pub fn average(&self) -> f64 {
        self.total() as f64 / HOURS_PER_DAY as f64
    }

    /// Staff on duty during the UTC hour containing `instant`.
    pub fn at(&self, instant: DateTime<Utc>) -> u32 {
        self.0[instant.hour() as usize]
    }

    /// Add `staff` to every bucket in `hours`. Out-of-day indices are clipped
    /// and buckets saturate at `u32::MAX`.
    pub(crate) fn add_range(&mut self, hours: Range<usize>, staff: u32) {
        let end = hours.end.min(HOURS_PER_DAY);
        for bucket in &mut self.0[hours.start.min(end)..end] {
            *bucket = bucket.saturating_add(staff);
        }
    }
}

/// # Panics
///
/// Panics if `hour >= HOURS_PER_DAY`; use [`CoverageVector::get`] otherwise.
impl Index<usize> for CoverageVector {
    type Output = u32;

    fn index(&self, hour: usize) -> &u32 {
        &self.0[hour]
    }
}

impl From<[u32; HOURS_PER_DAY]> for CoverageVector {
    fn from(hours: [u32; HOURS_PER_DAY]) -> Self {
        Self(hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn add_range_clips_to_the_day() {
        let mut v = CoverageVector::zeroed();
        v.add_range(20..30, 2);
        v.add_range(5..5, 9);

        assert_eq!(v.total(), 8);
        assert_eq!(v[23], 2);
        assert_eq!(v[5], 0);
    }

    #[test]
    fn at_uses_utc_hour_of_instant() {
        let mut hours = [0; HOURS_PER_DAY];
        hours[14] = 3;
        let v = CoverageVector::from(hours);
        let instant = Utc.with_ymd_and_hms(2024, 6, 1, 14, 59, 0).unwrap();

        assert_eq!(v.at(instant), 3);
        assert_eq!(v.average(), 0.125);
    }

    #[test]
    fn large_staff_counts_saturate_instead_of_overflowing() {
        let mut v = CoverageVector::zeroed();
        v.add_range(9..17, 3_000_000_000);
        v.add_range(9..17, 3_000_000_000);

        assert_eq!(v[9], u32::MAX);
        assert_eq!(v.total(), 8 * u64::from(u32::MAX));

        let mut single = CoverageVector::zeroed();
        single.add_range(9..17, 1_000_000_000);
        assert_eq!(single.total(), 8_000_000_000);
        assert_eq!(single.average(), 8_000_000_000.0 / 24.0);
    }

    #[test]
    fn get_is_none_past_the_day() {
        let v = CoverageVector::from([1; HOURS_PER_DAY]);
        assert_eq!(v.get(23), Some(1));
        assert_eq!(v.get(HOURS_PER_DAY), None);
    }
}
