//! Local-to-UTC window conversion.
//!
//! A local window `[start, end)` is shifted by the team's UTC offset and
//! brought back into the UTC day with a single correction pass. The result may
//! cross midnight (`wraps`), in which case it covers `[start, 24)` and
//! `[0, end)`.
//!
//! Bucket boundaries are the *floors* of the shifted values. A +5:30 team
//! working 12:00-20:00 local lands on 06:30-14:30 UTC and therefore covers the
//! buckets 6..14. Downstream range formatting relies on these whole-hour
//! boundaries.

use crate::HOURS_PER_DAY;
use serde::Serialize;
use std::ops::Range;

const DAY: f64 = HOURS_PER_DAY as f64;

/// A working window expressed in UTC hours.
///
/// `start` lies in `[0, 24)` and `end` in `(0, 24]` whenever the local hours
/// are within `0..=24` and the offset magnitude is at most 24.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UtcWindow {
    pub start: f64,
    pub end: f64,
    /// The window crosses UTC midnight (`end < start`).
    pub wraps: bool,
}

impl UtcWindow {
    /// First covered bucket.
    pub fn start_bucket(&self) -> usize {
        bucket(self.start)
    }

    /// Bucket just past the last covered one (before wrapping).
    pub fn end_bucket(&self) -> usize {
        bucket(self.end)
    }

    /// The bucket ranges this window covers. The second range is empty unless
    /// the window wraps.
    pub fn bucket_ranges(&self) -> [Range<usize>; 2] {
        let (start, end) = (self.start_bucket(), self.end_bucket());
        if self.wraps { [start..HOURS_PER_DAY, 0..end] } else { [start..end.max(start), 0..0] }
    }

    pub fn covers(&self, hour: usize) -> bool {
        self.bucket_ranges().iter().any(|range| range.contains(&hour))
    }

    /// Number of UTC buckets covered.
    pub fn hours_covered(&self) -> usize {
        self.bucket_ranges().iter().map(|range| range.len()).sum()
    }
}

/// Convert the local half-open window `[local_start, local_end)` at `offset`
/// hours east of UTC into a [`UtcWindow`].
///
/// Only one correction pass is applied, so inputs outside `0..=24` local hours
/// or offsets beyond ±24 are not normalized fully. They still produce a window
/// whose buckets are clipped to the day.
pub fn compute_utc_window(local_start: u8, local_end: u8, offset: f64) -> UtcWindow {
    let mut start = f64::from(local_start) - offset;
    let mut end = f64::from(local_end) - offset;

    if start < 0.0 {
        start += DAY;
    }
    if end <= 0.0 {
        end += DAY;
    }
    if start >= DAY {
        start -= DAY;
    }
    if end > DAY {
        end -= DAY;
    }

    UtcWindow { start, end, wraps: end < start }
}

fn bucket(hour: f64) -> usize {
    // Float-to-int casts saturate; the clamp keeps out-of-range input inside the day.
    hour.floor().clamp(0.0, DAY) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_offset_shifts_forward() {
        let w = compute_utc_window(7, 15, -5.0);
        assert_eq!(w, UtcWindow { start: 12.0, end: 20.0, wraps: false });
        assert_eq!(w.bucket_ranges(), [12..20, 0..0]);
        assert_eq!(w.hours_covered(), 8);
    }

    #[test]
    fn fractional_offset_floors_both_ends() {
        let w = compute_utc_window(12, 20, 5.5);
        assert_eq!((w.start, w.end, w.wraps), (6.5, 14.5, false));
        assert_eq!((w.start_bucket(), w.end_bucket()), (6, 14));
        assert!(w.covers(6));
        assert!(w.covers(13));
        assert!(!w.covers(14));
    }

    #[test]
    fn window_crossing_midnight_wraps() {
        let w = compute_utc_window(9, 17, 12.0);
        assert_eq!((w.start, w.end, w.wraps), (21.0, 5.0, true));
        assert_eq!(w.bucket_ranges(), [21..24, 0..5]);
        assert_eq!(w.hours_covered(), 8);
    }

    #[test]
    fn end_exactly_at_midnight_stays_at_24() {
        let w = compute_utc_window(16, 24, 0.0);
        assert_eq!((w.start, w.end, w.wraps), (16.0, 24.0, false));

        let w = compute_utc_window(0, 8, 8.0);
        assert_eq!((w.start, w.end, w.wraps), (16.0, 24.0, false));
        assert_eq!(w.bucket_ranges(), [16..24, 0..0]);
    }

    #[test]
    fn start_at_or_past_24_is_pulled_back() {
        let w = compute_utc_window(20, 24, -4.0);
        assert_eq!((w.start, w.end, w.wraps), (0.0, 4.0, false));
    }

    #[test]
    fn full_day_collapses_to_empty_window() {
        // start == end after normalization: half-open, so no buckets.
        let w = compute_utc_window(0, 24, 13.0);
        assert_eq!((w.start, w.end, w.wraps), (11.0, 11.0, false));
        assert_eq!(w.hours_covered(), 0);
    }

    #[test]
    fn offset_is_periodic_within_correction_bounds() {
        let cases: Vec<(u8, u8, f64)> = vec![(7, 15, -5.0), (12, 20, 5.5), (9, 17, -10.0), (0, 6, -12.0), (3, 11, 0.0)];
        for (start, end, offset) in cases {
            assert_eq!(
                compute_utc_window(start, end, offset),
                compute_utc_window(start, end, offset + 24.0),
                "offset {offset} vs {}",
                offset + 24.0
            );
        }
    }

    #[test]
    fn out_of_range_input_does_not_panic() {
        let w = compute_utc_window(30, 40, -30.0);
        assert!(w.hours_covered() <= HOURS_PER_DAY);
        let w = compute_utc_window(0, 1, 60.0);
        assert!(w.hours_covered() <= HOURS_PER_DAY);
    }
}
