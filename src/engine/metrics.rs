//! Run metrics for verbose analysis.
//!
//! Collected only by [`analyze_verbose_with`](crate::analyze_verbose_with);
//! the plain [`analyze_with`](crate::analyze_with) path skips the timers.

use std::time::Duration;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Time spent resolving offsets and summing windows.
    pub accumulate: Duration,
    /// Time spent classifying hours and building the summary.
    pub classify: Duration,
    pub teams_counted: usize,
    pub teams_skipped: usize,
}
