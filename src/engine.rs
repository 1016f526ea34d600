//! Coverage engine.
//!
//! Turning a roster into a coverage picture is a short pipeline of pure
//! functions:
//!
//! ```text
//! Team ── TimezoneTable::resolve_offset ──┐
//!                                          │  unknown code → TeamOutcome::Skipped
//!                                          v
//!              compute_utc_window                 (window.rs)
//!                - shift local hours by the offset
//!                - one normalization pass into the UTC day
//!                - floor to whole-hour buckets
//!                                          │
//!                                          v
//!              accumulate_outcomes                (accumulate.rs)
//!                - add staff to covered buckets
//!                - keep one TeamOutcome per team
//!                                          │
//!                                          v
//!              classify                           (classify.rs)
//!                - 0 → gap, 1 → warning, 2+ → good
//! ```
//!
//! Nothing here holds state between calls: every run starts from a zeroed
//! [`CoverageVector`](crate::CoverageVector) and reads the roster and table
//! through shared references.
//!
//! ## Responsibilities by module
//!
//! - `window.rs`: local-to-UTC conversion and bucket boundaries.
//! - `accumulate.rs`: per-team outcomes and the summed vector.
//! - `classify.rs`: coverage tiers and the gap report.
//! - `metrics.rs`: timing and counts for verbose runs.
//!
//! ## Debugging
//!
//! Run with `RUST_LOG=tzcoverage=debug` to trace each team's UTC window.

#[path = "engine/accumulate.rs"]
mod accumulate;
#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/metrics.rs"]
mod metrics;
#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;
#[path = "engine/window.rs"]
mod window;

pub use accumulate::{Accumulation, TeamOutcome, accumulate, accumulate_outcomes, resolve_team};
pub(crate) use accumulate::team_row;
pub use classify::{GapReport, Tier, classify};
pub use metrics::RunMetrics;
pub use window::{UtcWindow, compute_utc_window};
