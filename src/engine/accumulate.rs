//! Summing team windows into a coverage vector.
//!
//! A team whose timezone code is missing from the table does not abort the
//! batch. It becomes a [`TeamOutcome::Skipped`] carrying the lookup error, the
//! vector simply excludes it, and callers decide how to surface the skip.

use crate::engine::window::{UtcWindow, compute_utc_window};
use crate::error::CoverageError;
use crate::{CoverageVector, HOURS_PER_DAY, Team, TimezoneTable};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{debug, warn};

/// What the engine did with one team.
#[derive(Debug)]
pub enum TeamOutcome {
    /// The team contributed its staff over `window`.
    Counted(UtcWindow),
    /// The team was left out of the totals.
    Skipped(CoverageError),
}

impl TeamOutcome {
    pub fn window(&self) -> Option<&UtcWindow> {
        match self {
            TeamOutcome::Counted(window) => Some(window),
            TeamOutcome::Skipped(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<&CoverageError> {
        match self {
            TeamOutcome::Counted(_) => None,
            TeamOutcome::Skipped(err) => Some(err),
        }
    }

    pub fn is_counted(&self) -> bool {
        matches!(self, TeamOutcome::Counted(_))
    }
}

impl Serialize for TeamOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TeamOutcome", 2)?;
        match self {
            TeamOutcome::Counted(window) => {
                state.serialize_field("status", "counted")?;
                state.serialize_field("window", window)?;
            }
            TeamOutcome::Skipped(err) => {
                state.serialize_field("status", "skipped")?;
                state.serialize_field("reason", &err.to_string())?;
            }
        }
        state.end()
    }
}

/// Result of a batch run: the summed vector plus one outcome per input team,
/// in input order.
#[derive(Debug)]
pub struct Accumulation {
    pub coverage: CoverageVector,
    pub outcomes: Vec<TeamOutcome>,
}

impl Accumulation {
    pub fn counted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_counted()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.counted()
    }
}

/// Resolve one team's offset and convert its local window to UTC.
pub fn resolve_team(team: &Team, table: &TimezoneTable) -> TeamOutcome {
    match table.resolve_offset(&team.timezone) {
        Ok(offset) => {
            let window = compute_utc_window(team.local_start(), team.local_end(), offset);
            debug!(
                region = %team.region,
                timezone = %team.timezone,
                offset,
                utc_start = window.start,
                utc_end = window.end,
                wraps = window.wraps,
                "resolved team window"
            );
            TeamOutcome::Counted(window)
        }
        Err(err) => {
            warn!(region = %team.region, error = %err, "skipping team");
            TeamOutcome::Skipped(err)
        }
    }
}

/// Sum every team's staff into the hours its UTC window covers, keeping a
/// per-team outcome.
pub fn accumulate_outcomes(teams: &[Team], table: &TimezoneTable) -> Accumulation {
    let mut coverage = CoverageVector::zeroed();
    let mut outcomes = Vec::with_capacity(teams.len());

    for team in teams {
        let outcome = resolve_team(team, table);
        if let TeamOutcome::Counted(window) = &outcome {
            for hours in window.bucket_ranges() {
                coverage.add_range(hours, team.number_of_staff);
            }
        }
        outcomes.push(outcome);
    }

    Accumulation { coverage, outcomes }
}

/// Staff on duty per UTC hour. Teams with unknown timezones are left out.
pub fn accumulate(teams: &[Team], table: &TimezoneTable) -> CoverageVector {
    accumulate_outcomes(teams, table).coverage
}

/// One team's own contribution: its staff in every covered hour, zero elsewhere.
pub(crate) fn team_row(team: &Team, outcome: &TeamOutcome) -> [u32; HOURS_PER_DAY] {
    let mut row = [0; HOURS_PER_DAY];
    if let Some(window) = outcome.window() {
        for (hour, cell) in row.iter_mut().enumerate() {
            if window.covers(hour) {
                *cell = team.number_of_staff;
            }
        }
    }
    row
}
