//! Error types shared by the engine and roster handling.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoverageError>;

/// Everything that can go wrong between reading a roster and reporting on it.
///
/// Only [`CoverageError::UnknownTimezone`] is produced by the engine itself,
/// and the engine never propagates it: the affected team is skipped and the
/// error is kept on its [`TeamOutcome`](crate::TeamOutcome). The remaining
/// variants come from roster validation, which callers run before the engine.
#[derive(Debug, Error)]
pub enum CoverageError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Team {team}: End time must be after start time (got {start}:00-{end}:00)")]
    InvalidWindow { team: usize, start: u8, end: u8 },

    #[error("Team {team}: working hours must be within 0-24 (got {start}:00-{end}:00)")]
    HoursOutOfRange { team: usize, start: u8, end: u8 },

    #[error("Team {team}: Missing required field '{field}'")]
    MissingField { team: usize, field: &'static str },

    #[error("Team {team}: number_of_staff must be at least 1")]
    InvalidStaff { team: usize },

    #[error("invalid team spec '{0}' (expected REGION:TZ:START-END[:STAFF])")]
    InvalidTeamSpec(String),

    #[error("invalid roster: {0}")]
    Roster(#[from] serde_json::Error),
}

impl CoverageError {
    /// True for errors that mean the caller should have rejected the team
    /// before handing it to the engine.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CoverageError::InvalidWindow { .. }
                | CoverageError::HoursOutOfRange { .. }
                | CoverageError::MissingField { .. }
                | CoverageError::InvalidStaff { .. }
        )
    }
}
