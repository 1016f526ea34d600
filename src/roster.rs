//! Roster input: validation, inline team specs, JSON files and the sample
//! roster.
//!
//! Validation belongs to the caller. The engine accepts any team and treats
//! a bad window as unspecified (never a panic), so front ends run
//! [`validate_roster`] before analysis and show the first problem found.

use crate::error::{CoverageError, Result};
use crate::{HOURS_PER_DAY, Team};

impl Team {
    /// Check the fields the engine assumes. `number` is the 1-based position
    /// used in error messages.
    ///
    /// The timezone code is only checked for presence: an unknown code is
    /// reported by the engine as a skipped team, not rejected up front.
    pub fn validate(&self, number: usize) -> Result<()> {
        if self.region.trim().is_empty() {
            return Err(CoverageError::MissingField { team: number, field: "region" });
        }
        if self.timezone.trim().is_empty() {
            return Err(CoverageError::MissingField { team: number, field: "timezone" });
        }

        let (start, end) = self.local_working_hours;
        if usize::from(start) > HOURS_PER_DAY || usize::from(end) > HOURS_PER_DAY {
            return Err(CoverageError::HoursOutOfRange { team: number, start, end });
        }
        if start >= end {
            return Err(CoverageError::InvalidWindow { team: number, start, end });
        }
        if self.number_of_staff == 0 {
            return Err(CoverageError::InvalidStaff { team: number });
        }
        Ok(())
    }
}

/// Validate every team, stopping at the first failure.
pub fn validate_roster(teams: &[Team]) -> Result<()> {
    teams.iter().enumerate().try_for_each(|(idx, team)| team.validate(idx + 1))
}

/// Parse an inline `REGION:TZ:START-END[:STAFF]` spec, e.g.
/// `"US East:EST:7-15:2"`. Staff defaults to 1.
///
/// Only the shape is checked here; run [`Team::validate`] for the window.
pub fn parse_team_spec(spec: &str) -> Result<Team> {
    let re = regex!(r"^\s*([^:]*[^:\s])\s*:\s*([A-Za-z_]+)\s*:\s*(\d{1,2})\s*-\s*(\d{1,2})\s*(?::\s*(\d+)\s*)?$");
    let invalid = || CoverageError::InvalidTeamSpec(spec.to_string());

    let caps = re.captures(spec).ok_or_else(invalid)?;
    let start: u8 = caps[3].parse().map_err(|_| invalid())?;
    let end: u8 = caps[4].parse().map_err(|_| invalid())?;
    let staff: u32 = match caps.get(5) {
        Some(m) => m.as_str().parse().map_err(|_| invalid())?,
        None => 1,
    };

    Ok(Team::new(caps[1].trim(), &caps[2], start, end, staff))
}

/// Parse a JSON array of teams using the roster field names:
///
/// ```json
/// [{"region": "UK", "timezone": "GMT", "local_working_hours": [9, 17], "number_of_staff": 5}]
/// ```
pub fn load_roster_json(json: &str) -> Result<Vec<Team>> {
    Ok(serde_json::from_str(json)?)
}

/// A seven-region roster spanning Oceania, Asia, Europe and the US east coast.
pub fn sample_roster() -> Vec<Team> {
    vec![
        Team::new("Queensland", "AEST", 9, 17, 1),
        Team::new("New Zealand", "NZST", 9, 17, 1),
        Team::new("India", "IST", 12, 20, 5),
        Team::new("UK", "GMT", 9, 17, 5),
        Team::new("Spain", "CET", 9, 17, 1),
        Team::new("Bulgaria", "EET", 10, 18, 3),
        Team::new("US East", "EST", 7, 15, 1),
    ]
}
