use crate::engine::{self, GapReport, RunMetrics, TeamOutcome, Tier};
use crate::format::format_ranges;
use crate::{CoverageVector, HOURS_PER_DAY, Team, TimezoneTable};
use serde::Serialize;
use std::fmt;
use std::time::Instant;
use tracing::info;

/// One team's line in a report.
#[derive(Debug, Serialize)]
pub struct TeamCoverage {
    pub region: String,
    pub timezone: String,
    pub local_working_hours: (u8, u8),
    pub number_of_staff: u32,
    pub outcome: TeamOutcome,
    /// The team's own contribution per UTC hour; all zeros when skipped.
    pub row: [u32; HOURS_PER_DAY],
}

impl TeamCoverage {
    fn new(team: &Team, outcome: TeamOutcome) -> Self {
        let row = engine::team_row(team, &outcome);
        Self {
            region: team.region.clone(),
            timezone: team.timezone.clone(),
            local_working_hours: team.local_working_hours,
            number_of_staff: team.number_of_staff,
            outcome,
            row,
        }
    }

    pub fn is_skipped(&self) -> bool {
        !self.outcome.is_counted()
    }
}

/// Roster-wide figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverageSummary {
    /// Staff across every team in the roster, skipped teams included.
    pub total_staff: u64,
    /// Number of teams in the roster.
    pub regions: usize,
    /// Mean staff on duty per UTC hour.
    pub average_coverage: f64,
    pub teams_counted: usize,
    pub teams_skipped: usize,
}

/// Suggested follow-up for a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "hours", rename_all = "snake_case")]
pub enum Recommendation {
    /// Hours with nobody on duty, formatted with [`format_ranges`].
    AddCoverage(String),
    /// Hours with a single person on duty.
    AddRedundancy(String),
    /// Two or more people every hour.
    FullRedundancy,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::AddCoverage(hours) => write!(f, "Critical: Add coverage for {hours} UTC"),
            Recommendation::AddRedundancy(hours) => {
                write!(f, "Consider: Additional staff for {hours} UTC to ensure redundancy")
            }
            Recommendation::FullRedundancy => {
                write!(f, "Excellent coverage: 2+ people available 24/7 with full redundancy")
            }
        }
    }
}

/// Result of [`analyze`] and [`analyze_with`].
#[derive(Debug, Serialize)]
pub struct CoverageReport {
    pub coverage: CoverageVector,
    pub gaps: GapReport,
    pub teams: Vec<TeamCoverage>,
    pub summary: CoverageSummary,
}

impl CoverageReport {
    /// Coverage tier of one UTC hour.
    ///
    /// # Panics
    ///
    /// Panics if `hour >= HOURS_PER_DAY`.
    pub fn tier(&self, hour: usize) -> Tier {
        Tier::of(self.coverage[hour])
    }

    pub fn tiers(&self) -> [Tier; HOURS_PER_DAY] {
        std::array::from_fn(|hour| self.tier(hour))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &TeamCoverage> + '_ {
        self.teams.iter().filter(|t| t.is_skipped())
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        if self.gaps.is_fully_redundant() {
            return vec![Recommendation::FullRedundancy];
        }

        let mut out = Vec::new();
        if !self.gaps.gaps.is_empty() {
            out.push(Recommendation::AddCoverage(format_ranges(&self.gaps.gaps)));
        }
        if !self.gaps.warnings.is_empty() {
            out.push(Recommendation::AddRedundancy(format_ranges(&self.gaps.warnings)));
        }
        out
    }
}

/// Result of [`analyze_verbose_with`].
#[derive(Debug)]
pub struct CoverageReportVerbose {
    pub report: CoverageReport,
    pub metrics: RunMetrics,
}

/// Analyze `teams` against the built-in timezone table.
///
/// # Example
/// ```
/// use tzcoverage::{analyze, sample_roster};
///
/// let report = analyze(&sample_roster());
/// assert_eq!(report.summary.regions, 7);
/// assert_eq!(report.coverage.as_array().len(), 24);
/// ```
pub fn analyze(teams: &[Team]) -> CoverageReport {
    analyze_with(teams, TimezoneTable::default_table())
}

/// Analyze `teams`, resolving timezone codes through `table`.
///
/// Never fails: teams with unknown codes are reported as skipped and left out
/// of the totals. An empty roster yields 24 gap hours.
pub fn analyze_with(teams: &[Team], table: &TimezoneTable) -> CoverageReport {
    let run = engine::accumulate_outcomes(teams, table);
    build_report(teams, run)
}

/// Like [`analyze_with`], also timing each stage.
pub fn analyze_verbose_with(teams: &[Team], table: &TimezoneTable) -> CoverageReportVerbose {
    let started = Instant::now();
    let run = engine::accumulate_outcomes(teams, table);
    let accumulate = started.elapsed();

    let (teams_counted, teams_skipped) = (run.counted(), run.skipped());
    let classify_started = Instant::now();
    let report = build_report(teams, run);
    let classify = classify_started.elapsed();

    let metrics = RunMetrics { total: started.elapsed(), accumulate, classify, teams_counted, teams_skipped };
    CoverageReportVerbose { report, metrics }
}

fn build_report(teams: &[Team], run: engine::Accumulation) -> CoverageReport {
    let (teams_counted, teams_skipped) = (run.counted(), run.skipped());
    let coverage = run.coverage;
    let gaps = engine::classify(&coverage);

    let summary = CoverageSummary {
        total_staff: teams.iter().map(|t| u64::from(t.number_of_staff)).sum(),
        regions: teams.len(),
        average_coverage: coverage.average(),
        teams_counted,
        teams_skipped,
    };

    info!(
        teams = teams.len(),
        skipped = teams_skipped,
        gaps = gaps.gaps.len(),
        warnings = gaps.warnings.len(),
        "coverage analyzed"
    );

    let teams = teams.iter().zip(run.outcomes).map(|(team, outcome)| TeamCoverage::new(team, outcome)).collect();

    CoverageReport { coverage, gaps, teams, summary }
}
