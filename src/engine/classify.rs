use crate::{CoverageVector, HOURS_PER_DAY};
use serde::Serialize;

/// Coverage quality of a single UTC hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Nobody on duty.
    Gap,
    /// Exactly one person: no redundancy.
    Warning,
    /// Two or more people.
    Good,
}

impl Tier {
    pub fn of(staff: u32) -> Tier {
        match staff {
            0 => Tier::Gap,
            1 => Tier::Warning,
            _ => Tier::Good,
        }
    }
}

/// Hours needing attention, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GapReport {
    /// Hours with zero coverage.
    pub gaps: Vec<usize>,
    /// Hours covered by a single person.
    pub warnings: Vec<usize>,
}

impl GapReport {
    /// No gaps and no single-person hours.
    pub fn is_fully_redundant(&self) -> bool {
        self.gaps.is_empty() && self.warnings.is_empty()
    }

    /// Hours in neither list.
    pub fn good_hours(&self) -> Vec<usize> {
        (0..HOURS_PER_DAY).filter(|h| !self.gaps.contains(h) && !self.warnings.contains(h)).collect()
    }
}

pub fn classify(coverage: &CoverageVector) -> GapReport {
    let mut report = GapReport::default();
    for (hour, staff) in coverage.iter().enumerate() {
        match Tier::of(staff) {
            Tier::Gap => report.gaps.push(hour),
            Tier::Warning => report.warnings.push(hour),
            Tier::Good => {}
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_by_staff_count() {
        assert_eq!(Tier::of(0), Tier::Gap);
        assert_eq!(Tier::of(1), Tier::Warning);
        assert_eq!(Tier::of(2), Tier::Good);
        assert_eq!(Tier::of(40), Tier::Good);
    }

    #[test]
    fn classify_partitions_every_hour() {
        let mut hours = [0; HOURS_PER_DAY];
        for (h, cell) in hours.iter_mut().enumerate() {
            *cell = (h % 3) as u32;
        }
        let report = classify(&CoverageVector::from(hours));
        let good = report.good_hours();

        assert_eq!(report.gaps.len() + report.warnings.len() + good.len(), HOURS_PER_DAY);
        for h in 0..HOURS_PER_DAY {
            let tier = Tier::of(hours[h]);
            assert_eq!(report.gaps.contains(&h), tier == Tier::Gap, "hour {h}");
            assert_eq!(report.warnings.contains(&h), tier == Tier::Warning, "hour {h}");
            assert_eq!(good.contains(&h), tier == Tier::Good, "hour {h}");
        }
    }

    #[test]
    fn empty_vector_is_all_gaps() {
        let report = classify(&CoverageVector::zeroed());
        assert_eq!(report.gaps, (0..HOURS_PER_DAY).collect::<Vec<_>>());
        assert!(report.warnings.is_empty());
        assert!(!report.is_fully_redundant());
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Warning).unwrap(), "\"warning\"");
    }
}
