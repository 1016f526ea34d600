use crate::engine::{TeamOutcome, accumulate, accumulate_outcomes, classify, compute_utc_window};
use crate::error::CoverageError;
use crate::{CoverageVector, HOURS_PER_DAY, Team, TimezoneTable, sample_roster};

fn covered_hours(v: &CoverageVector) -> Vec<usize> {
    (0..HOURS_PER_DAY).filter(|&h| v[h] > 0).collect()
}

#[test]
fn single_team_scenarios() {
    // (timezone, local start, local end, staff, expected covered UTC hours)
    let cases: Vec<(&str, u8, u8, u32, Vec<usize>)> = vec![
        ("EST", 7, 15, 1, (12..20).collect()),
        ("IST", 12, 20, 5, (6..14).collect()),
        ("NZST", 9, 17, 1, (0..5).chain(21..24).collect()),
        ("AEST", 9, 17, 1, (0..7).chain(23..24).collect()),
        ("GMT", 9, 17, 5, (9..17).collect()),
        ("HST", 9, 17, 2, (0..3).chain(19..24).collect()),
        ("UTC", 16, 24, 1, (16..24).collect()),
        ("CST_CHINA", 0, 8, 3, (16..24).collect()),
    ];

    let table = TimezoneTable::default_table();
    for (tz, start, end, staff, expected) in cases {
        let team = Team::new("Team", tz, start, end, staff);
        let v = accumulate(std::slice::from_ref(&team), table);

        assert_eq!(covered_hours(&v), expected, "{tz} {start}-{end}");
        assert!(v.iter().all(|s| s == 0 || s == staff), "{tz} {start}-{end}");
    }
}

#[test]
fn total_equals_staff_times_hours_covered() {
    let table = TimezoneTable::default_table();
    let mut teams = sample_roster();
    teams.push(Team::new("Hawaii", "HST", 6, 14, 2));
    teams.push(Team::new("Alaska", "AKST", 0, 24, 1));
    teams.push(Team::new("Moscow", "MSK", 20, 23, 4));

    let run = accumulate_outcomes(&teams, table);
    let expected: usize = teams
        .iter()
        .zip(&run.outcomes)
        .filter_map(|(team, outcome)| outcome.window().map(|w| team.number_of_staff as usize * w.hours_covered()))
        .sum();

    assert_eq!(run.coverage.total() as usize, expected);
}

#[test]
fn per_hour_value_is_sum_of_covering_teams() {
    let table = TimezoneTable::default_table();
    let teams = sample_roster();
    let run = accumulate_outcomes(&teams, table);

    for hour in 0..HOURS_PER_DAY {
        let expected: u32 = teams
            .iter()
            .zip(&run.outcomes)
            .filter(|(_, outcome)| outcome.window().is_some_and(|w| w.covers(hour)))
            .map(|(team, _)| team.number_of_staff)
            .sum();
        assert_eq!(run.coverage[hour], expected, "hour {hour}");
    }
}

#[test]
fn unknown_timezone_among_valid_teams() {
    let table = TimezoneTable::default_table();
    let valid = vec![Team::new("US East", "EST", 7, 15, 1), Team::new("India", "IST", 12, 20, 5)];
    let mut teams = valid.clone();
    teams.insert(1, Team::new("Atlantis", "ATL", 9, 17, 10));

    let run = accumulate_outcomes(&teams, table);

    assert_eq!(run.coverage, accumulate(&valid, table));
    assert!(matches!(&run.outcomes[1], TeamOutcome::Skipped(CoverageError::UnknownTimezone(code)) if code == "ATL"));
    assert!(run.outcomes[0].is_counted());
    assert!(run.outcomes[2].is_counted());
}

#[test]
fn one_hour_window_at_half_hour_offset_keeps_one_bucket() {
    // 20:00-21:00 local at +5:30 lands on 14:30-15:30 UTC.
    let w = compute_utc_window(20, 21, 5.5);
    assert_eq!((w.start_bucket(), w.end_bucket()), (14, 15));
    assert_eq!(w.hours_covered(), 1);
}

#[test]
fn window_collapsing_to_one_point_covers_nothing() {
    // A full local day at +5:30 normalizes to 18:30-18:30.
    let team = Team::new("India", "IST", 0, 24, 3);
    let v = accumulate(&[team], TimezoneTable::default_table());
    assert_eq!(v, CoverageVector::zeroed());
}

#[test]
fn repeated_runs_are_identical() {
    let table = TimezoneTable::default_table();
    let teams = sample_roster();
    let first = accumulate(&teams, table);
    let second = accumulate(&teams, table);
    assert_eq!(first, second);
    assert_eq!(classify(&first), classify(&second));
}

#[test]
fn invalid_window_does_not_panic() {
    // Callers should reject these; the engine only has to stay well-behaved.
    let teams = vec![
        Team::new("Backwards", "GMT", 17, 9, 1),
        Team::new("Too late", "NZDT", 30, 40, 1),
        Team::new("Empty", "CET", 9, 9, 1),
    ];
    let v = accumulate(&teams, TimezoneTable::default_table());
    assert!(v.iter().all(|s| s <= 3));
}
