//! Human-readable hour ranges.

/// `"HH:00"`, zero-padded. `24` renders as `"24:00"` (end of day).
pub fn format_hour(hour: usize) -> String {
    format!("{hour:02}:00")
}

/// Merge ascending hour indices into runs.
///
/// A lone hour renders as `"HH:00"`. A run renders half-open, ending at the
/// hour after its last member: `[0, 1, 2, 5]` becomes `"00:00-03:00, 05:00"`.
/// An empty slice renders as `"None"`.
pub fn format_ranges(hours: &[usize]) -> String {
    let Some((&first, rest)) = hours.split_first() else {
        return "None".to_string();
    };

    let mut ranges: Vec<String> = Vec::new();
    let (mut start, mut end) = (first, first);

    for &hour in rest {
        if hour == end + 1 {
            end = hour;
        } else {
            ranges.push(format_run(start, end));
            start = hour;
            end = hour;
        }
    }
    ranges.push(format_run(start, end));

    ranges.join(", ")
}

fn format_run(start: usize, end: usize) -> String {
    if start == end { format_hour(start) } else { format!("{}-{}", format_hour(start), format_hour(end + 1)) }
}
