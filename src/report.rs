use chrono::{DateTime, Timelike, Utc};
use std::fmt;
use tzcoverage::{
    CoverageReport, HOURS_PER_DAY, Recommendation, RunMetrics, TeamCoverage, Tier, TimezoneTable, format_ranges,
};

const LABEL_WIDTH: usize = 22;

/// Terminal styling. Every tint is a single SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tint {
    Bold,
    Dim,
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
    Gray,
}

impl Tint {
    fn sgr(self) -> u8 {
        match self {
            Tint::Bold => 1,
            Tint::Dim => 2,
            Tint::Red => 31,
            Tint::Green => 32,
            Tint::Yellow => 33,
            Tint::Blue => 34,
            Tint::Cyan => 36,
            Tint::Gray => 90,
        }
    }

    fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Gap => Tint::Red,
            Tier::Warning => Tint::Yellow,
            Tier::Good => Tint::Green,
        }
    }
}

struct Palette {
    enabled: bool,
}

impl Palette {
    fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, text: impl fmt::Display, tint: Tint) -> String {
        if self.enabled { format!("\x1b[{}m{text}\x1b[0m", tint.sgr()) } else { text.to_string() }
    }
}

pub fn print_report(report: &CoverageReport, metrics: &RunMetrics, at: DateTime<Utc>, color: bool) {
    let palette = Palette::new(color);
    let now_hour = at.hour() as usize;

    println!(
        "\n{}",
        palette.paint(
            palette.paint(
                format!("⚙  Coverage: {} teams, {} staff", report.summary.regions, report.summary.total_staff),
                Tint::Cyan
            ),
            Tint::Bold
        )
    );

    println!("\n{}", palette.paint("━━━ Timeline (UTC) ━━━", Tint::Gray));
    print_timeline(report, now_hour, &palette);

    println!("\n{}", palette.paint("━━━ Analysis ━━━", Tint::Gray));
    print_analysis(report, at, &palette);

    println!("\n{}", palette.paint("━━━ Recommendations ━━━", Tint::Gray));
    for rec in report.recommendations() {
        let line = rec.to_string();
        let tint = match rec {
            Recommendation::AddCoverage(_) => Tint::for_tier(Tier::Gap),
            Recommendation::AddRedundancy(_) => Tint::for_tier(Tier::Warning),
            Recommendation::FullRedundancy => Tint::for_tier(Tier::Good),
        };
        println!("  • {}", palette.paint(line, tint));
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", Tint::Gray));
    println!(
        "  Total: {}  │  Accumulate: {}  │  Classify: {}",
        palette.paint(format!("{:?}", metrics.total), Tint::Green),
        palette.paint(format!("{:?}", metrics.accumulate), Tint::Cyan),
        palette.paint(format!("{:?}", metrics.classify), Tint::Dim),
    );
    println!();
}

pub fn print_timezones(table: &TimezoneTable, color: bool) {
    let palette = Palette::new(color);
    for (code, offset) in table.iter() {
        let code = palette.paint(format!("{code:<10}"), Tint::Cyan);
        println!("  {} {}", code, palette.paint(format_offset(offset), Tint::Dim));
    }
}

fn print_timeline(report: &CoverageReport, now_hour: usize, palette: &Palette) {
    let header: String = (0..HOURS_PER_DAY)
        .map(|h| {
            let label = format!("{h:>3}");
            if h == now_hour {
                palette.paint(palette.paint(label, Tint::Cyan), Tint::Bold)
            } else {
                palette.paint(label, Tint::Dim)
            }
        })
        .collect();
    println!("  {:<width$}{}", "", header, width = LABEL_WIDTH);

    for team in &report.teams {
        print_team_row(team, palette);
    }

    let total: String = report
        .coverage
        .iter()
        .map(|staff| {
            let cell = format!("{staff:>3}");
            let tier = Tier::of(staff);
            let cell = palette.paint(cell, Tint::for_tier(tier));
            if tier == Tier::Gap { palette.paint(cell, Tint::Bold) } else { cell }
        })
        .collect();
    println!("  {}{}", palette.paint(pad_label("TOTAL"), Tint::Bold), total);
}

fn print_team_row(team: &TeamCoverage, palette: &Palette) {
    let label = pad_label(&format!("{} ({})", team.region, team.number_of_staff));

    if let Some(reason) = team.outcome.skip_reason() {
        let cells: String = (0..HOURS_PER_DAY).map(|_| palette.paint(format!("{:>3}", 0), Tint::Dim)).collect();
        println!("  {}{}", palette.paint(label, Tint::Red), cells);
        println!("    {}", palette.paint(format!("ERROR: {reason}"), Tint::Red));
        return;
    }

    let cells: String = team
        .row
        .iter()
        .map(|&staff| {
            let cell = format!("{staff:>3}");
            if staff > 0 { palette.paint(cell, Tint::Green) } else { palette.paint(cell, Tint::Dim) }
        })
        .collect();
    println!("  {}{}", palette.paint(label, Tint::Blue), cells);

    let (start, end) = team.local_working_hours;
    println!("    {}", palette.paint(format!("{start}:00-{end}:00 local ({})", team.timezone), Tint::Dim));
}

fn print_analysis(report: &CoverageReport, at: DateTime<Utc>, palette: &Palette) {
    let summary = &report.summary;
    let gaps = format_ranges(&report.gaps.gaps);
    let warnings = format_ranges(&report.gaps.warnings);

    println!("  {} {} UTC", palette.paint("Critical gaps (0 people):", Tint::Dim), palette.paint(gaps, Tint::Red));
    println!(
        "  {} {} UTC",
        palette.paint("Warning areas (1 person):", Tint::Dim),
        palette.paint(warnings, Tint::Yellow)
    );
    println!("  {} {} people", palette.paint("Total staff:", Tint::Dim), summary.total_staff);
    println!("  {} {} regions", palette.paint("Timezone coverage:", Tint::Dim), summary.regions);
    println!("  {} {:.1} people/hour", palette.paint("Average coverage:", Tint::Dim), summary.average_coverage);
    println!(
        "  {} {}",
        palette.paint(format!("On duty at {} UTC:", at.format("%Y-%m-%d %H:%M")), Tint::Dim),
        palette.paint(report.coverage.at(at).to_string(), Tint::Bold)
    );

    if summary.teams_skipped > 0 {
        println!(
            "  {}",
            palette.paint(format!("{} team(s) skipped, not counted above", summary.teams_skipped), Tint::Red)
        );
    }
}

fn pad_label(label: &str) -> String {
    let clipped: String = label.chars().take(LABEL_WIDTH - 1).collect();
    format!("{clipped:<width$}", width = LABEL_WIDTH)
}

fn format_offset(offset: f64) -> String {
    let sign = if offset < 0.0 { '-' } else { '+' };
    let minutes = (offset.abs() * 60.0).round() as u32;
    format!("UTC{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_render_as_hours_and_minutes() {
        assert_eq!(format_offset(5.5), "UTC+05:30");
        assert_eq!(format_offset(-10.0), "UTC-10:00");
        assert_eq!(format_offset(0.0), "UTC+00:00");
    }

    #[test]
    fn palette_paints_only_when_enabled() {
        assert_eq!(Palette::new(false).paint("09:00", Tint::Red), "09:00");
        assert_eq!(Palette::new(true).paint(3, Tint::for_tier(Tier::Warning)), "\x1b[33m3\x1b[0m");
    }

    #[test]
    fn labels_are_padded_and_clipped() {
        assert_eq!(pad_label("UK").len(), LABEL_WIDTH);
        assert_eq!(pad_label("A very long region name indeed").chars().count(), LABEL_WIDTH);
    }
}
