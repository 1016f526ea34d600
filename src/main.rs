mod report;

use anyhow::Context as _;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tzcoverage::{
    CoverageReport, Team, TimezoneTable, analyze_verbose_with, load_roster_json, parse_team_spec, sample_roster,
    validate_roster,
};

fn main() {
    init_tracing();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let table = TimezoneTable::default_table();
    if config.list_timezones {
        report::print_timezones(table, config.color);
        return;
    }

    let teams = match load_teams(&config.sources) {
        Ok(teams) => teams,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    };

    if let Err(err) = validate_roster(&teams) {
        eprintln!("error: {err}");
        std::process::exit(2);
    }

    let res = analyze_verbose_with(&teams, table);
    let at = config.at.unwrap_or_else(Utc::now);

    if config.json {
        if let Err(err) = print_json(&res.report, at) {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    } else {
        report::print_report(&res.report, &res.metrics, at, config.color);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

/// Where the roster comes from. Sources are concatenated in flag order.
enum Source {
    File(PathBuf),
    Inline(Team),
    Sample,
}

struct CliConfig {
    sources: Vec<Source>,
    at: Option<DateTime<Utc>>,
    json: bool,
    color: bool,
    list_timezones: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliConfig, String> {
    let mut sources: Vec<Source> = Vec::new();
    let mut at: Option<DateTime<Utc>> = None;
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut list_timezones = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("tzcoverage {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "--sample" => sources.push(Source::Sample),
            "--list-timezones" => list_timezones = true,
            "--at" => {
                let value = args.next().ok_or_else(|| "error: --at expects a value".to_string())?;
                at = Some(parse_at(&value)?);
            }
            "--teams" | "-f" => {
                let value = args.next().ok_or_else(|| "error: --teams expects a path".to_string())?;
                sources.push(Source::File(PathBuf::from(value)));
            }
            "--team" | "-t" => {
                let value = args.next().ok_or_else(|| "error: --team expects a value".to_string())?;
                sources.push(Source::Inline(parse_inline(&value)?));
            }
            _ if arg.starts_with("--at=") => {
                at = Some(parse_at(arg.trim_start_matches("--at="))?);
            }
            _ if arg.starts_with("--teams=") => {
                sources.push(Source::File(PathBuf::from(arg.trim_start_matches("--teams="))));
            }
            _ if arg.starts_with("--team=") => {
                sources.push(Source::Inline(parse_inline(arg.trim_start_matches("--team="))?));
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                // Bare arguments are inline team specs.
                sources.push(Source::Inline(parse_inline(&arg)?));
            }
        }
    }

    Ok(CliConfig { sources, at, json, color, list_timezones })
}

fn parse_inline(value: &str) -> Result<Team, String> {
    parse_team_spec(value).map_err(|err| format!("error: {err}"))
}

fn parse_at(value: &str) -> Result<DateTime<Utc>, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| format!("error: invalid --at '{value}' (expected YYYY-MM-DDTHH:MM:SS, UTC)"))
}

fn load_teams(sources: &[Source]) -> anyhow::Result<Vec<Team>> {
    if sources.is_empty() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
        if buffer.trim().is_empty() {
            anyhow::bail!("no roster provided\n\n{}", help_text());
        }
        return load_roster_json(&buffer).context("failed to parse roster from stdin");
    }

    let mut teams = Vec::new();
    for source in sources {
        match source {
            Source::File(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read roster '{}'", path.display()))?;
                let loaded =
                    load_roster_json(&raw).with_context(|| format!("failed to parse roster '{}'", path.display()))?;
                teams.extend(loaded);
            }
            Source::Inline(team) => teams.push(team.clone()),
            Source::Sample => teams.extend(sample_roster()),
        }
    }
    Ok(teams)
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    report: &'a CoverageReport,
    recommendations: Vec<String>,
    at: DateTime<Utc>,
    on_duty_at: u32,
}

fn render_json(report: &CoverageReport, at: DateTime<Utc>) -> serde_json::Result<String> {
    let out = JsonOutput {
        report,
        recommendations: report.recommendations().iter().map(ToString::to_string).collect(),
        at,
        on_duty_at: report.coverage.at(at),
    };
    serde_json::to_string_pretty(&out)
}

fn print_json(report: &CoverageReport, at: DateTime<Utc>) -> anyhow::Result<()> {
    println!("{}", render_json(report, at)?);
    Ok(())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "tzcoverage {version}

Follow-the-sun coverage calculator: maps each team's local working hours onto
the UTC day and reports hours with no cover or a single person on duty.

Usage:
  tzcoverage [OPTIONS] [TEAM_SPEC...]
  tzcoverage [OPTIONS] --teams <roster.json>
  tzcoverage [OPTIONS] < roster.json

Team specs:
  REGION:TZ:START-END[:STAFF]   e.g. \"US East:EST:7-15:2\" (staff defaults to 1)

Roster files are JSON arrays of
  {{\"region\": \"UK\", \"timezone\": \"GMT\", \"local_working_hours\": [9, 17], \"number_of_staff\": 5}}

Options:
  -f, --teams <path>         Load teams from a JSON roster (repeatable).
  -t, --team <spec>          Add one team (repeatable).
  --sample                   Add the built-in seven-region sample roster.
  --at <timestamp>           Report who is on duty at YYYY-MM-DDTHH:MM:SS (UTC).
                             Default: now.
  --json                     Print the report as JSON.
  --list-timezones           List known timezone codes and offsets.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

With no teams given, a JSON roster is read from stdin.

Environment:
  RUST_LOG                   Log filter (default: warn), e.g. tzcoverage=debug.

Exit codes:
  0  Success.
  1  Roster could not be read or parsed.
  2  Invalid arguments or invalid team.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
