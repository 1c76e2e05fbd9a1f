use crate::error::{GraphError, Result};
use crate::pattern::{compute_optimal_anchor, Intensity};
use chrono::NaiveDate;
use structopt::clap::AppSettings;
use structopt::StructOpt;
use tracing::warn;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "graphword",
    about = "Draws a word on the contribution graph with backdated empty commits"
)]
pub enum Cli {
    #[structopt(
        about = "Create a repository whose commit history spells the word",
        setting = AppSettings::AllowNegativeNumbers
    )]
    Create {
        #[structopt(help = "Word to draw (letters, digits, space, ! ? . -)")]
        word: String,

        #[structopt(help = "[date|year] <path> [intensity]")]
        args: Vec<String>,

        #[structopt(short, long, help = "Skip the confirmation prompt")]
        yes: bool,

        #[structopt(long, help = "Seed for commit counts and times")]
        seed: Option<u64>,
    },
    #[structopt(
        about = "Preview the commits without touching git",
        setting = AppSettings::AllowNegativeNumbers
    )]
    DryRun {
        #[structopt(help = "Word to draw (letters, digits, space, ! ? . -)")]
        word: String,

        #[structopt(help = "[date|year] [intensity]")]
        args: Vec<String>,

        #[structopt(long, help = "Write the plan as JSON to this file")]
        json: Option<String>,

        #[structopt(long, help = "Write a PNG heatmap preview to this file")]
        png: Option<String>,

        #[structopt(long, help = "Seed for commit counts and times")]
        seed: Option<u64>,
    },
    #[structopt(about = "Show the next Sunday", alias = "next-sunday")]
    NextAnchorWeekday,
    #[structopt(about = "Check that git has a usable author identity")]
    CheckConfig,
}

/// How the first column's date is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorSpec {
    /// Explicit `YYYY-MM-DD`; rounded back to Sunday by the planner
    Date(NaiveDate),
    /// Pattern centred in this year
    Year(i32),
    /// Pattern centred in the current year
    CurrentYear,
}

impl AnchorSpec {
    pub fn resolve(self, word: &str) -> NaiveDate {
        match self {
            AnchorSpec::Date(date) => date,
            AnchorSpec::Year(year) => compute_optimal_anchor(word, Some(year)),
            AnchorSpec::CurrentYear => compute_optimal_anchor(word, None),
        }
    }
}

/// Positional arguments after the word, classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanArgs {
    pub word: String,
    pub anchor: AnchorSpec,
    pub path: Option<String>,
    /// Level as typed; out-of-range integers are kept for the summary,
    /// non-numbers read as 2
    pub level: i64,
    pub intensity: Intensity,
}

fn is_date_pattern(arg: &str) -> bool {
    let bytes = arg.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn is_year_pattern(arg: &str) -> bool {
    arg.len() == 4 && arg.bytes().all(|b| b.is_ascii_digit())
}

/// `YYYY-MM-DD` is a date, four digits a year, anything else is not an anchor.
pub fn classify_anchor(arg: &str) -> Result<Option<AnchorSpec>> {
    if is_date_pattern(arg) {
        let date = NaiveDate::parse_from_str(arg, "%Y-%m-%d")
            .map_err(|_| GraphError::InvalidInput(format!("'{}' is not a valid calendar date", arg)))?;
        return Ok(Some(AnchorSpec::Date(date)));
    }
    if is_year_pattern(arg) {
        let year = arg
            .parse::<i32>()
            .map_err(|_| GraphError::InvalidInput(format!("'{}' is not a valid year", arg)))?;
        return Ok(Some(AnchorSpec::Year(year)));
    }
    Ok(None)
}

/// Anything that is not a level 1..=4 falls back to Medium with a warning.
fn parse_level(arg: Option<&String>) -> (i64, Intensity) {
    match arg {
        None => (2, Intensity::Medium),
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(level) => (level, Intensity::from_level(level)),
            Err(_) => {
                warn!(value = %raw, "intensity is not a number, using medium");
                (2, Intensity::Medium)
            }
        },
    }
}

fn reject_extra(args: &[String], used: usize) -> Result<()> {
    match args.get(used) {
        Some(extra) => Err(GraphError::InvalidInput(format!("unexpected argument '{}'", extra))),
        None => Ok(()),
    }
}

/// `dry-run <word> [date|year] [intensity]`
pub fn parse_dry_run(word: &str, args: &[String]) -> Result<PlanArgs> {
    let (anchor, rest) = match args.first() {
        Some(first) => match classify_anchor(first)? {
            Some(anchor) => (anchor, &args[1..]),
            None => (AnchorSpec::CurrentYear, args),
        },
        None => (AnchorSpec::CurrentYear, args),
    };
    let (level, intensity) = parse_level(rest.first());
    reject_extra(rest, 1)?;

    Ok(PlanArgs {
        word: word.to_string(),
        anchor,
        path: None,
        level,
        intensity,
    })
}

/// `create <word> [date|year] <path> [intensity]`
pub fn parse_create(word: &str, args: &[String]) -> Result<PlanArgs> {
    let first = args
        .first()
        .ok_or_else(|| GraphError::InvalidInput("create requires a word and a path".to_string()))?;

    let (anchor, rest) = match classify_anchor(first)? {
        Some(anchor) => (anchor, &args[1..]),
        None => (AnchorSpec::CurrentYear, args),
    };
    let path = rest
        .first()
        .cloned()
        .ok_or_else(|| GraphError::InvalidInput("create with a date or year also requires a path".to_string()))?;
    let (level, intensity) = parse_level(rest.get(1));
    reject_extra(rest, 2)?;

    Ok(PlanArgs {
        word: word.to_string(),
        anchor,
        path: Some(path),
        level,
        intensity,
    })
}
