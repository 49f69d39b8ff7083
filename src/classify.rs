//! Line classification for RTS exports.
//!
//! [`normalise`] drops the export's table boilerplate and rewrites the
//! weekday header into a `[h1]` ISO date. [`classify`] then tags each
//! remaining line once so the segmenter never has to re-test patterns while
//! it accumulates blocks.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static DATE_HEADER_RE: LazyLock<Regex> = crate::lazy_regex!(
    r"^\w+, (\w+) (\w+), (\d{4})$",
    "date header regex should compile",
);

static DATE_LINE_RE: LazyLock<Regex> = crate::lazy_regex!(
    r"^\s*\[h1\]\d{4}-\d{2}-\d{2}\[/h1\]\s*$",
    "date line regex should compile",
);

pub(crate) static EXERCISE_RE: LazyLock<Regex> = crate::lazy_regex!(
    r"^\s*(.*) Sets \d*\s*$",
    "exercise header regex should compile",
);

/// Line prefixes of the column headings the export repeats around tables.
const BOILERPLATE_PREFIXES: [&str; 4] = ["Target", "Actual", "Weight Reps RPE", "Reps RPE"];

const INVALID_DATE: &str = "Invalid date";

/// A non-blank line of a normalised export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `[h1]YYYY-MM-DD[/h1]`
    Date(&'a str),
    /// `<name> Sets <N>`
    ExerciseHeader(&'a str),
    /// `Notes: ...`
    Notes(&'a str),
    /// Anything else: a workout name or a set-data line, depending on
    /// where it appears.
    Text(&'a str),
}

impl<'a> Line<'a> {
    #[must_use]
    pub fn text(&self) -> &'a str {
        match *self {
            Line::Date(t) | Line::ExerciseHeader(t) | Line::Notes(t) | Line::Text(t) => t,
        }
    }
}

/// Tag a single line, returning `None` for blank lines.
#[must_use]
pub fn classify(line: &str) -> Option<Line<'_>> {
    if line.trim().is_empty() {
        None
    } else if DATE_LINE_RE.is_match(line) {
        Some(Line::Date(line))
    } else if EXERCISE_RE.is_match(line) {
        Some(Line::ExerciseHeader(line))
    } else if line.starts_with("Notes:") {
        Some(Line::Notes(line))
    } else {
        Some(Line::Text(line))
    }
}

/// Return `true` for the export's repeated table headings.
#[must_use]
pub fn is_boilerplate(line: &str) -> bool {
    line == "Daily Workout" || BOILERPLATE_PREFIXES.iter().any(|p| line.starts_with(p))
}

/// Rewrite `Monday, Jan 1st, 2024` as `[h1]2024-01-01[/h1]`.
///
/// Returns `None` when the line is not a date header. A header whose month
/// or day cannot be resolved still becomes an `[h1]` line, holding
/// `Invalid date`.
#[must_use]
pub fn rewrite_date(line: &str) -> Option<String> {
    let caps = DATE_HEADER_RE.captures(line)?;
    let date = parse_date(&caps[1], &caps[2], &caps[3]).map_or_else(
        || {
            tracing::debug!(line, "unresolvable date header");
            INVALID_DATE.to_string()
        },
        |d| d.format("%Y-%m-%d").to_string(),
    );
    Some(format!("[h1]{date}[/h1]"))
}

fn parse_date(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    let day = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| day.strip_suffix(suffix))
        .unwrap_or(day);
    let day: u32 = day.parse().ok()?;
    // `%B` takes full or three-letter names; `Sept` style names fall back to
    // their first three letters.
    [Some(month), month.get(..3)]
        .into_iter()
        .flatten()
        .find_map(|m| NaiveDate::parse_from_str(&format!("{m} {day:02} {year}"), "%B %d %Y").ok())
}

/// Drop boilerplate lines and rewrite date headers.
///
/// Lines that match neither are passed through unchanged.
#[must_use]
pub fn normalise(input: &str) -> Vec<String> {
    input
        .lines()
        .filter(|line| !is_boilerplate(line))
        .map(|line| rewrite_date(line).unwrap_or_else(|| line.to_string()))
        .collect()
}
