//! Set table parsing.
//!
//! An exercise's set data arrives as one line holding every set back to
//! back. The line is split into `N` equally sized rows, one per declared
//! set, and each row is typed by its width:
//!
//! | tokens | planned | actual |
//! | --- | --- | --- |
//! | 6 | weight reps rpe | weight reps rpe |
//! | 4 | reps rpe | reps rpe |
//! | 3 | | weight reps rpe |
//! | 2 | | reps rpe |
//!
//! The export writes `Null` for values it did not record.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FormatError, Result};

static SETS_RE: LazyLock<Regex> =
    crate::lazy_regex!(r"Sets (\d+)", "set count regex should compile");

/// Marker the export uses for an unrecorded value.
pub const NULL_TOKEN: &str = "Null";

/// Weight, reps and RPE of one half of a set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SetValues {
    pub weight: Option<String>,
    pub reps: Option<String>,
    pub rpe: Option<String>,
}

impl SetValues {
    fn with_weight(row: &[&str]) -> Self {
        Self {
            weight: field(row[0]),
            reps: field(row[1]),
            rpe: field(row[2]),
        }
    }

    fn without_weight(row: &[&str]) -> Self {
        Self {
            weight: None,
            reps: field(row[0]),
            rpe: field(row[1]),
        }
    }
}

/// One set: what was planned and what was done.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedSet {
    pub planned: Option<SetValues>,
    pub actual: Option<SetValues>,
}

fn field(token: &str) -> Option<String> {
    (token != NULL_TOKEN).then(|| token.to_string())
}

/// Read the declared set count from an exercise header.
///
/// # Errors
///
/// Returns [`FormatError::MissingSetCount`] when the header has no
/// `Sets <N>` token.
pub fn number_of_sets(header: &str) -> Result<usize> {
    SETS_RE
        .captures(header)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| FormatError::MissingSetCount {
            header: header.to_string(),
        })
}

/// Split `raw` into `total_sets` rows of equal width.
///
/// The row width is the token count divided by `total_sets`, rounded down.
/// Left-over tokens are dropped with a warning, or rejected in `strict`
/// mode. Zero sets, or fewer tokens than sets, produce an empty table.
///
/// # Errors
///
/// Returns [`FormatError::UnevenSetData`] in `strict` mode when the tokens
/// do not divide evenly.
///
/// # Examples
///
/// ```
/// use rtsbb::parse_sets_and_reps;
///
/// let rows = parse_sets_and_reps("5 8 5 9", 2, false).unwrap();
/// assert_eq!(rows, vec![vec!["5", "8"], vec!["5", "9"]]);
/// ```
pub fn parse_sets_and_reps(raw: &str, total_sets: usize, strict: bool) -> Result<Vec<Vec<&str>>> {
    if total_sets == 0 {
        return Ok(Vec::new());
    }
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let columns = tokens.len() / total_sets;
    let leftover = tokens.len() % total_sets;
    if leftover != 0 {
        if strict {
            return Err(FormatError::UnevenSetData {
                data: raw.to_string(),
                tokens: tokens.len(),
                sets: total_sets,
            });
        }
        tracing::warn!(
            tokens = tokens.len(),
            sets = total_sets,
            dropped = leftover,
            "set data does not divide evenly into sets"
        );
    }
    if columns == 0 {
        if !tokens.is_empty() {
            tracing::warn!(
                tokens = tokens.len(),
                sets = total_sets,
                "fewer set-data tokens than sets"
            );
        }
        return Ok(Vec::new());
    }
    Ok(tokens
        .chunks_exact(columns)
        .take(total_sets)
        .map(<[&str]>::to_vec)
        .collect())
}

/// Type one row according to its width.
///
/// Rows of any other width yield an empty set.
#[must_use]
pub fn parse_set(row: &[&str]) -> ParsedSet {
    match row.len() {
        6 => ParsedSet {
            planned: Some(SetValues::with_weight(&row[..3])),
            actual: Some(SetValues::with_weight(&row[3..])),
        },
        4 => ParsedSet {
            planned: Some(SetValues::without_weight(&row[..2])),
            actual: Some(SetValues::without_weight(&row[2..])),
        },
        3 => ParsedSet {
            planned: None,
            actual: Some(SetValues::with_weight(row)),
        },
        2 => ParsedSet {
            planned: None,
            actual: Some(SetValues::without_weight(row)),
        },
        _ => ParsedSet::default(),
    }
}
