//! Whole-document conversion.
//!
//! [`format`] is the entry point: it normalises the export, segments it
//! into a [`WorkoutDay`] and renders each exercise block with the requested
//! emphasis.

use crate::{
    classify::normalise,
    error::Result,
    options::FormattingOptions,
    render::render_sets,
    segment::{ExerciseBlock, WorkoutDay, segment},
    sets::{number_of_sets, parse_set, parse_sets_and_reps},
};

/// Output for an export with no date, name or exercises.
pub const NO_WORKOUT: &str = "No workout found!";

/// Render one exercise: its name, one line per set, then its notes.
///
/// # Errors
///
/// Fails when the header has no set count, or in strict mode when the set
/// data does not split evenly.
pub fn render_exercise(block: &ExerciseBlock, opts: &FormattingOptions) -> Result<String> {
    let total_sets = number_of_sets(&block.header)?;
    let rows = parse_sets_and_reps(block.set_data.as_deref().unwrap_or(""), total_sets, opts.strict)?;
    let sets: Vec<_> = rows.iter().map(|row| parse_set(row)).collect();

    let mut lines = Vec::with_capacity(sets.len() + 2);
    lines.push(opts.exercise_emphasis().wrap(block.name()));
    lines.extend(render_sets(&sets, opts.ignore_intended_reps));
    if let Some(notes) = &block.notes {
        lines.push(opts.notes_emphasis().wrap(notes.trim()));
    }
    Ok(lines.join("\n"))
}

/// Render a segmented day.
///
/// The date, the workout name and each exercise are separated by a blank
/// line and the result ends with a newline. An empty day renders as
/// [`NO_WORKOUT`].
///
/// # Errors
///
/// Propagates the first error from [`render_exercise`].
pub fn render_day(day: &WorkoutDay, opts: &FormattingOptions) -> Result<String> {
    if day.is_empty() {
        return Ok(NO_WORKOUT.to_string());
    }
    let mut sections: Vec<String> = day.date.iter().chain(&day.name).cloned().collect();
    for block in &day.exercises {
        sections.push(render_exercise(block, opts)?);
    }
    Ok(sections.join("\n\n") + "\n")
}

/// Convert an RTS export into BBCode.
///
/// # Errors
///
/// Returns [`crate::FormatError::MissingSetCount`] when an exercise header
/// lacks its `Sets <N>` count, and [`crate::FormatError::UnevenSetData`] when
/// `opts.strict` is set and an exercise's data does not fit its sets.
///
/// # Examples
///
/// ```
/// use rtsbb::{FormattingOptions, format};
///
/// let out = format("Squat Sets 1\n100 lbs 5 8\n", &FormattingOptions::default()).unwrap();
/// assert_eq!(out, "Squat\n100lbs x 5 @ 8\n");
/// ```
pub fn format(input: &str, opts: &FormattingOptions) -> Result<String> {
    let lines = normalise(input);
    let day = segment(&lines);
    render_day(&day, opts)
}
