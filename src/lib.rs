//! Convert RTS workout-log exports into BBCode forum posts.
//!
//! The pipeline runs in one pass over an in-memory string:
//! - [`classify`](mod@classify) drops table boilerplate and tags each line,
//! - [`segment`](mod@segment) groups lines into a date, a workout name and exercise blocks,
//! - [`sets`] splits each block's data line into typed sets,
//! - [`widths`] and [`render`] print the sets as aligned columns,
//! - [`document`] assembles the post with optional emphasis.

#[macro_use]
mod macros;

pub mod classify;
pub mod document;
pub mod emphasis;
mod error;
pub mod options;
pub mod render;
pub mod segment;
pub mod sets;
pub mod widths;

pub use classify::{Line, classify, normalise, rewrite_date};
pub use document::{NO_WORKOUT, format, render_day, render_exercise};
pub use emphasis::Emphasis;
pub use error::{FormatError, Result};
pub use options::{FormattingOptions, OPTION_NAMES, checkbox_id};
pub use render::{render_set, render_set_with_weight, render_set_without_weight, render_sets};
pub use segment::{ExerciseBlock, WorkoutDay, segment};
pub use sets::{NULL_TOKEN, ParsedSet, SetValues, number_of_sets, parse_set, parse_sets_and_reps};
pub use widths::{ColumnWidths, RoleWidths, get_lengths};
