//! Formatting switches shared by the CLI and the browser form.
//!
//! Both front ends hand the converter a flat set of booleans. The CLI
//! collects them from bare flag names, the browser form from checkboxes
//! whose element ids follow the `checkbox_<name>` convention.

use crate::emphasis::Emphasis;

/// Recognised option names in the order they are listed to users.
pub const OPTION_NAMES: [&str; 7] = [
    "underlined_exercise",
    "bold_exercise",
    "italic_exercise",
    "underlined_notes",
    "bold_notes",
    "italic_notes",
    "ignore_intended_reps",
];

/// Switches controlling how a workout is rendered.
///
/// All switches default to `false`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "every switch is an independent user-facing flag"
)]
pub struct FormattingOptions {
    pub underlined_exercise: bool,
    pub bold_exercise: bool,
    pub italic_exercise: bool,
    pub underlined_notes: bool,
    pub bold_notes: bool,
    pub italic_notes: bool,
    /// Drop the planned half of every set and print only what was done.
    pub ignore_intended_reps: bool,
    /// Reject set data that does not split evenly into the declared sets
    /// instead of truncating it.
    pub strict: bool,
}

impl FormattingOptions {
    /// Build options from bare flag names such as `bold_notes`.
    ///
    /// Unknown names are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtsbb::FormattingOptions;
    ///
    /// let opts = FormattingOptions::from_flags(["bold_notes", "shiny"]);
    /// assert!(opts.bold_notes);
    /// assert!(!opts.bold_exercise);
    /// ```
    #[must_use]
    pub fn from_flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = Self::default();
        for flag in flags {
            let name = flag.as_ref();
            if !opts.set(name) {
                tracing::debug!(option = name, "ignoring unrecognised option");
            }
        }
        opts
    }

    /// Build options by asking `is_checked` about each checkbox id.
    ///
    /// Ids are formed as `checkbox_<name>` for every entry of
    /// [`OPTION_NAMES`].
    #[must_use]
    pub fn from_lookup<F>(mut is_checked: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        let mut opts = Self::default();
        for name in OPTION_NAMES {
            if is_checked(&checkbox_id(name)) {
                opts.set(name);
            }
        }
        opts
    }

    /// Turn on the switch called `name`, returning whether it was known.
    pub fn set(&mut self, name: &str) -> bool {
        let slot = match name {
            "underlined_exercise" | "underlined_exercises" => &mut self.underlined_exercise,
            "bold_exercise" | "bold_exercises" => &mut self.bold_exercise,
            "italic_exercise" | "italic_exercises" => &mut self.italic_exercise,
            "underlined_notes" => &mut self.underlined_notes,
            "bold_notes" => &mut self.bold_notes,
            "italic_notes" => &mut self.italic_notes,
            "ignore_intended_reps" => &mut self.ignore_intended_reps,
            "strict" => &mut self.strict,
            _ => return false,
        };
        *slot = true;
        true
    }

    #[must_use]
    pub fn exercise_emphasis(&self) -> Emphasis {
        Emphasis {
            underline: self.underlined_exercise,
            bold: self.bold_exercise,
            italic: self.italic_exercise,
        }
    }

    #[must_use]
    pub fn notes_emphasis(&self) -> Emphasis {
        Emphasis {
            underline: self.underlined_notes,
            bold: self.bold_notes,
            italic: self.italic_notes,
        }
    }
}

/// Element id of the checkbox controlling option `name`.
#[must_use]
pub fn checkbox_id(name: &str) -> String {
    format!("checkbox_{name}")
}
