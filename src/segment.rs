//! Split a normalised export into date, workout name and exercise blocks.

use crate::classify::{EXERCISE_RE, Line, classify};

/// One exercise as it appeared in the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseBlock {
    /// Header line, e.g. `Bench Press Sets 3`.
    pub header: String,
    /// Set-data line with units glued to their numbers.
    pub set_data: Option<String>,
    /// `Notes:` line, untrimmed.
    pub notes: Option<String>,
}

impl ExerciseBlock {
    fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            set_data: None,
            notes: None,
        }
    }

    /// Exercise name with the trailing `Sets <N>` removed.
    #[must_use]
    pub fn name(&self) -> &str {
        EXERCISE_RE
            .captures(&self.header)
            .and_then(|caps| caps.get(1))
            .map_or(self.header.as_str(), |m| m.as_str())
            .trim()
    }
}

/// A workout day split into its parts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkoutDay {
    pub date: Option<String>,
    pub name: Option<String>,
    pub exercises: Vec<ExerciseBlock>,
}

impl WorkoutDay {
    /// `true` when nothing worth rendering was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.name.is_none() && self.exercises.is_empty()
    }
}

/// Join a unit to the number before it so whitespace splitting keeps
/// `100 lbs` together as `100lbs`.
#[must_use]
pub fn compact_units(line: &str) -> String {
    line.replace(" lbs", "lbs").replace(" kgs", "kgs")
}

/// Group normalised lines into a [`WorkoutDay`].
///
/// The first line is the date if it is an `[h1]` date line. The line after
/// it (or the first line when there is no date) is the workout name unless
/// it is an exercise header. Every exercise header then opens a new block;
/// `Notes:` lines and other text attach to the open block, the last one of
/// each kind winning.
#[must_use]
pub fn segment<S: AsRef<str>>(lines: &[S]) -> WorkoutDay {
    let mut classified = lines.iter().filter_map(|l| classify(l.as_ref())).peekable();
    let mut day = WorkoutDay::default();

    if let Some(Line::Date(date)) = classified.peek() {
        day.date = Some((*date).to_string());
        classified.next();
    }
    if let Some(line) = classified.peek()
        && !matches!(line, Line::ExerciseHeader(_))
    {
        day.name = Some(line.text().to_string());
        classified.next();
    }

    let mut current: Option<ExerciseBlock> = None;
    for line in classified {
        match line {
            Line::ExerciseHeader(header) => {
                if let Some(block) = current.replace(ExerciseBlock::new(header)) {
                    day.exercises.push(block);
                }
            }
            Line::Notes(notes) => match current.as_mut() {
                Some(block) => block.notes = Some(notes.to_string()),
                None => tracing::debug!(line = notes, "notes before any exercise"),
            },
            Line::Date(text) | Line::Text(text) => match current.as_mut() {
                Some(block) => block.set_data = Some(compact_units(text)),
                None => tracing::debug!(line = text, "text before any exercise"),
            },
        }
    }
    day.exercises.extend(current);
    day
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lines(text: &str) -> Vec<&str> {
        text.lines().collect()
    }

    #[test]
    fn empty_input_yields_empty_day() {
        let day = segment(&lines("\n  \n\n"));
        assert!(day.is_empty());
    }

    #[test]
    fn splits_date_name_and_blocks() {
        let day = segment(&lines(
            "[h1]2024-01-01[/h1]\n\nLeg Day\nSquat Sets 2\n100 lbs 5 8 100 lbs 5 9\nNotes: ok\n\
             Curl Sets 1\n10 Null\n",
        ));
        assert_eq!(day.date.as_deref(), Some("[h1]2024-01-01[/h1]"));
        assert_eq!(day.name.as_deref(), Some("Leg Day"));
        assert_eq!(
            day.exercises,
            vec![
                ExerciseBlock {
                    header: "Squat Sets 2".into(),
                    set_data: Some("100lbs 5 8 100lbs 5 9".into()),
                    notes: Some("Notes: ok".into()),
                },
                ExerciseBlock {
                    header: "Curl Sets 1".into(),
                    set_data: Some("10 Null".into()),
                    notes: None,
                },
            ]
        );
    }

    #[test]
    fn header_straight_after_date_is_not_a_name() {
        let day = segment(&lines("[h1]2024-01-01[/h1]\nSquat Sets 1\n5 8"));
        assert!(day.name.is_none());
        assert_eq!(day.exercises.len(), 1);
    }

    #[test]
    fn name_without_date() {
        let day = segment(&lines("Push\nBench Sets 1\n5 8"));
        assert!(day.date.is_none());
        assert_eq!(day.name.as_deref(), Some("Push"));
    }

    #[test]
    fn last_data_and_notes_line_wins() {
        let day = segment(&lines("Bench Sets 1\n1 2\nNotes: a\n3 4\nNotes: b"));
        assert_eq!(day.exercises[0].set_data.as_deref(), Some("3 4"));
        assert_eq!(day.exercises[0].notes.as_deref(), Some("Notes: b"));
    }

    #[test]
    fn orphan_lines_before_first_header_are_dropped() {
        let day = segment(&lines("Push\n1 2 3\nBench Sets 1"));
        assert_eq!(day.exercises[0].set_data, None);
    }

    #[rstest]
    #[case("Bench Press Sets 3", "Bench Press")]
    #[case("  Front Squat Sets 5  ", "Front Squat")]
    #[case("Curl Sets ", "Curl")]
    fn strips_set_suffix_from_name(#[case] header: &str, #[case] expected: &str) {
        assert_eq!(ExerciseBlock::new(header).name(), expected);
    }

    #[rstest]
    #[case("100 lbs 5 8", "100lbs 5 8")]
    #[case("60 kgs 5 Null 62.5 kgs 5 8", "60kgs 5 Null 62.5kgs 5 8")]
    #[case("5 8 5 9", "5 8 5 9")]
    fn glues_units(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(compact_units(line), expected);
    }
}
