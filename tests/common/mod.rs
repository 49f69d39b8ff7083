//! Utility helpers shared across integration tests.

/// A day exported from RTS with weighted and body-weight exercises.
pub const SAMPLE_EXPORT: &str = "\
Monday, Jan 1st, 2024
Daily Workout
Lower A
Squat Sets 3
Target Actual
Weight Reps RPE Weight Reps RPE
225 lbs 5 7 225 lbs 5 7.5 245 lbs 3 8 245 lbs 3 8 95 lbs 10 Null 95 lbs 10 6
Notes: Belt on top set
Plank Sets 2
Reps RPE Reps RPE
60 Null 60 7 45 Null 50 8
";

/// Join lines with newlines, keeping trailing spaces visible in tests.
macro_rules! doc {
    ($($line:expr),* $(,)?) => {
        [$($line),*].join("\n")
    };
}
