//! Render parsed sets back to text.
//!
//! A set reads `planned / actual`, each side as `weight x reps @ rpe` with
//! absent parts left out. Weights are padded on the left and RPE values on
//! the right to the widths measured by [`crate::widths::get_lengths`].

use unicode_width::UnicodeWidthStr;

use crate::{
    sets::{ParsedSet, SetValues},
    widths::{ColumnWidths, RoleWidths, get_lengths},
};

fn padding(value: &str, width: Option<usize>) -> String {
    let width = width.unwrap_or(0);
    " ".repeat(width.saturating_sub(UnicodeWidthStr::width(value)))
}

fn push_rpe(out: &mut String, rpe: Option<&str>, rpe_width: Option<usize>) {
    if let Some(rpe) = rpe {
        out.push_str(" @ ");
        out.push_str(rpe);
        out.push_str(&padding(rpe, rpe_width));
    }
}

/// Render `reps @ rpe`.
///
/// # Examples
///
/// ```
/// use rtsbb::render_set_without_weight;
///
/// assert_eq!(render_set_without_weight(Some("5"), Some("8"), Some(3)), "5 @ 8  ");
/// ```
#[must_use]
pub fn render_set_without_weight(
    reps: Option<&str>,
    rpe: Option<&str>,
    rpe_width: Option<usize>,
) -> String {
    let mut out = String::new();
    if let Some(reps) = reps {
        out.push_str(reps);
    }
    push_rpe(&mut out, rpe, rpe_width);
    out
}

/// Render `weight x reps @ rpe`, right-aligning the weight.
#[must_use]
pub fn render_set_with_weight(
    weight: Option<&str>,
    reps: Option<&str>,
    rpe: Option<&str>,
    weight_width: Option<usize>,
    rpe_width: Option<usize>,
) -> String {
    let mut out = String::new();
    if let Some(weight) = weight {
        out.push_str(&padding(weight, weight_width));
        out.push_str(weight);
    }
    if let Some(reps) = reps {
        if !out.is_empty() {
            out.push_str(" x ");
        }
        out.push_str(reps);
    }
    push_rpe(&mut out, rpe, rpe_width);
    out
}

fn render_values(values: &SetValues, widths: RoleWidths) -> String {
    let reps = values.reps.as_deref();
    let rpe = values.rpe.as_deref();
    match values.weight.as_deref() {
        Some(weight) => render_set_with_weight(Some(weight), reps, rpe, widths.weight, widths.rpe),
        None => render_set_without_weight(reps, rpe, widths.rpe),
    }
}

/// Render one set as a single line.
///
/// The planned side is shown only when it has a weight or reps and
/// `ignore_intended_reps` is off. A set with neither side renders as an
/// empty line.
#[must_use]
pub fn render_set(set: &ParsedSet, widths: &ColumnWidths, ignore_intended_reps: bool) -> String {
    let mut out = String::new();
    let planned = set
        .planned
        .as_ref()
        .filter(|p| p.weight.is_some() || p.reps.is_some())
        .map(|p| render_values(p, widths.planned))
        .unwrap_or_default();
    if !planned.is_empty() && !ignore_intended_reps {
        out.push_str(&planned);
        out.push_str(" / ");
    }
    if let Some(actual) = &set.actual {
        out.push_str(&render_values(actual, widths.actual));
    }
    out
}

/// Render every set of an exercise, one per line, aligned as a table.
#[must_use]
pub fn render_sets(sets: &[ParsedSet], ignore_intended_reps: bool) -> Vec<String> {
    let widths = get_lengths(sets);
    sets.iter()
        .map(|set| render_set(set, &widths, ignore_intended_reps))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sets::parse_set;
    use rstest::rstest;

    #[rstest]
    #[case(Some("5"), Some("8"), None, "5 @ 8")]
    #[case(Some("5"), Some("8"), Some(3), "5 @ 8  ")]
    #[case(Some("5"), Some("8.5"), Some(1), "5 @ 8.5")]
    #[case(Some("5"), None, Some(3), "5")]
    #[case(None, Some("8"), None, " @ 8")]
    #[case(None, None, None, "")]
    fn renders_without_weight(
        #[case] reps: Option<&str>,
        #[case] rpe: Option<&str>,
        #[case] rpe_width: Option<usize>,
        #[case] expected: &str,
    ) {
        assert_eq!(render_set_without_weight(reps, rpe, rpe_width), expected);
    }

    #[rstest]
    #[case(Some("100lbs"), Some("5"), Some("8"), None, None, "100lbs x 5 @ 8")]
    #[case(Some("95lbs"), Some("5"), Some("8"), Some(6), Some(3), " 95lbs x 5 @ 8  ")]
    #[case(None, Some("5"), Some("8"), Some(6), None, "5 @ 8")]
    #[case(Some("60kgs"), None, None, Some(5), None, "60kgs")]
    #[case(Some("60kgs"), None, Some("9"), None, None, "60kgs @ 9")]
    fn renders_with_weight(
        #[case] weight: Option<&str>,
        #[case] reps: Option<&str>,
        #[case] rpe: Option<&str>,
        #[case] weight_width: Option<usize>,
        #[case] rpe_width: Option<usize>,
        #[case] expected: &str,
    ) {
        assert_eq!(
            render_set_with_weight(weight, reps, rpe, weight_width, rpe_width),
            expected
        );
    }

    #[test]
    fn pads_weights_to_widest_in_exercise() {
        let sets = [
            parse_set(&["Null", "Null", "Null", "10", "5", "8"]),
            parse_set(&["Null", "Null", "Null", "100", "5", "8"]),
            parse_set(&["Null", "Null", "Null", "1", "5", "8"]),
        ];
        assert_eq!(
            render_sets(&sets, false),
            vec![" 10 x 5 @ 8", "100 x 5 @ 8", "  1 x 5 @ 8"]
        );
    }

    #[test]
    fn joins_planned_and_actual() {
        let sets = [
            parse_set(&["100lbs", "5", "8", "100lbs", "5", "8.5"]),
            parse_set(&["100lbs", "5", "9", "100lbs", "4", "9"]),
        ];
        assert_eq!(
            render_sets(&sets, false),
            vec![
                "100lbs x 5 @ 8 / 100lbs x 5 @ 8.5",
                "100lbs x 5 @ 9 / 100lbs x 4 @ 9  ",
            ]
        );
    }

    #[test]
    fn ignoring_intended_reps_drops_planned_side() {
        let sets = [parse_set(&["8", "7", "8", "8"])];
        assert_eq!(render_sets(&sets, true), vec!["8 @ 8"]);
        assert_eq!(render_sets(&sets, false), vec!["8 @ 7 / 8 @ 8"]);
    }

    #[test]
    fn planned_without_weight_or_reps_is_hidden() {
        let sets = [parse_set(&["Null", "8", "6", "9"])];
        assert_eq!(render_sets(&sets, false), vec!["6 @ 9"]);
    }

    #[test]
    fn unrecognised_rows_render_empty_lines() {
        let sets = [parse_set(&["1"]), parse_set(&["2"])];
        assert_eq!(render_sets(&sets, false), vec!["", ""]);
    }
}
