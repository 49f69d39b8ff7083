//! Column alignment for one exercise's sets.
//!
//! Weights are right-aligned and RPE values left-aligned, so both need the
//! widest value of their column. Planned and actual values form separate
//! columns and are measured independently.

use unicode_width::UnicodeWidthStr;

use crate::sets::{ParsedSet, SetValues};

/// Widest weight and RPE of one side of a set table.
///
/// `None` means the column never held a value and gets no padding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RoleWidths {
    pub weight: Option<usize>,
    pub rpe: Option<usize>,
}

impl RoleWidths {
    fn observe(&mut self, values: &SetValues) {
        widen(&mut self.weight, values.weight.as_deref());
        widen(&mut self.rpe, values.rpe.as_deref());
    }
}

fn widen(slot: &mut Option<usize>, value: Option<&str>) {
    if let Some(value) = value {
        let width = UnicodeWidthStr::width(value);
        *slot = Some(slot.map_or(width, |w| w.max(width)));
    }
}

/// Column widths for the planned and actual halves of an exercise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub planned: RoleWidths,
    pub actual: RoleWidths,
}

/// Measure the weight and RPE columns across all sets of an exercise.
#[must_use]
pub fn get_lengths(sets: &[ParsedSet]) -> ColumnWidths {
    let mut widths = ColumnWidths::default();
    for set in sets {
        if let Some(planned) = &set.planned {
            widths.planned.observe(planned);
        }
        if let Some(actual) = &set.actual {
            widths.actual.observe(actual);
        }
    }
    widths
}
