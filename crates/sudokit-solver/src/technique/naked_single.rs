//! Naked single detection.

use sudokit_core::{Cell, CellSet, DigitSet, Grid};

use crate::{Finding, Technique};

/// Finds every empty cell with exactly one candidate, in row-major order.
///
/// Each finding is a placement: the pattern cell takes the single remaining
/// digit.
#[must_use]
pub fn find(grid: &Grid) -> Vec<Finding> {
    let mut findings = Vec::new();
    for cell in Cell::ALL {
        if let Some(digit) = grid.candidates(cell).as_single() {
            findings.push(Finding::new(
                Technique::NakedSingle,
                CellSet::from_cell(cell),
                CellSet::EMPTY,
                DigitSet::from_digit(digit),
            ));
        }
    }
    findings
}
