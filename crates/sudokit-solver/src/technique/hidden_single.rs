//! Hidden single detection.

use sudokit_core::{CellSet, Digit, DigitSet, Grid, Unit};

use crate::{Finding, Technique};

use super::candidate_cells;

/// Finds every digit that fits exactly one cell of a unit.
///
/// Units are scanned in row, column, box order and digits in ascending
/// order. A hidden single visible from several units (say its row and its
/// box) is reported once per unit.
#[must_use]
pub fn find(grid: &Grid) -> Vec<Finding> {
    let mut findings = Vec::new();
    for unit in Unit::ALL {
        for digit in Digit::ALL {
            let cells = candidate_cells(grid, unit.cells(), digit);
            if let Some(cell) = cells.as_single() {
                findings.push(Finding::new(
                    Technique::HiddenSingle,
                    CellSet::from_cell(cell),
                    CellSet::EMPTY,
                    DigitSet::from_digit(digit),
                ));
            }
        }
    }
    findings
}
