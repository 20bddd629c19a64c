//! Hidden pair detection.

use sudokit_core::{CellSet, Digit, DigitSet, Grid, Unit};

use crate::{Finding, Technique};

use super::candidate_cells;

/// Finds pairs of digits confined to the same two cells of a unit.
///
/// Those two cells must then hold exactly those two digits, so any other
/// candidate in them can be eliminated. Digit pairs are enumerated in
/// ascending lexicographic order; a pair whose cells carry no extra
/// candidates has no effect and is skipped.
#[must_use]
pub fn find(grid: &Grid) -> Vec<Finding> {
    let mut findings = Vec::new();
    for unit in Unit::ALL {
        let positions = Digit::ALL.map(|digit| candidate_cells(grid, unit.cells(), digit));
        for (i, first) in Digit::ALL.into_iter().enumerate() {
            for (j, second) in Digit::ALL.into_iter().enumerate().skip(i + 1) {
                let cells = positions[i];
                if cells.len() != 2 || positions[j] != cells {
                    continue;
                }
                let digits = DigitSet::from_digit(first) | DigitSet::from_digit(second);
                let eliminations: CellSet = cells
                    .into_iter()
                    .filter(|&cell| !grid.candidates(cell).difference(digits).is_empty())
                    .collect();
                if !eliminations.is_empty() {
                    findings.push(Finding::new(
                        Technique::HiddenPair,
                        cells,
                        eliminations,
                        digits,
                    ));
                }
            }
        }
    }
    findings
}
