//! Box/line reduction (line-to-box intersection) detection.

use sudokit_core::{Cell, CellSet, Digit, DigitSet, Grid, Unit};

use crate::{Finding, Technique};

use super::candidate_cells;

/// Finds digits whose candidates within a row or column all fall in one box.
///
/// The digit must then be placed in that box on the line, so it can be
/// eliminated from the box's six other cells. The converse of a pointing
/// pair: rows are scanned first, then columns.
#[must_use]
pub fn find(grid: &Grid) -> Vec<Finding> {
    let mut findings = Vec::new();
    for line in Unit::ROWS.into_iter().chain(Unit::COLUMNS) {
        for digit in Digit::ALL {
            let cells = candidate_cells(grid, line.cells(), digit);
            if !(2..=3).contains(&cells.len()) {
                continue;
            }
            let Some(box_index) = common_box(cells) else {
                continue;
            };
            let box_rest = CellSet::BOXES[box_index].difference(line.cells());
            let eliminations = candidate_cells(grid, box_rest, digit);
            if !eliminations.is_empty() {
                findings.push(Finding::new(
                    Technique::BoxLineReduction,
                    cells,
                    eliminations,
                    DigitSet::from_digit(digit),
                ));
            }
        }
    }
    findings
}

/// If every cell lies in the same box, returns its index.
fn common_box(cells: CellSet) -> Option<usize> {
    let mut boxes = cells.into_iter().map(Cell::box_index);
    let first = boxes.next()?;
    boxes.all(|b| b == first).then_some(usize::from(first))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_board() {
        let grid: Grid = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();

        let findings = find(&grid);
        assert_eq!(findings.len(), 11);

        // First in scan order: in row 2 the digit 3 fits only r2c7/r2c8,
        // both in box 3, so 3 falls out of the rest of that box
        let first = &findings[0];
        assert_eq!(first.technique(), Technique::BoxLineReduction);
        assert_eq!(first.cells(), CellSet::from_iter([Cell::new(15), Cell::new(16)]));
        assert_eq!(first.digits(), DigitSet::from_digit(Digit::D3));
        assert_eq!(first.eliminations(), CellSet::from_cell(Cell::new(24)));
    }

    #[test]
    fn test_no_findings_on_empty_grid() {
        assert!(find(&Grid::new()).is_empty());
    }
}
