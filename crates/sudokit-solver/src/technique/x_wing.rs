//! X-Wing detection.

use sudokit_core::{CellSet, Digit, DigitSet, Grid};
use tinyvec::ArrayVec;

use crate::{Finding, Technique};

use super::candidate_cells;

/// Finds X-Wings: a digit restricted to the same two columns in exactly two
/// rows, or the same two rows in exactly two columns.
///
/// The digit must occupy two opposite corners of the rectangle, so it can
/// be eliminated from the rest of the two covering lines. Digits are
/// scanned in ascending order, the row-based pass before the column-based
/// pass.
#[must_use]
pub fn find(grid: &Grid) -> Vec<Finding> {
    let mut findings = Vec::new();
    for digit in Digit::ALL {
        scan(grid, digit, &CellSet::ROWS, &CellSet::COLUMNS, &mut findings);
        scan(grid, digit, &CellSet::COLUMNS, &CellSet::ROWS, &mut findings);
    }
    findings
}

/// One directional pass: base lines with exactly two candidate cells,
/// paired when they cover the same two cross lines.
fn scan(
    grid: &Grid,
    digit: Digit,
    base: &[CellSet; 9],
    cross: &[CellSet; 9],
    findings: &mut Vec<Finding>,
) {
    let mut candidates_per_line: ArrayVec<[(usize, CellSet); 9]> = ArrayVec::new();
    for (i, &line) in base.iter().enumerate() {
        let cells = candidate_cells(grid, line, digit);
        if cells.len() == 2 {
            candidates_per_line.push((i, cells));
        }
    }

    for (a, &(i1, cells1)) in candidates_per_line.iter().enumerate() {
        for &(i2, cells2) in &candidates_per_line[a + 1..] {
            let mask = cross_mask(cells1, cross);
            if mask != cross_mask(cells2, cross) {
                continue;
            }
            let mut cross_cells = CellSet::EMPTY;
            for (j, &line) in cross.iter().enumerate() {
                if mask & (1 << j) != 0 {
                    cross_cells |= line;
                }
            }
            let rest = cross_cells.difference(base[i1] | base[i2]);
            let eliminations = candidate_cells(grid, rest, digit);
            if !eliminations.is_empty() {
                findings.push(Finding::new(
                    Technique::XWing,
                    cells1 | cells2,
                    eliminations,
                    DigitSet::from_digit(digit),
                ));
            }
        }
    }
}

/// Bitmask of the cross lines that `cells` touches.
fn cross_mask(cells: CellSet, cross: &[CellSet; 9]) -> u16 {
    let mut mask = 0;
    for (j, &line) in cross.iter().enumerate() {
        if !(cells & line).is_empty() {
            mask |= 1 << j;
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use sudokit_core::Cell;

    use super::*;

    #[test]
    fn test_crafted_row_x_wing() {
        // Rows 3 and 6 each confine the digit 7 to columns 4 and 7; every
        // other cell of those columns loses 7
        let grid: Grid = "
            ___ ___ ___
            ___ ___ ___
            123 _45 _68
            ___ ___ ___
            ___ ___ ___
            234 _56 _19
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        "
        .parse()
        .unwrap();

        // The corners hold 7 as a candidate but not alone
        assert!(grid.candidates(Cell::new(21)).contains(Digit::D7));
        assert!(grid.candidates(Cell::new(21)).len() > 1);

        let findings = find(&grid);
        assert_eq!(findings.len(), 1);

        let finding = &findings[0];
        assert_eq!(finding.technique(), Technique::XWing);
        assert_eq!(finding.digits(), DigitSet::from_digit(Digit::D7));
        assert_eq!(
            finding.cells(),
            CellSet::from_iter([Cell::new(21), Cell::new(24), Cell::new(48), Cell::new(51)])
        );
        let expected: CellSet = [3, 6, 12, 15, 30, 33, 39, 42, 57, 60, 66, 69, 75, 78]
            .into_iter()
            .map(Cell::new)
            .collect();
        assert_eq!(finding.eliminations(), expected);

        // No simpler technique applies on this board
        assert!(super::super::naked_single::find(&grid).is_empty());
        assert!(super::super::hidden_single::find(&grid).is_empty());
        assert!(super::super::naked_pair::find(&grid).is_empty());
        assert!(super::super::hidden_pair::find(&grid).is_empty());
        assert!(super::super::pointing_pair::find(&grid).is_empty());
        assert!(super::super::box_line_reduction::find(&grid).is_empty());
    }

    #[test]
    fn test_classic_board_column_x_wings() {
        let grid: Grid =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
                .parse()
                .unwrap();

        let findings = find(&grid);
        assert_eq!(findings.len(), 2);

        // Column-based X-Wing on digit 6 in columns 4 and 6
        let first = &findings[0];
        assert_eq!(first.digits(), DigitSet::from_digit(Digit::D6));
        assert_eq!(
            first.cells(),
            CellSet::from_iter([Cell::new(3), Cell::new(5), Cell::new(75), Cell::new(77)])
        );
        assert_eq!(first.eliminations(), CellSet::from_cell(Cell::new(78)));

        let second = &findings[1];
        assert_eq!(second.digits(), DigitSet::from_digit(Digit::D7));
        assert_eq!(
            second.cells(),
            CellSet::from_iter([Cell::new(30), Cell::new(32), Cell::new(57), Cell::new(59)])
        );
        assert_eq!(
            second.eliminations(),
            CellSet::from_iter([Cell::new(33), Cell::new(56)])
        );
    }

    #[test]
    fn test_no_findings_on_empty_grid() {
        assert!(find(&Grid::new()).is_empty());
    }
}
