//! Pointing pair (box-to-line intersection) detection.

use sudokit_core::{Cell, CellSet, Digit, DigitSet, Grid};

use crate::{Finding, Technique};

use super::candidate_cells;

/// Finds digits whose candidates within a box all lie on one row or column.
///
/// The digit must then be placed inside the box on that line, so it can be
/// eliminated from the rest of the line. Two or three aligned cells qualify
/// (the name covers both); boxes are scanned in order, the row check before
/// the column check.
#[must_use]
pub fn find(grid: &Grid) -> Vec<Finding> {
    let mut findings = Vec::new();
    for box_cells in CellSet::BOXES {
        for digit in Digit::ALL {
            let cells = candidate_cells(grid, box_cells, digit);
            if !(2..=3).contains(&cells.len()) {
                continue;
            }
            if let Some(row) = common_line(cells, Cell::row) {
                push_line_elimination(grid, &mut findings, cells, digit, CellSet::ROWS[row]);
            }
            if let Some(column) = common_line(cells, Cell::column) {
                push_line_elimination(grid, &mut findings, cells, digit, CellSet::COLUMNS[column]);
            }
        }
    }
    findings
}

/// If every cell maps to the same line index, returns it.
fn common_line(cells: CellSet, line_of: impl Fn(Cell) -> u8) -> Option<usize> {
    let mut lines = cells.into_iter().map(line_of);
    let first = lines.next()?;
    lines.all(|line| line == first).then_some(usize::from(first))
}

fn push_line_elimination(
    grid: &Grid,
    findings: &mut Vec<Finding>,
    cells: CellSet,
    digit: Digit,
    line: CellSet,
) {
    let eliminations = candidate_cells(grid, line.difference(cells), digit);
    if !eliminations.is_empty() {
        findings.push(Finding::new(
            Technique::PointingPair,
            cells,
            eliminations,
            DigitSet::from_digit(digit),
        ));
    }
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
        assert_eq!(findings.len(), 10);

        // First in scan order: in box 1 the digit 7 fits only r2c2/r2c3,
        // so 7 falls out of the rest of row 2
        let first = &findings[0];
        assert_eq!(first.technique(), Technique::PointingPair);
        assert_eq!(first.cells(), CellSet::from_iter([Cell::new(10), Cell::new(11)]));
        assert_eq!(first.digits(), DigitSet::from_digit(Digit::D7));
        assert_eq!(
            first.eliminations(),
            CellSet::from_iter([Cell::new(15), Cell::new(17)])
        );
    }

    #[test]
    fn test_wiki_naked_pair_board_column_pointing() {
        let grid: Grid =
            "400000038002004100005300240070609004020000070600703090057008300003900400240000009"
                .parse()
                .unwrap();

        let findings = find(&grid);
        assert_eq!(findings.len(), 2);

        // Box 4's cells for digit 3 sit in one column
        let first = &findings[0];
        assert_eq!(first.cells(), CellSet::from_iter([Cell::new(27), Cell::new(36)]));
        assert_eq!(first.digits(), DigitSet::from_digit(Digit::D3));
        assert_eq!(first.eliminations(), CellSet::from_cell(Cell::new(9)));
    }

    #[test]
    fn test_no_findings_on_empty_grid() {
        assert!(find(&Grid::new()).is_empty());
    }
}
