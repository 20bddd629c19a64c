//! Naked pair detection.

use sudokit_core::{Cell, CellSet, DigitSet, Grid, Unit};
use tinyvec::ArrayVec;

use crate::{Finding, Technique};

/// Finds pairs of cells in a unit that share the same two candidates.
///
/// The two pattern cells lock those two digits, so every other empty cell
/// of the unit holding either digit is an elimination target. Pairs are
/// enumerated in unit cell order; a pair with no eliminations is skipped.
#[must_use]
pub fn find(grid: &Grid) -> Vec<Finding> {
    let mut findings = Vec::new();
    for unit in Unit::ALL {
        let mut pairs: ArrayVec<[(Cell, DigitSet); 9]> = ArrayVec::new();
        for cell in unit.cells() {
            let candidates = grid.candidates(cell);
            if candidates.len() == 2 {
                pairs.push((cell, candidates));
            }
        }
        for (i, &(first, digits)) in pairs.iter().enumerate() {
            for &(second, other) in &pairs[i + 1..] {
                if digits != other {
                    continue;
                }
                let pair_cells = CellSet::from_cell(first) | CellSet::from_cell(second);
                let mut eliminations = CellSet::EMPTY;
                for cell in unit.cells().difference(pair_cells) {
                    if !(grid.candidates(cell) & digits).is_empty() {
                        eliminations.insert(cell);
                    }
                }
                if !eliminations.is_empty() {
                    findings.push(Finding::new(
                        Technique::NakedPair,
                        pair_cells,
                        eliminations,
                        digits,
                    ));
                }
            }
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use sudokit_core::Digit;

    use super::*;

    #[test]
    fn test_wiki_naked_pair_board() {
        let grid: Grid = "
            4__ ___ _38
            __2 __4 1__
            __5 3__ 24_
            _7_ 6_9 __4
            _2_ ___ _7_
            6__ 7_3 _9_
            _57 __8 3__
            __3 9__ 4__
            24_ ___ __9
        "
        .parse()
        .unwrap();

        let findings = find(&grid);
        assert_eq!(findings.len(), 3);

        // First pair in scan order: {5,8} at r4c7/r6c7, seen in column 7
        let first = &findings[0];
        assert_eq!(first.technique(), Technique::NakedPair);
        assert_eq!(
            first.cells(),
            CellSet::from_iter([Cell::new(33), Cell::new(51)])
        );
        assert_eq!(
            first.digits(),
            DigitSet::from_iter([Digit::D5, Digit::D8])
        );
        assert_eq!(
            first.eliminations(),
            CellSet::from_iter([Cell::new(6), Cell::new(42), Cell::new(78)])
        );

        // The same pair shows up again in the box scan with box-local
        // eliminations
        let last = &findings[2];
        assert_eq!(last.cells(), first.cells());
        assert_eq!(
            last.eliminations(),
            CellSet::from_iter([
                Cell::new(34),
                Cell::new(42),
                Cell::new(44),
                Cell::new(53)
            ])
        );
    }

    #[test]
    fn test_pair_without_eliminations_is_skipped() {
        // Two cells forming a pair alone in an otherwise empty band see no
        // third cell holding either digit with only those candidates; an
        // empty grid trivially has no 2-candidate cells at all.
        assert!(find(&Grid::new()).is_empty());
    }

    #[test]
    fn test_classic_board_has_no_naked_pairs() {
        let grid: Grid =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
                .parse()
                .unwrap();
        assert!(find(&grid).is_empty());
    }
}
