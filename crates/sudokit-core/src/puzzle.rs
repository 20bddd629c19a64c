//! Puzzles: a set of givens together with their solution.

use crate::{Cell, Difficulty, Digit, Grid};

/// An immutable puzzle: the given cells, the full solution, and the
/// difficulty it was produced (or classified) as.
///
/// # Examples
///
/// ```
/// use sudokit_core::{Cell, Difficulty, Digit, Grid, Puzzle};
///
/// let givens: Grid = "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79"
///     .parse()?;
/// let solution: Grid = "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
///     .parse()?;
/// let puzzle = Puzzle::new(givens, solution, Difficulty::Easy);
///
/// assert_eq!(puzzle.given_count(), 30);
/// assert!(puzzle.is_given(Cell::new(0)));
/// assert!(puzzle.is_correct(Cell::new(2), Digit::D4));
/// # Ok::<(), sudokit_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    givens: Grid,
    solution: Grid,
    difficulty: Difficulty,
}

impl Puzzle {
    /// Creates a puzzle from its givens, solution, and difficulty.
    ///
    /// # Panics
    ///
    /// Panics if the solution is not a solved grid, or if some given
    /// disagrees with the solution.
    #[must_use]
    pub fn new(givens: Grid, solution: Grid, difficulty: Difficulty) -> Self {
        assert!(solution.is_solved(), "puzzle solution is not solved");
        for cell in Cell::ALL {
            if let Some(digit) = givens.get(cell) {
                assert!(
                    solution.get(cell) == Some(digit),
                    "given at {cell} disagrees with the solution"
                );
            }
        }
        Self {
            givens,
            solution,
            difficulty,
        }
    }

    /// Returns the grid of given cells.
    #[must_use]
    pub const fn givens(&self) -> &Grid {
        &self.givens
    }

    /// Returns the solved grid.
    #[must_use]
    pub const fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Returns the puzzle's difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the number of given cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.givens.filled_count()
    }

    /// Returns `true` if `cell` is one of the givens.
    #[must_use]
    pub fn is_given(&self, cell: Cell) -> bool {
        self.givens.get(cell).is_some()
    }

    /// Returns `true` if `digit` is the solution's value at `cell`.
    #[must_use]
    pub fn is_correct(&self, cell: Cell, digit: Digit) -> bool {
        self.solution.get(cell) == Some(digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIVENS: &str =
        "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn puzzle() -> Puzzle {
        Puzzle::new(
            GIVENS.parse().unwrap(),
            SOLUTION.parse().unwrap(),
            Difficulty::Easy,
        )
    }

    #[test]
    fn test_accessors() {
        let puzzle = puzzle();
        assert_eq!(puzzle.given_count(), 30);
        assert_eq!(puzzle.difficulty(), Difficulty::Easy);
        assert_eq!(puzzle.givens().filled_count(), 30);
        assert!(puzzle.solution().is_solved());

        assert!(puzzle.is_given(Cell::new(0)));
        assert!(!puzzle.is_given(Cell::new(2)));

        // Correctness checks against the stored solution
        assert!(puzzle.is_correct(Cell::new(2), Digit::D4));
        assert!(!puzzle.is_correct(Cell::new(2), Digit::D1));
    }

    #[test]
    #[should_panic(expected = "puzzle solution is not solved")]
    fn test_rejects_incomplete_solution() {
        let givens: Grid = GIVENS.parse().unwrap();
        let _ = Puzzle::new(givens, givens, Difficulty::Easy);
    }

    #[test]
    #[should_panic(expected = "disagrees with the solution")]
    fn test_rejects_given_mismatch() {
        let mut givens: Grid = GIVENS.parse().unwrap();
        givens.set(Cell::new(2), Digit::D1); // solution has 4 here
        let _ = Puzzle::new(givens, SOLUTION.parse().unwrap(), Difficulty::Easy);
    }
}
