//! Backtracking solver and solvability checks.
//!
//! The solver is deliberately plain: it always branches on the first empty
//! cell in row-major order and tries digits in ascending order, undoing the
//! placement when a branch dead-ends. There are no cell- or value-ordering
//! heuristics, so the walk order (and therefore the solution the solver
//! returns first) is fully determined by the input grid.

use derive_more::{Display, IsVariant};
use sudokit_core::{Digit, DigitSet, Grid, Unit};

/// Solves the grid by backtracking, returning the first solution found.
///
/// Returns `None` if the grid has no solution, including the case where the
/// filled cells already contradict each other. The input is not modified.
///
/// # Examples
///
/// ```
/// use sudokit_core::Grid;
/// use sudokit_solver::solve;
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
/// let solution = solve(&grid).unwrap();
/// assert!(solution.is_solved());
/// # Ok::<(), sudokit_core::ParseGridError>(())
/// ```
#[must_use]
pub fn solve(grid: &Grid) -> Option<Grid> {
    // The walk below only looks at empty cells, so a contradiction between
    // two filled cells has to be rejected up front.
    if grid.has_conflicts() {
        return None;
    }
    let mut work = *grid;
    fill_first_empty(&mut work).then_some(work)
}

fn fill_first_empty(grid: &mut Grid) -> bool {
    let Some(cell) = grid.first_empty() else {
        return true;
    };
    for digit in Digit::ALL {
        if grid.is_valid_placement(cell, digit) {
            grid.set(cell, digit);
            if fill_first_empty(grid) {
                return true;
            }
            grid.clear(cell);
        }
    }
    false
}

/// Counts the grid's solutions, giving up once `limit` have been found.
///
/// The return value is therefore `min(actual solutions, limit)`. Uniqueness
/// checks use `count_solutions(grid, 2) == 1`, which stops as soon as a
/// second solution turns up instead of enumerating the rest.
#[must_use]
pub fn count_solutions(grid: &Grid, limit: usize) -> usize {
    if limit == 0 || grid.has_conflicts() {
        return 0;
    }
    let mut work = *grid;
    let mut count = 0;
    count_up_to(&mut work, limit, &mut count);
    count
}

fn count_up_to(grid: &mut Grid, limit: usize, count: &mut usize) {
    let Some(cell) = grid.first_empty() else {
        *count += 1;
        return;
    };
    for digit in Digit::ALL {
        if grid.is_valid_placement(cell, digit) {
            grid.set(cell, digit);
            count_up_to(grid, limit, count);
            grid.clear(cell);
            if *count >= limit {
                return;
            }
        }
    }
}

/// Returns `true` if the grid has exactly one solution.
#[must_use]
pub fn has_unique_solution(grid: &Grid) -> bool {
    count_solutions(grid, 2) == 1
}

/// Returns `true` if the grid is a complete, correct solution: every cell
/// filled and every row, column, and box a permutation of 1-9.
#[must_use]
pub fn is_valid_solution(grid: &Grid) -> bool {
    grid.is_complete()
        && Unit::ALL.into_iter().all(|unit| {
            let digits: DigitSet = unit
                .cells()
                .into_iter()
                .filter_map(|cell| grid.get(cell))
                .collect();
            digits == DigitSet::FULL
        })
}

/// The outcome of a solvability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum Solvability {
    /// Two filled cells already contradict each other.
    #[display("grid has conflicting cells")]
    HasConflicts,
    /// The grid has at least one solution.
    #[display("grid is solvable")]
    Solvable,
    /// The grid has no conflicts but also no solution.
    #[display("grid is unsolvable")]
    Unsolvable,
}

/// Classifies the grid's solvability.
///
/// Conflicts take precedence: a grid whose filled cells clash reports
/// [`Solvability::HasConflicts`] without running the solver at all.
#[must_use]
pub fn check_solvability(grid: &Grid) -> Solvability {
    if grid.has_conflicts() {
        Solvability::HasConflicts
    } else if count_solutions(grid, 1) > 0 {
        Solvability::Solvable
    } else {
        Solvability::Unsolvable
    }
}

#[cfg(test)]
mod tests {
    use sudokit_core::{Cell, Difficulty, builtin};

    use super::*;

    const CLASSIC: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const CLASSIC_SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    // CLASSIC with r3c7 forced to 1: conflict-free, but no solution exists.
    const UNSOLVABLE: &str =
        "530070000600195000098000160800060003400803001700020006060000280000419005000080079";

    // CLASSIC_SOLUTION with an interchangeable 6/7 rectangle cleared
    // (r1c4, r1c5, r4c4, r4c5): exactly two solutions.
    const TWO_SOLUTIONS: &str =
        "534008912672195348198342567859001423426853791713924856961537284287419635345286179";

    #[test]
    fn test_solve_classic() {
        let grid: Grid = CLASSIC.parse().unwrap();
        let solution = solve(&grid).unwrap();
        assert_eq!(solution, CLASSIC_SOLUTION.parse().unwrap());

        // Givens are untouched
        for cell in Cell::ALL {
            if let Some(digit) = grid.get(cell) {
                assert_eq!(solution.get(cell), Some(digit));
            }
        }
    }

    #[test]
    fn test_solve_already_solved() {
        let solution: Grid = CLASSIC_SOLUTION.parse().unwrap();
        assert_eq!(solve(&solution), Some(solution));
    }

    #[test]
    fn test_solve_unsolvable() {
        let grid: Grid = UNSOLVABLE.parse().unwrap();
        assert!(grid.is_valid());
        assert_eq!(solve(&grid), None);
    }

    #[test]
    fn test_solve_conflicting() {
        let mut grid: Grid = CLASSIC.parse().unwrap();
        grid.set(Cell::from_coords(0, 8), Digit::D5); // 5 already in row 1
        assert_eq!(solve(&grid), None);
    }

    #[test]
    fn test_solve_empty_grid_is_deterministic() {
        // With the fixed walk order the empty grid always yields the same
        // solution, and its first row is 1..9 in order.
        let solution = solve(&Grid::new()).unwrap();
        assert!(solution.is_solved());
        for (i, digit) in Digit::ALL.into_iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let cell = Cell::from_coords(0, i as u8);
            assert_eq!(solution.get(cell), Some(digit));
        }
        assert_eq!(solve(&Grid::new()), Some(solution));
    }

    #[test]
    fn test_count_solutions() {
        let unique: Grid = CLASSIC.parse().unwrap();
        assert_eq!(count_solutions(&unique, 2), 1);
        assert!(has_unique_solution(&unique));

        let two: Grid = TWO_SOLUTIONS.parse().unwrap();
        assert_eq!(count_solutions(&two, 1), 1);
        assert_eq!(count_solutions(&two, 2), 2);
        // Only two solutions exist, so a larger limit still reports two
        assert_eq!(count_solutions(&two, 3), 2);
        assert!(!has_unique_solution(&two));

        let unsolvable: Grid = UNSOLVABLE.parse().unwrap();
        assert_eq!(count_solutions(&unsolvable, 2), 0);
        assert!(!has_unique_solution(&unsolvable));

        assert_eq!(count_solutions(&unique, 0), 0);
    }

    #[test]
    fn test_is_valid_solution() {
        let solution: Grid = CLASSIC_SOLUTION.parse().unwrap();
        assert!(is_valid_solution(&solution));

        // Incomplete grid
        assert!(!is_valid_solution(&CLASSIC.parse().unwrap()));

        // Complete but with a duplicated digit
        let mut broken = solution;
        broken.set(Cell::new(0), Digit::D3);
        assert!(!is_valid_solution(&broken));
    }

    #[test]
    fn test_builtin_puzzles_admit_exactly_one_solution() {
        // The core crate stores the table but cannot run the solver, so the
        // uniqueness guarantee is checked here.
        for difficulty in Difficulty::ALL {
            for puzzle in builtin::puzzles(difficulty) {
                assert!(is_valid_solution(puzzle.solution()));
                assert_eq!(solve(puzzle.givens()), Some(*puzzle.solution()));
                assert!(has_unique_solution(puzzle.givens()));
            }
        }
    }

    #[test]
    fn test_check_solvability() {
        let solvable: Grid = CLASSIC.parse().unwrap();
        assert_eq!(check_solvability(&solvable), Solvability::Solvable);

        let unsolvable: Grid = UNSOLVABLE.parse().unwrap();
        assert_eq!(check_solvability(&unsolvable), Solvability::Unsolvable);

        // Conflicts win over unsolvability
        let mut conflicting = solvable;
        conflicting.set(Cell::from_coords(0, 8), Digit::D5);
        assert_eq!(check_solvability(&conflicting), Solvability::HasConflicts);
        assert!(check_solvability(&conflicting).is_has_conflicts());
    }
}
