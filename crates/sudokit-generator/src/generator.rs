//! Puzzle generation by uniqueness-preserving cell removal.

use rand::{RngExt as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;
use sudokit_core::{Cell, Difficulty, Digit, Grid, Puzzle, Unit};
use sudokit_solver::{count_solutions, solve};

/// A seedable puzzle generator.
///
/// Generation is a two-step process: build a random solved grid, then
/// remove cells in random order, keeping each removal only if the remaining
/// givens still admit exactly one solution. All randomness comes from the
/// generator's own PCG stream, so two generators built with
/// [`from_seed`](Self::from_seed) on the same seed produce identical
/// puzzles.
///
/// # Examples
///
/// ```
/// use sudokit_core::Difficulty;
/// use sudokit_generator::PuzzleGenerator;
/// use sudokit_solver::has_unique_solution;
///
/// let mut generator = PuzzleGenerator::from_seed(1);
/// let puzzle = generator.generate(Difficulty::Easy);
/// assert!(has_unique_solution(puzzle.givens()));
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    rng: Pcg64Mcg,
}

impl PuzzleGenerator {
    /// Creates a generator seeded from this thread's entropy source.
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(rand::random())
    }

    /// Creates a generator with a fixed seed, for reproducible output.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Produces a random solved grid.
    ///
    /// The three diagonal boxes (top-left, center, bottom-right) share no
    /// row or column, so they can be filled with independent random
    /// permutations of 1-9; the backtracking solver then completes the
    /// rest.
    pub fn solved_grid(&mut self) -> Grid {
        loop {
            let mut grid = Grid::new();
            for box_index in [0, 4, 8] {
                let mut digits = Digit::ALL;
                digits.shuffle(&mut self.rng);
                for (i, digit) in digits.into_iter().enumerate() {
                    #[expect(clippy::cast_possible_truncation)]
                    grid.set(Unit::BOXES[box_index].cell(i as u8), digit);
                }
            }
            if let Some(solution) = solve(&grid) {
                return solution;
            }
        }
    }

    /// Generates a puzzle of the requested difficulty.
    ///
    /// The target given count is sampled uniformly from the difficulty's
    /// range. Cells are visited once each in random order; a cell is
    /// cleared tentatively and restored when the removal would allow a
    /// second solution. Removal stops as soon as the target is reached.
    ///
    /// Greedy and approximate: when the chosen visit order runs out of
    /// removable cells early, the puzzle keeps more givens than targeted
    /// rather than retrying with a different order.
    pub fn generate(&mut self, difficulty: Difficulty) -> Puzzle {
        let solution = self.solved_grid();
        let target = usize::from(self.rng.random_range(difficulty.given_range()));
        let mut order = Cell::ALL;
        order.shuffle(&mut self.rng);

        let mut givens = solution;
        let mut remaining = Cell::COUNT;
        for cell in order {
            if remaining == target {
                break;
            }
            let Some(digit) = givens.get(cell) else {
                continue;
            };
            givens.clear(cell);
            if count_solutions(&givens, 2) == 1 {
                remaining -= 1;
                log::trace!("removed {digit} at {cell}, {remaining} givens left");
            } else {
                givens.set(cell, digit);
                log::trace!("kept {digit} at {cell}, removal breaks uniqueness");
            }
        }
        log::debug!("generated {difficulty} puzzle with {remaining} givens (target {target})");
        Puzzle::new(givens, solution, difficulty)
    }

    /// Generates `count` puzzles of the same difficulty.
    pub fn generate_batch(&mut self, count: usize, difficulty: Difficulty) -> Vec<Puzzle> {
        (0..count).map(|_| self.generate(difficulty)).collect()
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies a puzzle grid's difficulty from its empty-cell count.
///
/// At most 45 empty cells is Easy, at most 51 Medium, anything above Hard.
/// A coarse proxy: it ignores which techniques the board actually needs, so
/// a sparse board full of singles and a sparse board needing an X-Wing rate
/// the same.
#[must_use]
pub fn assess_difficulty(grid: &Grid) -> Difficulty {
    match grid.empty_count() {
        0..=45 => Difficulty::Easy,
        46..=51 => Difficulty::Medium,
        _ => Difficulty::Hard,
    }
}
