//! Puzzle generation for the Sudokit engine.
//!
//! [`PuzzleGenerator`] produces puzzles with exactly one solution by first
//! building a complete solved grid and then removing givens one at a time,
//! keeping a removal only while the remaining givens still pin down a
//! single solution. Difficulty targets a given count per
//! [`Difficulty`](sudokit_core::Difficulty) band.
//!
//! Generation is reproducible: [`PuzzleGenerator::from_seed`] yields the
//! same puzzle for the same seed and difficulty.
//!
//! # Examples
//!
//! ```
//! use sudokit_core::Difficulty;
//! use sudokit_generator::PuzzleGenerator;
//! use sudokit_solver::has_unique_solution;
//!
//! let mut generator = PuzzleGenerator::from_seed(42);
//! let puzzle = generator.generate(Difficulty::Easy);
//! assert!(has_unique_solution(puzzle.givens()));
//! ```

pub mod generator;
pub mod singles;

pub use self::{
    generator::{PuzzleGenerator, assess_difficulty},
    singles::is_solvable_with_singles_only,
};
