//! Core data structures for the Sudokit engine.
//!
//! This crate provides the grid data model shared by the solver and the
//! generator:
//!
//! - [`digit`]: type-safe digits 1-9 and [`DigitSet`] candidate sets
//! - [`cell`]: row-major cell indices with precomputed peer sets
//! - [`unit`]: the 27 rows, columns, and boxes as [`CellSet`] masks
//! - [`grid`]: the [`Grid`] value type with on-demand candidate derivation,
//!   conflict detection, and grid-string parsing
//! - [`difficulty`] / [`puzzle`]: difficulty metadata and immutable puzzles
//! - [`builtin`]: a table of hand-checked built-in puzzles
//!
//! Candidates are always derived from the grid's current values; nothing in
//! this crate caches them.
//!
//! # Examples
//!
//! ```
//! use sudokit_core::{Cell, Digit, Grid};
//!
//! let mut grid = Grid::new();
//! grid.set(Cell::from_coords(4, 4), Digit::D5);
//!
//! let candidates = grid.candidates(Cell::from_coords(4, 5));
//! assert!(!candidates.contains(Digit::D5)); // 5 visible in the row
//! assert_eq!(candidates.len(), 8);
//! ```

pub mod builtin;
pub mod cell;
pub mod cell_set;
pub mod difficulty;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod puzzle;
pub mod unit;

pub use self::{
    cell::Cell,
    cell_set::CellSet,
    difficulty::Difficulty,
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    puzzle::Puzzle,
    unit::Unit,
};
