//! Solving and technique detection for the Sudokit engine.
//!
//! Two independent facilities share this crate:
//!
//! - [`backtracking`]: a deterministic chronological backtracking solver
//!   ([`solve`], [`count_solutions`], [`has_unique_solution`]) plus
//!   whole-grid checks ([`is_valid_solution`], [`check_solvability`])
//! - [`detector`] and [`technique`]: scans for human solving techniques
//!   that report immutable [`Finding`]s over a grid snapshot
//!   ([`find_best_hint`], [`find_techniques`]), plus a [`practice`] table
//!   of boards that each demonstrate one technique
//!
//! Nothing here mutates a caller's grid; solvers work on copies and
//! detectors only read.

pub mod backtracking;
pub mod detector;
pub mod finding;
pub mod practice;
pub mod technique;

pub use self::{
    backtracking::{
        Solvability, check_solvability, count_solutions, has_unique_solution, is_valid_solution,
        solve,
    },
    detector::{find_best_hint, find_techniques},
    finding::{Finding, Technique, TechniqueCategory},
    practice::PracticePuzzle,
};
