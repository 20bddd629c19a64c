//! Per-technique detectors.
//!
//! Each submodule scans a grid snapshot for one technique and returns every
//! occurrence as a [`Finding`](crate::Finding). The scans share a few rules:
//!
//! - only empty cells participate; candidates are recomputed from the grid
//!   on demand
//! - the grid is never mutated
//! - findings without an effect (no placement and no elimination) are not
//!   reported
//! - units are visited in row, column, box order and digits in ascending
//!   order, so the result order is deterministic

use sudokit_core::{CellSet, Digit, Grid};

pub mod box_line_reduction;
pub mod hidden_pair;
pub mod hidden_single;
pub mod naked_pair;
pub mod naked_single;
pub mod pointing_pair;
pub mod x_wing;

/// Returns the empty cells of `cells` whose candidates include `digit`.
pub(crate) fn candidate_cells(grid: &Grid, cells: CellSet, digit: Digit) -> CellSet {
    cells
        .into_iter()
        .filter(|&cell| grid.candidates(cell).contains(digit))
        .collect()
}
