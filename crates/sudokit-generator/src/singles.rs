//! Solvability check restricted to naked and hidden singles.
//!
//! A puzzle that falls to singles alone never requires the solver to
//! track pencil marks, which makes this a useful gate when calibrating
//! easy puzzles.

use sudokit_core::{Cell, Grid, Unit};

/// Returns `true` if the grid can be completed using only naked and
/// hidden singles.
///
/// The check repeatedly sweeps the grid in row-major order. For each
/// empty cell it first looks for a naked single (exactly one candidate)
/// and then for a hidden single in any of the cell's row, column, or
/// box. The sweep restarts until a full pass places nothing.
#[must_use]
pub fn is_solvable_with_singles_only(grid: &Grid) -> bool {
    let mut work = *grid;
    let mut progress = true;
    while progress {
        progress = false;
        for cell in Cell::ALL {
            if work.get(cell).is_some() {
                continue;
            }
            let candidates = work.candidates(cell);
            if let Some(digit) = candidates.as_single() {
                work.set(cell, digit);
                progress = true;
                continue;
            }
            let units = [
                Unit::ROWS[cell.row() as usize],
                Unit::COLUMNS[cell.column() as usize],
                Unit::BOXES[cell.box_index() as usize],
            ];
            'units: for unit in units {
                for digit in candidates {
                    let unique = unit.cells().into_iter().all(|other| {
                        other == cell
                            || work.get(other).is_some()
                            || !work.candidates(other).contains(digit)
                    });
                    if unique {
                        work.set(cell, digit);
                        progress = true;
                        break 'units;
                    }
                }
            }
        }
    }
    work.is_complete()
}
