//! The 9x9 board grid.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{Cell, CellSet, Digit, DigitSet};

/// A 9x9 Sudoku grid where each cell is either empty or holds a digit.
///
/// `Grid` is a plain value type (81 bytes plus discriminants); solvers and
/// generators copy it freely and work on the copies. Candidates are always
/// recomputed on demand from the current cell values; the grid never caches
/// them, so there is no derived state to keep in sync.
///
/// # Examples
///
/// ```
/// use sudokit_core::{Cell, Digit, Grid};
///
/// let mut grid = Grid::new();
/// grid.set(Cell::from_coords(0, 0), Digit::D5);
///
/// // 5 is no longer a candidate anywhere in row 1, column 1, or box 1
/// let neighbor = Cell::from_coords(0, 8);
/// assert!(!grid.candidates(neighbor).contains(Digit::D5));
/// ```
///
/// Grids parse from strings where `1`-`9` are filled cells, `.`, `_`, or `0`
/// are empty cells, and whitespace is ignored:
///
/// ```
/// use sudokit_core::Grid;
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
/// assert_eq!(grid.filled_count(), 30);
/// # Ok::<(), sudokit_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; Cell::COUNT],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; Cell::COUNT],
        }
    }

    /// Returns the digit at `cell`, or `None` if the cell is empty.
    #[must_use]
    #[inline]
    pub const fn get(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.index() as usize]
    }

    /// Places `digit` at `cell`, overwriting any previous value.
    #[inline]
    pub const fn set(&mut self, cell: Cell, digit: Digit) {
        self.cells[cell.index() as usize] = Some(digit);
    }

    /// Empties `cell`.
    #[inline]
    pub const fn clear(&mut self, cell: Cell) {
        self.cells[cell.index() as usize] = None;
    }

    /// Returns the first empty cell in row-major index order.
    #[must_use]
    pub fn first_empty(&self) -> Option<Cell> {
        Cell::ALL.into_iter().find(|&cell| self.get(cell).is_none())
    }

    /// Returns the set of empty cells.
    #[must_use]
    pub fn empty_cells(&self) -> CellSet {
        Cell::ALL
            .into_iter()
            .filter(|&cell| self.get(cell).is_none())
            .collect()
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        Cell::COUNT - self.empty_count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the candidates for `cell`: the digits that do not yet appear
    /// in the cell's row, column, or box.
    ///
    /// Returns the empty set for a filled cell. The result is derived from
    /// the current grid on every call.
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        if self.get(cell).is_some() {
            return DigitSet::EMPTY;
        }
        let mut candidates = DigitSet::FULL;
        for peer in cell.peers() {
            if let Some(digit) = self.get(peer) {
                candidates.remove(digit);
            }
        }
        candidates
    }

    /// Returns `true` if placing `digit` at `cell` would not clash with any
    /// of the cell's peers.
    #[must_use]
    pub fn is_valid_placement(&self, cell: Cell, digit: Digit) -> bool {
        cell.peers().into_iter().all(|peer| self.get(peer) != Some(digit))
    }

    /// Returns `true` if `cell` holds a digit that also appears in one of
    /// its peers.
    #[must_use]
    pub fn has_conflict_at(&self, cell: Cell) -> bool {
        match self.get(cell) {
            Some(digit) => cell.peers().into_iter().any(|peer| self.get(peer) == Some(digit)),
            None => false,
        }
    }

    /// Returns the set of filled cells whose digit repeats within a unit.
    ///
    /// Both ends of each clash are included.
    #[must_use]
    pub fn conflict_cells(&self) -> CellSet {
        Cell::ALL
            .into_iter()
            .filter(|&cell| self.has_conflict_at(cell))
            .collect()
    }

    /// Returns `true` if some filled cell clashes with a peer.
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        Cell::ALL.into_iter().any(|cell| self.has_conflict_at(cell))
    }

    /// Returns `true` if no filled cell clashes with a peer.
    ///
    /// An incomplete (or even empty) grid is valid as long as its filled
    /// cells do not contradict each other.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.has_conflicts()
    }

    /// Returns `true` if the grid is completely filled with no conflicts,
    /// i.e. every row, column, and box holds each digit exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.is_valid()
    }

    /// Converts the grid into 81 values in row-major order, 0 for empty
    /// cells and 1-9 for digits.
    #[must_use]
    pub fn to_values(&self) -> [u8; Cell::COUNT] {
        let mut values = [0; Cell::COUNT];
        for (value, cell) in values.iter_mut().zip(&self.cells) {
            if let Some(digit) = cell {
                *value = digit.value();
            }
        }
        values
    }

    /// Builds a grid from 81 values in row-major order, 0 for empty cells
    /// and 1-9 for digits.
    ///
    /// # Panics
    ///
    /// Panics if any value is greater than 9.
    #[must_use]
    pub fn from_values(values: [u8; Cell::COUNT]) -> Self {
        let mut grid = Self::new();
        for (cell, value) in Cell::ALL.into_iter().zip(values) {
            if value != 0 {
                grid.set(cell, Digit::from_value(value));
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when a grid string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The string contains a character that is not a digit, an empty-cell
    /// marker (`.`, `_`, `0`), or whitespace.
    #[display("unexpected character {c:?} in grid string")]
    UnexpectedCharacter {
        /// The offending character.
        c: char,
    },
    /// The string does not spell out exactly 81 cells.
    #[display("expected 81 cells in grid string, found {len}")]
    InvalidLength {
        /// The number of cells found.
        len: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut len = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let value = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    Some(Digit::from_value(c as u8 - b'0'))
                }
                _ => return Err(ParseGridError::UnexpectedCharacter { c }),
            };
            if len < Cell::COUNT {
                if let Some(digit) = value {
                    grid.set(Cell::ALL[len], digit);
                }
            }
            len += 1;
        }
        if len != Cell::COUNT {
            return Err(ParseGridError::InvalidLength { len });
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}
