//! Board cell indexing.

use std::fmt::{self, Display};

use crate::CellSet;

/// A cell of the 9x9 board, identified by its row-major index 0-80.
///
/// The index of the cell at `(row, col)` is `row * 9 + col`, with rows and
/// columns both counted from 0 at the top-left corner.
///
/// # Examples
///
/// ```
/// use sudokit_core::Cell;
///
/// let cell = Cell::from_coords(4, 7);
/// assert_eq!(cell.index(), 43);
/// assert_eq!(cell.row(), 4);
/// assert_eq!(cell.column(), 7);
/// assert_eq!(cell.box_index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cell(u8);

impl Cell {
    /// The number of cells on the board.
    pub const COUNT: usize = 81;

    /// Array containing all 81 cells in row-major order.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self(0); Self::COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < Self::COUNT {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a cell from its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    #[inline]
    pub const fn new(index: u8) -> Self {
        assert!(index < 81, "cell index out of range");
        Self(index)
    }

    /// Creates a cell from row and column coordinates (both 0-8).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn from_coords(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "cell coordinates out of range");
        Self(row * 9 + col)
    }

    /// Returns the row-major index (0-80).
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-8).
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 9
    }

    /// Returns the column (0-8).
    #[must_use]
    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % 9
    }

    /// Returns the index of the 3x3 box containing this cell (0-8, left to
    /// right, top to bottom).
    #[must_use]
    #[inline]
    pub const fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.column() / 3
    }

    /// Returns the set of the cell's peers: the 20 other cells sharing its
    /// row, column, or box.
    ///
    /// The peer sets are precomputed once as constants.
    #[must_use]
    #[inline]
    pub const fn peers(self) -> CellSet {
        CellSet::PEERS[self.0 as usize]
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row() + 1, self.column() + 1)
    }
}
