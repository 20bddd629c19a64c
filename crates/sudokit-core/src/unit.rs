//! Board units (rows, columns, and boxes).

use std::fmt::{self, Display};

use crate::{Cell, CellSet};

/// A Sudoku unit: a row, column, or 3x3 box.
///
/// [`Unit::ALL`] lists all 27 units in row, column, box order; technique
/// scans walk units in that order so results are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A row identified by its index (0-8, top to bottom).
    Row {
        /// Row index (0-8).
        index: u8,
    },
    /// A column identified by its index (0-8, left to right).
    Column {
        /// Column index (0-8).
        index: u8,
    },
    /// A 3x3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl Unit {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { index: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { index: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// Array containing all 27 units in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { index: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { index: i as u8 };
            all[i + 9] = Self::Column { index: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the unit (0-8) into an absolute [`Cell`].
    ///
    /// For rows and columns cells are counted along the line; for boxes they
    /// are counted row-major within the box.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn cell(self, i: u8) -> Cell {
        assert!(i < 9);
        match self {
            Unit::Row { index } => Cell::from_coords(index, i),
            Unit::Column { index } => Cell::from_coords(i, index),
            Unit::Box { index } => {
                Cell::from_coords((index / 3) * 3 + i / 3, (index % 3) * 3 + i % 3)
            }
        }
    }

    /// Returns the set of all cells contained in this unit.
    #[must_use]
    #[inline]
    pub const fn cells(self) -> CellSet {
        match self {
            Unit::Row { index } => CellSet::ROWS[index as usize],
            Unit::Column { index } => CellSet::COLUMNS[index as usize],
            Unit::Box { index } => CellSet::BOXES[index as usize],
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Row { index } => write!(f, "row {}", index + 1),
            Unit::Column { index } => write!(f, "column {}", index + 1),
            Unit::Box { index } => write!(f, "box {}", index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order() {
        assert_eq!(Unit::ALL.len(), 27);
        assert_eq!(Unit::ALL[0], Unit::Row { index: 0 });
        assert_eq!(Unit::ALL[8], Unit::Row { index: 8 });
        assert_eq!(Unit::ALL[9], Unit::Column { index: 0 });
        assert_eq!(Unit::ALL[18], Unit::Box { index: 0 });
        assert_eq!(Unit::ALL[26], Unit::Box { index: 8 });
    }

    #[test]
    fn test_cell_lookup() {
        assert_eq!(Unit::ROWS[2].cell(5), Cell::from_coords(2, 5));
        assert_eq!(Unit::COLUMNS[7].cell(0), Cell::from_coords(0, 7));

        // Box 4 (center) is rows 3-5, columns 3-5, row-major
        assert_eq!(Unit::BOXES[4].cell(0), Cell::from_coords(3, 3));
        assert_eq!(Unit::BOXES[4].cell(5), Cell::from_coords(4, 5));
        assert_eq!(Unit::BOXES[4].cell(8), Cell::from_coords(5, 5));
    }

    #[test]
    fn test_cells_match_cell_lookup() {
        for unit in Unit::ALL {
            let set = unit.cells();
            assert_eq!(set.len(), 9);
            for i in 0..9 {
                assert!(set.contains(unit.cell(i)));
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Unit::Row { index: 0 }.to_string(), "row 1");
        assert_eq!(Unit::Box { index: 8 }.to_string(), "box 9");
    }
}
