//! Sets of board cells.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::Cell;

/// A set of cells of the 9x9 board, stored as an 81-bit mask.
///
/// Bit `i` of the underlying `u128` represents the cell with row-major index
/// `i`. Unit masks ([`ROWS`], [`COLUMNS`], [`BOXES`]) and per-cell peer sets
/// ([`PEERS`]) are precomputed as constants so scans never rebuild them.
///
/// [`ROWS`]: Self::ROWS
/// [`COLUMNS`]: Self::COLUMNS
/// [`BOXES`]: Self::BOXES
/// [`PEERS`]: Self::PEERS
///
/// # Examples
///
/// ```
/// use sudokit_core::{Cell, CellSet};
///
/// let row = CellSet::ROWS[0];
/// assert_eq!(row.len(), 9);
/// assert!(row.contains(Cell::from_coords(0, 8)));
/// assert!(!row.contains(Cell::from_coords(1, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSet(u128);

impl CellSet {
    const MASK: u128 = (1 << 81) - 1;

    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all 81 cells.
    pub const FULL: Self = Self(Self::MASK);

    /// Cell sets of the nine rows, top to bottom.
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::EMPTY; 9];
        let mut i = 0;
        while i < 81 {
            rows[i / 9].0 |= 1 << i;
            i += 1;
        }
        rows
    };

    /// Cell sets of the nine columns, left to right.
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::EMPTY; 9];
        let mut i = 0;
        while i < 81 {
            columns[i % 9].0 |= 1 << i;
            i += 1;
        }
        columns
    };

    /// Cell sets of the nine 3x3 boxes, left to right, top to bottom.
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::EMPTY; 9];
        let mut i = 0;
        while i < 81 {
            boxes[(i / 9 / 3) * 3 + (i % 9) / 3].0 |= 1 << i;
            i += 1;
        }
        boxes
    };

    /// Peer sets of each cell: the 20 other cells sharing its row, column,
    /// or box. Indexed by the cell's row-major index.
    pub const PEERS: [Self; 81] = {
        let mut peers = [Self::EMPTY; 81];
        let mut i = 0;
        while i < 81 {
            let row = i / 9;
            let col = i % 9;
            let bx = (row / 3) * 3 + col / 3;
            let mask = Self::ROWS[row].0 | Self::COLUMNS[col].0 | Self::BOXES[bx].0;
            peers[i] = Self(mask & !(1 << i));
            i += 1;
        }
        peers
    };

    const fn bit(cell: Cell) -> u128 {
        1 << cell.index()
    }

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single cell.
    #[must_use]
    #[inline]
    pub const fn from_cell(cell: Cell) -> Self {
        Self(Self::bit(cell))
    }

    /// Returns `true` if `cell` is in the set.
    #[must_use]
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        self.0 & Self::bit(cell) != 0
    }

    /// Adds `cell` to the set.
    #[inline]
    pub const fn insert(&mut self, cell: Cell) {
        self.0 |= Self::bit(cell);
    }

    /// Removes `cell` from the set.
    #[inline]
    pub const fn remove(&mut self, cell: Cell) {
        self.0 &= !Self::bit(cell);
    }

    /// Returns the number of cells in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no cells.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// If the set contains exactly one cell, returns it.
    #[must_use]
    pub fn as_single(self) -> Option<Cell> {
        if self.0.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            Some(Cell::new(self.0.trailing_zeros() as u8))
        } else {
            None
        }
    }

    /// Returns the union of the two sets.
    #[must_use]
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of the two sets.
    #[must_use]
    #[inline]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the cells in `self` that are not in `other`.
    #[must_use]
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the complement of the set over all 81 cells.
    #[must_use]
    #[inline]
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::MASK)
    }

    /// Returns an iterator over the cells in ascending index order.
    #[must_use]
    pub const fn iter(self) -> CellSetIter {
        CellSetIter(self.0)
    }
}

impl BitOr for CellSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for CellSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CellSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for CellSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut set = Self::EMPTY;
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "]")
    }
}

/// Iterator over the cells of a [`CellSet`] in ascending index order.
#[derive(Debug, Clone)]
pub struct CellSetIter(u128);

impl Iterator for CellSetIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        #[expect(clippy::cast_possible_truncation)]
        Some(Cell::new(index as u8))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for CellSetIter {}
impl ExactSizeIterator for CellSetIter {}
