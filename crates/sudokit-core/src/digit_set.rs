//! Candidate sets of digits 1-9.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::Digit;

/// A set of digits 1-9, stored as a 9-bit mask.
///
/// Bit `n` of the underlying `u16` represents digit `n + 1`. This is the
/// candidate-set type used throughout the engine: `DigitSet::FULL` minus the
/// digits visible from a cell's peers gives that cell's candidates.
///
/// # Examples
///
/// ```
/// use sudokit_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::EMPTY;
/// set.insert(Digit::D4);
/// set.insert(Digit::D7);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Digit::D4));
/// assert!(!set.contains(Digit::D1));
///
/// // Iteration is in ascending digit order
/// let digits: Vec<_> = set.iter().collect();
/// assert_eq!(digits, vec![Digit::D4, Digit::D7]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all nine digits.
    pub const FULL: Self = Self(0b1_1111_1111);

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    #[inline]
    pub const fn from_digit(digit: Digit) -> Self {
        Self(Self::bit(digit))
    }

    /// Returns `true` if `digit` is in the set.
    #[must_use]
    #[inline]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Adds `digit` to the set.
    #[inline]
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= Self::bit(digit);
    }

    /// Removes `digit` from the set.
    #[inline]
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::bit(digit);
    }

    /// Returns the number of digits in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// If the set contains exactly one digit, returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokit_core::{Digit, DigitSet};
    ///
    /// let set = DigitSet::from_iter([Digit::D6]);
    /// assert_eq!(set.as_single(), Some(Digit::D6));
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.0.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            Some(Digit::from_value(self.0.trailing_zeros() as u8 + 1))
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

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> DigitSetIter {
        DigitSetIter(self.0)
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, "}}")
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct DigitSetIter(u16);

impl Iterator for DigitSetIter {
    type Item = Digit;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        #[expect(clippy::cast_possible_truncation)]
        Some(Digit::from_value(index as u8 + 1))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for DigitSetIter {}
impl ExactSizeIterator for DigitSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        set.insert(Digit::D1);
        set.insert(Digit::D9);
        assert!(set.contains(Digit::D1));
        assert!(set.contains(Digit::D9));
        assert!(!set.contains(Digit::D5));
        assert_eq!(set.len(), 2);

        set.remove(Digit::D1);
        assert!(!set.contains(Digit::D1));
        assert_eq!(set.len(), 1);

        // Removing an absent digit is a no-op
        set.remove(Digit::D1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::FULL.as_single(), None);
        assert_eq!(
            DigitSet::from_iter([Digit::D3]).as_single(),
            Some(Digit::D3)
        );
        assert_eq!(DigitSet::from_iter([Digit::D3, Digit::D4]).as_single(), None);
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([Digit::D9, Digit::D1, Digit::D5, Digit::D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![Digit::D1, Digit::D3, Digit::D5, Digit::D9]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_set_operations() {
        let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
        let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);

        assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
        assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
        assert_eq!(a.difference(b), DigitSet::from_iter([Digit::D1]));
    }

    #[test]
    fn test_display() {
        let set = DigitSet::from_iter([Digit::D7, Digit::D2]);
        assert_eq!(set.to_string(), "{2,7}");
        assert_eq!(DigitSet::EMPTY.to_string(), "{}");
    }
}
