//! Puzzle difficulty levels.

use std::{fmt, ops::RangeInclusive};

/// Difficulty level of a puzzle.
///
/// Each level corresponds to a range of given (pre-filled) cells; the
/// generator samples its target given count from that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// Easy puzzles, 36-40 givens.
    Easy,
    /// Medium puzzles, 30-35 givens.
    Medium,
    /// Hard puzzles, 24-29 givens.
    Hard,
}

impl Difficulty {
    /// Array containing all difficulty levels, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the range of given cells a puzzle of this difficulty starts
    /// with.
    #[must_use]
    pub const fn given_range(self) -> RangeInclusive<u8> {
        match self {
            Self::Easy => 36..=40,
            Self::Medium => 30..=35,
            Self::Hard => 24..=29,
        }
    }

    /// Returns a short description of the skills this level expects.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Easy => "Solvable with singles alone",
            Self::Medium => "May need pairs and intersection arguments",
            Self::Hard => "May need advanced patterns such as X-Wing",
        }
    }

    /// Returns the level name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_given_ranges() {
        assert_eq!(Difficulty::Easy.given_range(), 36..=40);
        assert_eq!(Difficulty::Medium.given_range(), 30..=35);
        assert_eq!(Difficulty::Hard.given_range(), 24..=29);

        // Ranges are disjoint and ordered hardest-lowest
        for pair in Difficulty::ALL.windows(2) {
            assert!(pair[1].given_range().end() < pair[0].given_range().start());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }
}
