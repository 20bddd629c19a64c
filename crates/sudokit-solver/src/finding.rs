//! Technique metadata and detection results.

use std::fmt;

use sudokit_core::{Cell, CellSet, Digit, DigitSet};

/// A human solving technique, ordered easiest first.
///
/// The detector scans for seven of these; [`NakedTriple`], [`HiddenTriple`],
/// and [`Swordfish`] are metadata-only and never reported.
///
/// [`NakedTriple`]: Self::NakedTriple
/// [`HiddenTriple`]: Self::HiddenTriple
/// [`Swordfish`]: Self::Swordfish
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Technique {
    /// A cell with exactly one candidate.
    NakedSingle,
    /// The only cell in a unit that can hold a digit.
    HiddenSingle,
    /// Two cells in a unit sharing the same two candidates.
    NakedPair,
    /// Three cells in a unit covering only three candidates.
    NakedTriple,
    /// Two digits confined to the same two cells of a unit.
    HiddenPair,
    /// Three digits confined to the same three cells of a unit.
    HiddenTriple,
    /// A box's candidates for a digit confined to one row or column.
    PointingPair,
    /// A line's candidates for a digit confined to one box.
    BoxLineReduction,
    /// A digit restricted to the same two columns in two rows (or rows in
    /// two columns).
    XWing,
    /// The three-line generalization of X-Wing.
    Swordfish,
}

impl Technique {
    /// Array containing all techniques, easiest first.
    pub const ALL: [Self; 10] = [
        Self::NakedSingle,
        Self::HiddenSingle,
        Self::NakedPair,
        Self::NakedTriple,
        Self::HiddenPair,
        Self::HiddenTriple,
        Self::PointingPair,
        Self::BoxLineReduction,
        Self::XWing,
        Self::Swordfish,
    ];

    /// Returns the technique's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NakedSingle => "Naked Single",
            Self::HiddenSingle => "Hidden Single",
            Self::NakedPair => "Naked Pair",
            Self::NakedTriple => "Naked Triple",
            Self::HiddenPair => "Hidden Pair",
            Self::HiddenTriple => "Hidden Triple",
            Self::PointingPair => "Pointing Pair",
            Self::BoxLineReduction => "Box/Line Reduction",
            Self::XWing => "X-Wing",
            Self::Swordfish => "Swordfish",
        }
    }

    /// Returns the technique's difficulty category.
    #[must_use]
    pub const fn category(self) -> TechniqueCategory {
        match self {
            Self::NakedSingle | Self::HiddenSingle => TechniqueCategory::Basic,
            Self::NakedPair
            | Self::NakedTriple
            | Self::HiddenPair
            | Self::HiddenTriple
            | Self::PointingPair
            | Self::BoxLineReduction => TechniqueCategory::Intermediate,
            Self::XWing | Self::Swordfish => TechniqueCategory::Advanced,
        }
    }

    /// Returns a one-line description of the pattern.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NakedSingle => "A cell has only one possible digit left",
            Self::HiddenSingle => "A digit fits only one cell of a unit",
            Self::NakedPair => {
                "Two cells of a unit share the same two candidates, excluding them elsewhere"
            }
            Self::NakedTriple => {
                "Three cells of a unit cover only three candidates, excluding them elsewhere"
            }
            Self::HiddenPair => {
                "Two digits fit only the same two cells of a unit, clearing other candidates there"
            }
            Self::HiddenTriple => {
                "Three digits fit only the same three cells of a unit"
            }
            Self::PointingPair => {
                "All of a box's cells for a digit lie on one line, excluding the rest of the line"
            }
            Self::BoxLineReduction => {
                "All of a line's cells for a digit lie in one box, excluding the rest of the box"
            }
            Self::XWing => {
                "A digit confined to the same two columns in two rows (or vice versa)"
            }
            Self::Swordfish => "An X-Wing pattern extended to three lines",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse difficulty grouping of techniques.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TechniqueCategory {
    /// Singles.
    Basic,
    /// Pairs, triples, and intersection arguments.
    Intermediate,
    /// Fish patterns.
    Advanced,
}

/// A single occurrence of a technique on a grid snapshot.
///
/// A finding never mutates the grid it was derived from; it reports the
/// pattern cells, the cells where candidates can be eliminated, and the
/// digits involved. Detectors only emit findings with an effect: either a
/// placement (singles, where [`eliminations`] is empty and the single
/// pattern cell takes the single digit) or at least one elimination.
///
/// [`eliminations`]: Self::eliminations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    technique: Technique,
    cells: CellSet,
    eliminations: CellSet,
    digits: DigitSet,
}

impl Finding {
    pub(crate) const fn new(
        technique: Technique,
        cells: CellSet,
        eliminations: CellSet,
        digits: DigitSet,
    ) -> Self {
        Self {
            technique,
            cells,
            eliminations,
            digits,
        }
    }

    /// Returns the technique this finding is an instance of.
    #[must_use]
    pub const fn technique(&self) -> Technique {
        self.technique
    }

    /// Returns the cells forming the pattern.
    #[must_use]
    pub const fn cells(&self) -> CellSet {
        self.cells
    }

    /// Returns the cells losing candidates. Empty for placements.
    #[must_use]
    pub const fn eliminations(&self) -> CellSet {
        self.eliminations
    }

    /// Returns the digits involved in the pattern.
    #[must_use]
    pub const fn digits(&self) -> DigitSet {
        self.digits
    }

    /// If the finding places a digit (a naked or hidden single), returns
    /// the cell and digit.
    #[must_use]
    pub fn placement(&self) -> Option<(Cell, Digit)> {
        if !self.eliminations.is_empty() {
            return None;
        }
        Some((self.cells.as_single()?, self.digits.as_single()?))
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: cells {} digits {}", self.technique, self.cells, self.digits)?;
        if !self.eliminations.is_empty() {
            write!(f, " eliminating in {}", self.eliminations)?;
        }
        Ok(())
    }
}
