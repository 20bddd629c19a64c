//! Technique detection over grid snapshots.

use sudokit_core::Grid;

use crate::{
    Finding,
    technique::{
        box_line_reduction, hidden_pair, hidden_single, naked_pair, naked_single, pointing_pair,
        x_wing,
    },
};

/// The scanned techniques in priority order, easiest first.
const SCANS: [fn(&Grid) -> Vec<Finding>; 7] = [
    naked_single::find,
    hidden_single::find,
    naked_pair::find,
    hidden_pair::find,
    pointing_pair::find,
    box_line_reduction::find,
    x_wing::find,
];

/// Returns the easiest applicable finding, if any.
///
/// Techniques are tried in fixed priority order (naked single, hidden
/// single, naked pair, hidden pair, pointing pair, box/line reduction,
/// X-Wing); the first technique that applies wins and the harder ones are
/// not scanned at all.
///
/// # Examples
///
/// ```
/// use sudokit_core::Grid;
/// use sudokit_solver::{Technique, find_best_hint};
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
/// let hint = find_best_hint(&grid).unwrap();
/// assert_eq!(hint.technique(), Technique::NakedSingle);
/// # Ok::<(), sudokit_core::ParseGridError>(())
/// ```
#[must_use]
pub fn find_best_hint(grid: &Grid) -> Option<Finding> {
    SCANS
        .iter()
        .find_map(|scan| scan(grid).into_iter().next())
}

/// Returns all currently-applicable findings of every scanned technique.
///
/// Findings are grouped by technique in the same priority order
/// [`find_best_hint`] uses, each group in its scan order. The same logical
/// pattern may appear more than once when several units expose it.
#[must_use]
pub fn find_techniques(grid: &Grid) -> Vec<Finding> {
    let mut findings = Vec::new();
    for scan in SCANS {
        findings.extend(scan(grid));
    }
    findings
}
