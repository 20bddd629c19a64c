//! Practice puzzles keyed by technique.
//!
//! A small table of hand-checked boards on which a specific technique
//! applies right away, for drilling one technique at a time. Every entry
//! has been verified to admit exactly one solution, and for every scanned
//! technique the named pattern is present on the starting board.

use std::sync::LazyLock;

use sudokit_core::{Difficulty, Puzzle};

use crate::Technique;

/// A puzzle demonstrating one technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticePuzzle {
    technique: Technique,
    title: &'static str,
    puzzle: Puzzle,
}

impl PracticePuzzle {
    /// Returns the technique this puzzle demonstrates.
    #[must_use]
    pub const fn technique(&self) -> Technique {
        self.technique
    }

    /// Returns a short display title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// Returns the puzzle itself.
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }
}

struct Entry {
    technique: Technique,
    difficulty: Difficulty,
    title: &'static str,
    givens: &'static str,
    solution: &'static str,
}

// Kept in ascending Technique order; `puzzles` slices by that order.
const ENTRIES: [Entry; 10] = [
    Entry {
        technique: Technique::NakedSingle,
        difficulty: Difficulty::Easy,
        title: "Naked single",
        givens: "003020600900305001001806400008102900700000008006708200002609500800203009005010300",
        solution: "483921657967345821251876493548132976729564138136798245372689514814253769695417382",
    },
    Entry {
        technique: Technique::NakedSingle,
        difficulty: Difficulty::Easy,
        title: "Naked single chain",
        givens: "200080300060070084030500209000105408000000000402706000301007040720040060004010003",
        solution: "245981376169273584837564219976125438513498627482736951391657842728349165654812793",
    },
    Entry {
        technique: Technique::HiddenSingle,
        difficulty: Difficulty::Easy,
        title: "Hidden single in a row",
        givens: "000000000000003085001020000000507000004000100090000000500000073002010000000040009",
        solution: "987654321246173985351928746128537694634892157795461832519286473472319568863745219",
    },
    Entry {
        technique: Technique::NakedPair,
        difficulty: Difficulty::Medium,
        title: "Naked pair in a row",
        givens: "400000038002004100005300240070609004020000070600703090057008300003900400240000009",
        solution: "461572938732894156895316247378629514529481673614753892957248361183967425246135789",
    },
    Entry {
        technique: Technique::NakedPair,
        difficulty: Difficulty::Medium,
        title: "Naked pair in a box",
        givens: "080090030030000069902063158020804590851907046394605870563040987200000015010050020",
        solution: "486591732135278469972463158627814593851937246394625871563142987249786315718359624",
    },
    Entry {
        technique: Technique::NakedTriple,
        difficulty: Difficulty::Hard,
        title: "Naked triple",
        givens: "070008029002000004854020000008374200000000000003261700000090612200000400130600070",
        solution: "671438529392715864854926137518374296726859341943261785487593612269187453135642978",
    },
    Entry {
        technique: Technique::HiddenPair,
        difficulty: Difficulty::Medium,
        title: "Hidden pair",
        givens: "000000000904607000076804100309701080008000300050308702007502610000403208000000000",
        solution: "583219467914637825276854139349721586728965341651348792497582613165493278832176954",
    },
    Entry {
        technique: Technique::PointingPair,
        difficulty: Difficulty::Medium,
        title: "Pointing pair",
        givens: "010903600000080000900000507002010430000402000064070200701000005000030000005601020",
        solution: "417953682256187943983246517872519436539462871164378259791824365628735194345691728",
    },
    Entry {
        technique: Technique::BoxLineReduction,
        difficulty: Difficulty::Medium,
        title: "Box/line reduction",
        givens: "016007803000800000070001060048000300600000002009000650060900020000002000904600510",
        solution: "416527893592836147873491265148265379657319482239784651361958724785142936924673518",
    },
    Entry {
        technique: Technique::XWing,
        difficulty: Difficulty::Hard,
        title: "X-Wing rectangle",
        givens: "100000569402000008050009040000640801000010000208035000040500010900000402621000005",
        solution: "187423569492756138356189247539647821764218953218935674843592716975361482621874395",
    },
];

static PUZZLES: LazyLock<Vec<PracticePuzzle>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|entry| {
            let givens = entry.givens.parse().expect("practice givens are valid");
            let solution = entry
                .solution
                .parse()
                .expect("practice solution is valid");
            PracticePuzzle {
                technique: entry.technique,
                title: entry.title,
                puzzle: Puzzle::new(givens, solution, entry.difficulty),
            }
        })
        .collect()
});

/// Returns every practice puzzle, grouped by technique, easiest first.
#[must_use]
pub fn all() -> &'static [PracticePuzzle] {
    &PUZZLES
}

/// Returns the practice puzzles for one technique.
///
/// Techniques without an entry (currently hidden triple and Swordfish)
/// yield an empty slice.
#[must_use]
pub fn puzzles(technique: Technique) -> &'static [PracticePuzzle] {
    let all = all();
    let start = all
        .iter()
        .position(|p| p.technique == technique)
        .unwrap_or(all.len());
    let len = all[start..]
        .iter()
        .take_while(|p| p.technique == technique)
        .count();
    &all[start..start + len]
}
