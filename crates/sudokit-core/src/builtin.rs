//! Built-in puzzle table.
//!
//! A small set of hand-checked puzzles, available without running the
//! generator. Every entry has been verified to have a valid solution that
//! agrees with its givens and to admit exactly one solution.

use std::sync::LazyLock;

use crate::{Difficulty, Puzzle};

struct Entry {
    givens: &'static str,
    solution: &'static str,
}

const EASY: [Entry; 3] = [
    Entry {
        givens: "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
        solution: "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
    },
    Entry {
        givens: "004050000900734600003021049035090480090000030076010920310970200009182003000060100",
        solution: "264859317981734652753621849135297486892546731476318925318975264649182573527463198",
    },
    Entry {
        givens: "200300000804062003013800200000020390507000621032006000020009140601250809000001002",
        solution: "276314958854962713913875264468127395597438621132596487325789146641253879789641532",
    },
];

const MEDIUM: [Entry; 2] = [
    Entry {
        givens: "000260701680070090190004500820100040004602900050003028009300074040050036703018000",
        solution: "435269781682571493197834562826195347374682915951743628519326874248957136763418259",
    },
    Entry {
        givens: "020608000580009700000040000370000500600000004008000013000020000009800036000306090",
        solution: "123678945584239761967145328372461589691583274458792613836924157219857436745316892",
    },
];

const HARD: [Entry; 2] = [
    Entry {
        givens: "005300000800000020070010500400005300010070006003200080060500009004000030000009700",
        solution: "145327698839654127672918543496185372218473956753296481367542819984761235521839764",
    },
    Entry {
        givens: "000000209800000001010270000005407820004006000000000000940500070500021040002300180",
        solution: "457183269829645731316279458695417823284936517173852694941568372538721946762394185",
    },
];

fn build(entries: &[Entry], difficulty: Difficulty) -> Vec<Puzzle> {
    entries
        .iter()
        .map(|entry| {
            let givens = entry.givens.parse().expect("built-in givens are valid");
            let solution = entry
                .solution
                .parse()
                .expect("built-in solution is valid");
            Puzzle::new(givens, solution, difficulty)
        })
        .collect()
}

static EASY_PUZZLES: LazyLock<Vec<Puzzle>> = LazyLock::new(|| build(&EASY, Difficulty::Easy));
static MEDIUM_PUZZLES: LazyLock<Vec<Puzzle>> = LazyLock::new(|| build(&MEDIUM, Difficulty::Medium));
static HARD_PUZZLES: LazyLock<Vec<Puzzle>> = LazyLock::new(|| build(&HARD, Difficulty::Hard));

/// Returns the built-in puzzles of the given difficulty.
#[must_use]
pub fn puzzles(difficulty: Difficulty) -> &'static [Puzzle] {
    match difficulty {
        Difficulty::Easy => &EASY_PUZZLES,
        Difficulty::Medium => &MEDIUM_PUZZLES,
        Difficulty::Hard => &HARD_PUZZLES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_populated() {
        assert_eq!(puzzles(Difficulty::Easy).len(), 3);
        for difficulty in Difficulty::ALL {
            let list = puzzles(difficulty);
            assert!(!list.is_empty());
            for puzzle in list {
                assert_eq!(puzzle.difficulty(), difficulty);
                // Puzzle::new already validated givens against the solution
                assert!(puzzle.solution().is_solved());
                assert!(puzzle.givens().is_valid());
            }
        }
    }

    #[test]
    fn test_known_entry() {
        let classic = &puzzles(Difficulty::Easy)[0];
        assert_eq!(classic.given_count(), 30);
        assert_eq!(
            classic.givens().to_string(),
            "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79"
        );
    }
}
