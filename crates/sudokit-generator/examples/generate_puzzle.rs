//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a seeded `PuzzleGenerator`
//! - Generate one or more puzzles at a chosen difficulty
//! - Display the givens, solution, and given count
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty (easy, medium, or hard):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Generate several puzzles in parallel with a fixed base seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 8 --seed 42
//! ```

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use sudokit_core::{Difficulty, Puzzle};
use sudokit_generator::PuzzleGenerator;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Self::Easy,
            Level::Medium => Self::Medium,
            Level::Hard => Self::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty of the generated puzzles.
    #[arg(long, value_name = "LEVEL", default_value = "easy")]
    difficulty: Level,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Base seed for reproducible output. Puzzle `i` uses seed + i.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let difficulty = Difficulty::from(args.difficulty);
    let base_seed = args.seed.unwrap_or_else(rand::random);

    let puzzles = (0..args.count as u64)
        .into_par_iter()
        .map(|i| {
            let mut generator = PuzzleGenerator::from_seed(base_seed.wrapping_add(i));
            generator.generate(difficulty)
        })
        .collect::<Vec<_>>();

    for (i, puzzle) in puzzles.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_puzzle(puzzle, base_seed.wrapping_add(i as u64));
    }
}

fn print_puzzle(puzzle: &Puzzle, seed: u64) {
    println!("Seed:       {seed}");
    println!("Difficulty: {}", puzzle.difficulty());
    println!("Givens:     {}", puzzle.givens());
    println!("Solution:   {}", puzzle.solution());
    println!("Given count: {}", puzzle.given_count());
}
