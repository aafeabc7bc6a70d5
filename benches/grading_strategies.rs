//! Benchmark suite for comparing grading strategies
//!
//! Compares the synchronous and asynchronous grading strategies on generated
//! session recordings, and measures question generation, using the divan
//! benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! # Generated Inputs
//!
//! Each input holds complete games for 50 players: four drops followed by a
//! check, with every player's rows interleaved with the others.

use hst_tutor::cli::StrategyType;
use hst_tutor::core::{QuizConfig, QuizEngine};
use hst_tutor::strategy::{create_strategy, BatchConfig};
use hst_tutor::types::TransactionRecord;
use std::io::Write;
use tempfile::NamedTempFile;

const PLAYERS: u32 = 50;

fn main() {
    divan::main();
}

/// Write `games` rounds of play for every player
fn generate_input(games: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create input file");
    let catalog = TransactionRecord::catalog();

    writeln!(file, "action,player,text,payable").expect("Failed to write header");
    for game in 0..games {
        for (step, card) in catalog.iter().enumerate() {
            for player in 0..PLAYERS {
                // Every third player misplaces one card per game
                let misplaced = (player as usize + game) % 3 == 0 && step == 0;
                let bucket = if card.is_payable != misplaced {
                    "payable"
                } else {
                    "recoverable"
                };
                writeln!(
                    file,
                    "{},{},{},{}",
                    bucket, player, card.text, card.is_payable
                )
                .expect("Failed to write row");
            }
        }
        for player in 0..PLAYERS {
            writeln!(file, "check,{},,", player).expect("Failed to write row");
        }
    }

    file.flush().expect("Failed to flush input file");
    file
}

/// Benchmark synchronous grading strategy
#[divan::bench(args = [10, 100, 1000])]
fn sync_strategy(bencher: divan::Bencher, games: usize) {
    let input = generate_input(games);
    let strategy = create_strategy(StrategyType::Sync, None);

    bencher.bench_local(|| {
        let mut output = Vec::new();
        strategy
            .grade(input.path(), &mut output)
            .expect("Grading failed");
        output
    });
}

/// Benchmark asynchronous grading strategy
#[divan::bench(args = [10, 100, 1000])]
fn async_strategy(bencher: divan::Bencher, games: usize) {
    let input = generate_input(games);
    let strategy = create_strategy(StrategyType::Async, Some(BatchConfig::default()));

    bencher.bench_local(|| {
        let mut output = Vec::new();
        strategy
            .grade(input.path(), &mut output)
            .expect("Grading failed");
        output
    });
}

/// Benchmark question generation with a seeded engine
#[divan::bench]
fn generate_question(bencher: divan::Bencher) {
    let mut engine = QuizEngine::from_seed(QuizConfig::default(), 42);

    bencher.bench_local(|| engine.generate_question());
}
