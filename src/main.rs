//! HST Tutor CLI
//!
//! Terminal front end for the HST learning widgets and the batch grader.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- quiz
//! cargo run -- --seed 7 quiz --prices 50,100,250
//! cargo run -- --store scores.csv match
//! cargo run -- --store scores.csv stats
//! cargo run -- grade sessions.csv > standings.csv
//! cargo run -- grade --strategy async --batch-size 2000 --max-concurrent 8 sessions.csv > standings.csv
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (default `hst_tutor=warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, unreadable score store, etc.)

use hst_tutor::cli::{self, Command};
use hst_tutor::core::{load_score_state, CsvScoreStore, QuizEngine};
use hst_tutor::session::{print_stats, run_match, run_quiz, MatchSession, QuizSession};
use hst_tutor::strategy;
use hst_tutor::types::TransactionRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;
use tracing_subscriber::EnvFilter;

fn run(args: cli::CliArgs) -> Result<(), String> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    match args.command {
        Command::Quiz { prices } => {
            let config = cli::quiz_config(&prices);
            let engine = match args.seed {
                Some(seed) => QuizEngine::from_seed(config, seed),
                None => QuizEngine::new(config),
            };
            let mut session = QuizSession::new(engine);
            run_quiz(&mut session, stdin.lock(), &mut stdout).map_err(|e| e.to_string())
        }
        Command::Match => {
            let mut store = CsvScoreStore::open(&args.store).map_err(|e| e.to_string())?;
            let state = load_score_state(&store).map_err(|e| e.to_string())?;

            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let cards = TransactionRecord::shuffled_catalog(&mut rng);

            let mut session = MatchSession::new(cards, state);
            run_match(&mut session, &mut store, stdin.lock(), &mut stdout)
                .map_err(|e| e.to_string())
        }
        Command::Stats => {
            let store = CsvScoreStore::open(&args.store).map_err(|e| e.to_string())?;
            let state = load_score_state(&store).map_err(|e| e.to_string())?;
            print_stats(&state, &mut stdout).map_err(|e| e.to_string())
        }
        Command::Grade {
            input_file,
            strategy,
            batch_size,
            max_concurrent_batches,
        } => {
            let config = if matches!(strategy, cli::StrategyType::Async) {
                Some(cli::batch_config(batch_size, max_concurrent_batches))
            } else {
                None
            };
            let strategy = strategy::create_strategy(strategy, config);

            // Standings go to stdout
            strategy.grade(&input_file, &mut stdout)
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hst_tutor=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
