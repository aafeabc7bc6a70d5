use crate::core::QuizConfig;
use crate::strategy::BatchConfig;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Practice HST accounting: tax-inclusive totals and payable vs recoverable
#[derive(Parser, Debug)]
#[command(name = "hst-tutor")]
#[command(about = "Practice HST accounting from the terminal", long_about = None)]
pub struct CliArgs {
    /// File holding the persisted match counters
    #[arg(
        long = "store",
        value_name = "PATH",
        default_value = "hst-scores.csv",
        help = "Path to the CSV file holding the match game counters"
    )]
    pub store: PathBuf,

    /// Seed for question and card shuffling
    #[arg(
        long = "seed",
        value_name = "SEED",
        help = "Fixed random seed for reproducible questions and card order"
    )]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// HST calculation challenge
    Quiz {
        /// Sale prices to draw questions from
        #[arg(
            long = "prices",
            value_name = "PRICES",
            value_delimiter = ',',
            help = "Comma-separated sale prices (default: 50,100,250,399,600)"
        )]
        prices: Vec<Decimal>,
    },

    /// HST account match: sort transactions into payable and recoverable
    Match,

    /// Show the persisted match counters
    Stats,

    /// Grade recorded match sessions from a CSV file
    Grade {
        /// Input CSV file with action,player,text,payable rows
        #[arg(value_name = "INPUT", help = "Path to the recorded sessions CSV file")]
        input_file: PathBuf,

        /// Grading strategy
        #[arg(
            long = "strategy",
            value_name = "STRATEGY",
            default_value = "sync",
            help = "Grading strategy: 'sync' for synchronous or 'async' for asynchronous"
        )]
        strategy: StrategyType,

        /// Number of rows per batch (async mode only)
        #[arg(
            long = "batch-size",
            value_name = "SIZE",
            help = "Number of rows per batch (default: 1000)"
        )]
        batch_size: Option<usize>,

        /// Number of worker threads (async mode only)
        #[arg(
            long = "max-concurrent",
            value_name = "COUNT",
            help = "Number of worker threads (default: CPU cores)"
        )]
        max_concurrent_batches: Option<usize>,
    },
}

/// Available grading strategies
#[derive(Clone, Debug, PartialEq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Build a QuizConfig from the `--prices` option
///
/// No prices means the default set.
pub fn quiz_config(prices: &[Decimal]) -> QuizConfig {
    if prices.is_empty() {
        QuizConfig::default()
    } else {
        QuizConfig::new(prices.to_vec())
    }
}

/// Build a BatchConfig from the grade options
///
/// Missing values take their defaults; zero values are replaced by
/// `BatchConfig::new`.
pub fn batch_config(batch_size: Option<usize>, max_concurrent: Option<usize>) -> BatchConfig {
    if batch_size.is_some() || max_concurrent.is_some() {
        let default = BatchConfig::default();
        BatchConfig::new(
            batch_size.unwrap_or(default.batch_size),
            max_concurrent.unwrap_or(default.max_concurrent_batches),
        )
    } else {
        BatchConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_store(&["hst-tutor", "stats"], "hst-scores.csv")]
    #[case::custom_store(&["hst-tutor", "--store", "/tmp/s.csv", "stats"], "/tmp/s.csv")]
    fn test_store_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.store, PathBuf::from(expected));
    }

    #[test]
    fn test_seed_parsing() {
        let parsed = CliArgs::try_parse_from(["hst-tutor", "--seed", "42", "match"]).unwrap();
        assert_eq!(parsed.seed, Some(42));
        assert!(matches!(parsed.command, Command::Match));
    }

    #[rstest]
    #[case::no_prices(&["hst-tutor", "quiz"], vec![])]
    #[case::custom_prices(
        &["hst-tutor", "quiz", "--prices", "20,19.99"],
        vec![Decimal::from(20), Decimal::new(1999, 2)]
    )]
    fn test_quiz_prices_parsing(#[case] args: &[&str], #[case] expected: Vec<Decimal>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        match parsed.command {
            Command::Quiz { prices } => assert_eq!(prices, expected),
            other => panic!("Expected quiz, got {:?}", other),
        }
    }

    #[rstest]
    #[case::default_strategy(&["hst-tutor", "grade", "in.csv"], StrategyType::Sync)]
    #[case::explicit_async(&["hst-tutor", "grade", "--strategy", "async", "in.csv"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        match parsed.command {
            Command::Grade {
                strategy,
                input_file,
                ..
            } => {
                assert_eq!(strategy, expected);
                assert_eq!(input_file, PathBuf::from("in.csv"));
            }
            other => panic!("Expected grade, got {:?}", other),
        }
    }

    #[rstest]
    #[case::all_defaults(None, None, 1000, num_cpus::get())]
    #[case::custom_batch_size(Some(2000), None, 2000, num_cpus::get())]
    #[case::custom_max_concurrent(None, Some(8), 1000, 8)]
    #[case::zero_batch_size(Some(0), None, 1000, num_cpus::get())]
    fn test_batch_config_conversion(
        #[case] batch_size: Option<usize>,
        #[case] max_concurrent: Option<usize>,
        #[case] expected_batch_size: usize,
        #[case] expected_max_concurrent: usize,
    ) {
        let config = batch_config(batch_size, max_concurrent);
        assert_eq!(config.batch_size, expected_batch_size);
        assert_eq!(config.max_concurrent_batches, expected_max_concurrent);
    }

    #[test]
    fn test_quiz_config_conversion() {
        assert_eq!(quiz_config(&[]), QuizConfig::default());
        assert_eq!(
            quiz_config(&[Decimal::from(75)]).prices(),
            &[Decimal::from(75)]
        );
    }

    #[rstest]
    #[case::missing_command(&["hst-tutor"])]
    #[case::missing_input(&["hst-tutor", "grade"])]
    #[case::invalid_strategy(&["hst-tutor", "grade", "--strategy", "invalid", "in.csv"])]
    #[case::invalid_price(&["hst-tutor", "quiz", "--prices", "ten"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
