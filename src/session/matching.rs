//! Terminal matching-game session
//!
//! Deals the transaction cards, lets the player drop them into the two HST
//! accounts by number and scores the board on request. Counters are written
//! to the score store after every check.

use crate::core::{save_score_state, MatchBoard, MatchScorer, ScoreStore};
use crate::types::{Bucket, HstError, ScoreResult, ScoreState, TransactionRecord};
use std::io::{BufRead, Write};

const HELP: &str = "Type 'p <n>' or 'r <n>' to drop card n, 'c' to check answers, 'q' to quit.";

/// One line of user input during a match
#[derive(Debug, Clone, PartialEq)]
pub enum MatchInput {
    /// Drop the card with this number (1-based) into a bucket
    Drop { card: usize, bucket: Bucket },
    /// Check answers
    Check,
    /// Leave the game
    Quit,
    /// Anything else
    Unknown(String),
}

/// Interpret a line typed during a match
pub fn parse_match_input(line: &str) -> MatchInput {
    let trimmed = line.trim();
    let mut parts = trimmed.split_whitespace();
    let command = parts.next().unwrap_or_default().to_lowercase();

    let bucket = match command.as_str() {
        "c" | "check" => return MatchInput::Check,
        "q" | "quit" => return MatchInput::Quit,
        "p" | "payable" => Bucket::Payable,
        "r" | "recoverable" => Bucket::Recoverable,
        _ => return MatchInput::Unknown(trimmed.to_string()),
    };

    match (parts.next().map(str::parse::<usize>), parts.next()) {
        (Some(Ok(card)), None) => MatchInput::Drop { card, bucket },
        _ => MatchInput::Unknown(trimmed.to_string()),
    }
}

/// Cards on the table, the board and the counters for one game
#[derive(Debug, Clone)]
pub struct MatchSession {
    cards: Vec<TransactionRecord>,
    board: MatchBoard,
    state: ScoreState,
}

impl MatchSession {
    /// Start a game with `cards` dealt and counters loaded from the store
    pub fn new(cards: Vec<TransactionRecord>, state: ScoreState) -> Self {
        MatchSession {
            cards,
            board: MatchBoard::new(),
            state,
        }
    }

    pub fn cards(&self) -> &[TransactionRecord] {
        &self.cards
    }

    pub fn board(&self) -> &MatchBoard {
        &self.board
    }

    pub fn state(&self) -> ScoreState {
        self.state
    }

    /// Drop card `number` (1-based, as shown on screen) into `bucket`
    ///
    /// # Returns
    ///
    /// `true` if the card was added, `false` if it was already there
    ///
    /// # Errors
    ///
    /// `InvalidSelection` if no card has that number
    pub fn place(&mut self, number: usize, bucket: Bucket) -> Result<bool, HstError> {
        let record = number
            .checked_sub(1)
            .and_then(|index| self.cards.get(index))
            .cloned()
            .ok_or_else(|| HstError::invalid_selection(number, self.cards.len()))?;

        Ok(self.board.place(record, bucket))
    }

    /// Score the board and fold the result into the counters
    ///
    /// The board is left as it is, so later drops add to the same buckets.
    pub fn check(&mut self) -> ScoreResult {
        let (result, state) = MatchScorer::score_board(&self.board, self.state);
        self.state = state;
        result
    }
}

fn print_table<W: Write>(session: &MatchSession, output: &mut W) -> Result<(), HstError> {
    writeln!(output)?;
    writeln!(output, "🃏 Transactions")?;
    for (number, card) in session.cards().iter().enumerate() {
        writeln!(output, "  {}) {}", number + 1, card.text)?;
    }

    for bucket in [Bucket::Payable, Bucket::Recoverable] {
        writeln!(output, "{}", bucket)?;
        let cards = session.board().bucket(bucket);
        if cards.is_empty() {
            writeln!(output, "  (empty)")?;
        }
        for card in cards {
            writeln!(output, "  - {}", card.text)?;
        }
    }

    writeln!(output, "{}", HELP)?;
    Ok(())
}

/// Run the matching game until the user quits or input ends
///
/// # Errors
///
/// Fails only when the output cannot be written or the store rejects a
/// write. Bad card numbers are reported on `output` and the game goes on.
pub fn run_match<I, W>(
    session: &mut MatchSession,
    store: &mut dyn ScoreStore,
    input: I,
    output: &mut W,
) -> Result<(), HstError>
where
    I: BufRead,
    W: Write,
{
    writeln!(output, "🏷️ HST Account Match")?;
    writeln!(output, "Drag each transaction to the correct HST account:")?;
    print_table(session, output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_match_input(&line) {
            MatchInput::Quit => break,
            MatchInput::Drop { card, bucket } => match session.place(card, bucket) {
                Ok(true) => print_table(session, output)?,
                Ok(false) => writeln!(output, "Card {} is already in {}", card, bucket)?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            MatchInput::Check => {
                let result = session.check();
                writeln!(output, "{}", result)?;
                save_score_state(store, &result.state)?;
                tracing::debug!(
                    "Saved counters: games played {}, correct total {}",
                    result.state.games_played,
                    result.state.correct_total
                );
            }
            MatchInput::Unknown(text) => {
                writeln!(output, "Unrecognized input '{}'. {}", text, HELP)?;
            }
        }
    }

    output.flush()?;
    Ok(())
}

/// Print the persisted counters
pub fn print_stats<W: Write>(state: &ScoreState, output: &mut W) -> Result<(), HstError> {
    writeln!(output, "📊 Total Correct Across Games: {}", state.correct_total)?;
    writeln!(output, "🎮 Games Played: {}", state.games_played)?;
    Ok(())
}
