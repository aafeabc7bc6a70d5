//! Terminal quiz session
//!
//! Wraps a [`QuizEngine`] with the state the presentation layer needs: the
//! question on screen and the feedback for the last answer.

use crate::core::QuizEngine;
use crate::types::{Feedback, HstError, Question};
use rand::rngs::StdRng;
use rand::Rng;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

const HELP: &str = "Pick a choice number, type an amount, 'n' for another question or 'q' to quit.";

/// One line of user input during a quiz
#[derive(Debug, Clone, PartialEq)]
pub enum QuizInput {
    /// A choice number as shown on screen (1-based)
    Choice(usize),
    /// A typed amount, checked as-is
    Amount(Decimal),
    /// Request another question
    Next,
    /// Leave the quiz
    Quit,
    /// Anything else
    Unknown(String),
}

/// Interpret a line typed during a quiz
///
/// A whole number between 1 and `choice_count` picks that choice. Any other
/// number is a typed amount; a leading `$` always means an amount.
pub fn parse_quiz_input(line: &str, choice_count: usize) -> QuizInput {
    let trimmed = line.trim();

    match trimmed.to_lowercase().as_str() {
        "q" | "quit" => return QuizInput::Quit,
        "n" | "next" => return QuizInput::Next,
        _ => {}
    }

    if let Some(amount) = trimmed.strip_prefix('$') {
        return match Decimal::from_str(amount.trim()) {
            Ok(amount) => QuizInput::Amount(amount),
            Err(_) => QuizInput::Unknown(trimmed.to_string()),
        };
    }

    if let Ok(number) = trimmed.parse::<usize>() {
        if (1..=choice_count).contains(&number) {
            return QuizInput::Choice(number);
        }
    }

    match Decimal::from_str(trimmed) {
        Ok(amount) => QuizInput::Amount(amount),
        Err(_) => QuizInput::Unknown(trimmed.to_string()),
    }
}

/// Question on screen plus feedback for the last answer
#[derive(Debug)]
pub struct QuizSession<R: Rng = StdRng> {
    engine: QuizEngine<R>,
    question: Question,
    feedback: Option<Feedback>,
}

impl<R: Rng> QuizSession<R> {
    /// Start a session with a freshly generated question
    pub fn new(mut engine: QuizEngine<R>) -> Self {
        let question = engine.generate_question();
        QuizSession {
            engine,
            question,
            feedback: None,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Replace the question and clear any feedback
    pub fn next_question(&mut self) -> &Question {
        self.question = self.engine.generate_question();
        self.feedback = None;
        &self.question
    }

    /// Answer with the choice at `number` (1-based, as shown on screen)
    ///
    /// # Errors
    ///
    /// `InvalidSelection` if no choice has that number. The previous feedback
    /// is kept in that case.
    pub fn select(&mut self, number: usize) -> Result<&Feedback, HstError> {
        let choices = self.question.choices();
        let selected = number
            .checked_sub(1)
            .and_then(|index| choices.get(index))
            .copied()
            .ok_or_else(|| HstError::invalid_selection(number, choices.len()))?;

        Ok(self.answer(selected))
    }

    /// Answer with any amount, offered or not
    pub fn answer(&mut self, amount: Decimal) -> &Feedback {
        let feedback = self.engine.check_answer(amount, &self.question);
        self.feedback.insert(feedback)
    }
}

fn print_question<W: Write>(question: &Question, output: &mut W) -> Result<(), HstError> {
    writeln!(output)?;
    writeln!(output, "{}", question.prompt())?;
    for (number, choice) in question.choices().iter().enumerate() {
        writeln!(output, "  {}) ${:.2}", number + 1, choice)?;
    }
    writeln!(output, "{}", HELP)?;
    Ok(())
}

/// Run the quiz until the user quits or input ends
pub fn run_quiz<R, I, W>(
    session: &mut QuizSession<R>,
    input: I,
    output: &mut W,
) -> Result<(), HstError>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(output, "🧮 HST Calculation Challenge")?;
    print_question(session.question(), output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_quiz_input(&line, session.question().choices().len()) {
            QuizInput::Quit => break,
            QuizInput::Next => {
                session.next_question();
                print_question(session.question(), output)?;
            }
            QuizInput::Choice(number) => match session.select(number) {
                Ok(feedback) => writeln!(output, "{}", feedback)?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            QuizInput::Amount(amount) => {
                let feedback = session.answer(amount);
                writeln!(output, "{}", feedback)?;
            }
            QuizInput::Unknown(text) => {
                writeln!(output, "Unrecognized input '{}'. {}", text, HELP)?;
            }
        }
    }

    output.flush()?;
    Ok(())
}
