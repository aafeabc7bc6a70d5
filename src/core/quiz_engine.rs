//! HST calculation quiz
//!
//! This module provides the `QuizEngine` that generates "what is the total
//! including 13% HST" questions and checks selected answers.
//!
//! Every question offers three amounts:
//! - the correct total, `round(price * 1.13)`
//! - a wrong-rate distractor, `round(price * 1.3)`
//! - a no-tax distractor, `round(price)`
//!
//! Whole amounts are computed in binary floating point and rounded half away
//! from zero, so `50 * 1.13` (56.49999999999999) rounds to 56 while
//! `250 * 1.13` (exactly 282.5) rounds to 283. The result is stored as a
//! `Decimal`, and rounding always happens before any comparison. The HST
//! shown in feedback is exact decimal arithmetic rounded to cents.

use crate::types::{Feedback, Question};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// HST rate applied to every sale (13%)
pub const TAX_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 2);

/// Multiplier producing the correct tax-inclusive total
const TOTAL_MULTIPLIER: f64 = 1.13;

/// Multiplier producing the wrong-rate distractor (30% instead of 13%)
const WRONG_RATE_MULTIPLIER: f64 = 1.3;

/// Sale prices used when no custom set is configured
pub const DEFAULT_PRICES: [u32; 5] = [50, 100, 250, 399, 600];

/// Configuration for question generation
///
/// Holds the set of sale prices questions are drawn from, each with its
/// question already worked out. The set is never empty and holds only
/// positive prices whose amounts fit in a `Decimal`.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizConfig {
    prices: Vec<Decimal>,
    questions: Vec<Question>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        let (prices, questions): (Vec<Decimal>, Vec<Question>) = DEFAULT_PRICES
            .iter()
            .filter_map(|&p| {
                let price = Decimal::from(p);
                question_for_price(price).map(|q| (price, q))
            })
            .unzip();

        Self { prices, questions }
    }
}

impl QuizConfig {
    /// Create a QuizConfig from a custom price set
    ///
    /// Non-positive prices and prices too large to price out are dropped. If
    /// nothing usable remains, the default price set is used instead.
    pub fn new(prices: Vec<Decimal>) -> Self {
        let mut valid = Vec::with_capacity(prices.len());
        let mut questions = Vec::with_capacity(prices.len());

        for price in prices {
            if price.is_sign_negative() || price.is_zero() {
                tracing::warn!("Ignoring non-positive sale price {}", price);
                continue;
            }
            match question_for_price(price) {
                Some(question) => {
                    valid.push(price);
                    questions.push(question);
                }
                None => tracing::warn!("Ignoring sale price {}: amounts overflow", price),
            }
        }

        if valid.is_empty() {
            tracing::warn!(
                "No usable sale prices configured, using default ({:?})",
                DEFAULT_PRICES
            );
            return Self::default();
        }

        Self {
            prices: valid,
            questions,
        }
    }

    pub fn prices(&self) -> &[Decimal] {
        &self.prices
    }
}

/// Round `amount * multiplier` to a whole amount, midpoints away from zero
///
/// Returns `None` when the result does not fit in a `Decimal`.
pub fn round_whole(amount: Decimal, multiplier: f64) -> Option<Decimal> {
    let product = amount.to_f64()? * multiplier;
    Decimal::from_f64(product.round())
}

/// Round to cents, midpoints away from zero
fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Question generator and answer checker
///
/// Generic over the random source so tests can seed it and get a
/// deterministic price and choice order.
#[derive(Debug, Clone)]
pub struct QuizEngine<R: Rng = StdRng> {
    config: QuizConfig,
    rng: R,
}

impl QuizEngine<StdRng> {
    /// Create an engine seeded from the operating system
    pub fn new(config: QuizConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine with a fixed seed
    pub fn from_seed(config: QuizConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuizEngine<R> {
    /// Create an engine drawing randomness from `rng`
    pub fn with_rng(config: QuizConfig, rng: R) -> Self {
        QuizEngine { config, rng }
    }

    /// Generate a new question
    ///
    /// Picks a sale price uniformly from the configured set and returns the
    /// three choices in random order.
    pub fn generate_question(&mut self) -> Question {
        let questions = &self.config.questions;
        let ordered = &questions[self.rng.gen_range(0..questions.len())];

        let mut choices = ordered.choices().to_vec();
        choices.shuffle(&mut self.rng);

        tracing::debug!(
            "Generated question for ${} with choices {:?}",
            ordered.sale_price(),
            choices
        );

        Question::new(ordered.sale_price(), ordered.correct_answer(), choices)
    }

    /// Check a selected amount against a question
    ///
    /// See [`check_answer`].
    pub fn check_answer(&self, selected: Decimal, question: &Question) -> Feedback {
        check_answer(selected, question)
    }
}

/// Build the question for a given sale price
///
/// Choices are in fixed order: correct total, wrong-rate distractor,
/// no-tax distractor. Duplicate values are kept. Returns `None` when an
/// amount does not fit in a `Decimal`.
pub fn question_for_price(sale_price: Decimal) -> Option<Question> {
    let correct_answer = round_whole(sale_price, TOTAL_MULTIPLIER)?;
    let wrong_rate = round_whole(sale_price, WRONG_RATE_MULTIPLIER)?;
    let no_tax = round_whole(sale_price, 1.0)?;

    Some(Question::new(
        sale_price,
        correct_answer,
        vec![correct_answer, wrong_rate, no_tax],
    ))
}

/// Check a selected amount against a question
///
/// Any amount is accepted, including amounts the question never offered.
/// Comparison is exact decimal equality, so `113` and `113.00` match.
pub fn check_answer(selected: Decimal, question: &Question) -> Feedback {
    if selected == question.correct_answer() {
        Feedback::Correct {
            tax: round_cents(question.sale_price() * TAX_RATE),
            total: round_cents(question.correct_answer()),
        }
    } else {
        Feedback::Incorrect
    }
}
