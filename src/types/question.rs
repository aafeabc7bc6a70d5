//! Quiz-related types for the HST tutor
//!
//! This module defines the multiple-choice question handed to the
//! presentation layer and the feedback produced when a choice is checked.

use rust_decimal::Decimal;
use std::fmt;

/// A generated "what is the tax-inclusive total" question
///
/// Created fresh for every "new question" request and never mutated
/// afterwards. The presentation layer renders `choices` in the stored order.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    sale_price: Decimal,
    correct_answer: Decimal,
    choices: Vec<Decimal>,
}

impl Question {
    pub(crate) fn new(sale_price: Decimal, correct_answer: Decimal, choices: Vec<Decimal>) -> Self {
        Question {
            sale_price,
            correct_answer,
            choices,
        }
    }

    /// Pre-tax price of the product being sold
    pub fn sale_price(&self) -> Decimal {
        self.sale_price
    }

    /// Tax-inclusive total, rounded to a whole amount
    pub fn correct_answer(&self) -> Decimal {
        self.correct_answer
    }

    /// The three offered amounts in display order
    ///
    /// Always contains `correct_answer` at least once. Values may repeat when
    /// a distractor rounds to the same amount as another choice.
    pub fn choices(&self) -> &[Decimal] {
        &self.choices
    }

    /// Prompt text shown above the choices
    pub fn prompt(&self) -> String {
        format!(
            "You sold a product for ${}. What is the total amount including 13% HST?",
            self.sale_price.normalize()
        )
    }
}

/// Outcome of checking a selected amount against a question
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    /// The selected amount equals the correct total
    ///
    /// Both amounts are rounded to 2 decimal places.
    Correct {
        /// HST portion of the sale
        tax: Decimal,
        /// Tax-inclusive total
        total: Decimal,
    },

    /// Any other amount, offered or not
    Incorrect,
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct { .. })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Correct { tax, total } => {
                write!(f, "🎉 Correct! HST = {:.2}, total = {:.2}", tax, total)
            }
            Feedback::Incorrect => write!(f, "❌ Oops! Remember: HST is 13% of the price."),
        }
    }
}
