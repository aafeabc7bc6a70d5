//! Transaction-related types for the HST tutor
//!
//! This module defines the transaction cards used by the matching game, the
//! two HST accounts they can be dropped into, and the recorded grading rows
//! replayed by the batch grader.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Player identifier used by the batch grader
///
/// Supports player IDs from 0 to 4,294,967,295
pub type PlayerId = u32;

/// Canonical transaction catalog: (text, is_payable)
const CATALOG: [(&str, bool); 4] = [
    ("Sold goods for $500 + HST", true),
    ("Bought office supplies for $200 + HST", false),
    ("Sold services for $800 + HST", true),
    ("Bought new computer for $1000 + HST", false),
];

/// A transaction card in the matching game
///
/// Identity is structural: two records with the same text and flag are the
/// same card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionRecord {
    /// Human-readable description of the transaction
    pub text: String,

    /// True for a sale (HST the business owes), false for a purchase
    /// (HST the business can recover)
    pub is_payable: bool,
}

impl TransactionRecord {
    pub fn new(text: impl Into<String>, is_payable: bool) -> Self {
        TransactionRecord {
            text: text.into(),
            is_payable,
        }
    }

    /// The four canonical cards in catalog order
    pub fn catalog() -> Vec<TransactionRecord> {
        CATALOG
            .iter()
            .map(|(text, is_payable)| TransactionRecord::new(*text, *is_payable))
            .collect()
    }

    /// The canonical cards in random order, as dealt at session start
    pub fn shuffled_catalog<R: Rng + ?Sized>(rng: &mut R) -> Vec<TransactionRecord> {
        let mut cards = Self::catalog();
        cards.shuffle(rng);
        cards
    }

    /// The account this card belongs in
    pub fn expected_bucket(&self) -> Bucket {
        if self.is_payable {
            Bucket::Payable
        } else {
            Bucket::Recoverable
        }
    }
}

/// The two HST accounts a card can be dropped into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// HST collected on sales, owed to the government
    Payable,

    /// HST paid on purchases, claimable as an input tax credit
    Recoverable,
}

impl Bucket {
    /// Name used in grading files
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Payable => "payable",
            Bucket::Recoverable => "recoverable",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Payable => write!(f, "💸 HST Payable"),
            Bucket::Recoverable => write!(f, "💰 HST Recoverable"),
        }
    }
}

/// Actions recorded in a grading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementAction {
    /// Drop a card into a bucket
    Drop(Bucket),

    /// Press "Check Answers": score the player's current board
    Check,
}

/// One replayed user action from a grading input
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord {
    /// What the player did
    pub action: PlacementAction,

    /// The player this row belongs to
    pub player: PlayerId,

    /// The dropped card
    ///
    /// Present for drops, None for checks.
    pub record: Option<TransactionRecord>,
}
