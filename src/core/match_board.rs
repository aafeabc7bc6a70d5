//! Drop targets for the matching game
//!
//! A `MatchBoard` holds the cards a player has dropped into each of the two
//! HST accounts. Dropping a card that is already in the target bucket is a
//! no-op; the same card may still be dropped into the other bucket.

use crate::types::{Bucket, TransactionRecord};

/// The payable and recoverable buckets of one session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchBoard {
    payable: Vec<TransactionRecord>,
    recoverable: Vec<TransactionRecord>,
}

impl MatchBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a card into a bucket
    ///
    /// # Returns
    ///
    /// `true` if the card was added, `false` if an identical card was already
    /// in that bucket
    pub fn place(&mut self, record: TransactionRecord, bucket: Bucket) -> bool {
        let target = match bucket {
            Bucket::Payable => &mut self.payable,
            Bucket::Recoverable => &mut self.recoverable,
        };

        if target.contains(&record) {
            return false;
        }

        target.push(record);
        true
    }

    pub fn payable(&self) -> &[TransactionRecord] {
        &self.payable
    }

    pub fn recoverable(&self) -> &[TransactionRecord] {
        &self.recoverable
    }

    pub fn bucket(&self, bucket: Bucket) -> &[TransactionRecord] {
        match bucket {
            Bucket::Payable => &self.payable,
            Bucket::Recoverable => &self.recoverable,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.payable.is_empty() && self.recoverable.is_empty()
    }
}
