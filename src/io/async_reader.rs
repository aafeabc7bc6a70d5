//! Asynchronous CSV reader with batch interface
//!
//! Reads grading rows with csv-async and hands them out in batches for the
//! async grading strategy.
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of PlacementRecords
//!                  ↓
//!           csv_format module
//!           (PlacementCsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, PlacementCsvRecord};
use crate::types::PlacementRecord;
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self { csv_reader }
    }

    /// Read up to `batch_size` grading rows
    ///
    /// Invalid rows are logged and skipped. Returns an empty vector at end of
    /// input.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<PlacementRecord> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<PlacementCsvRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(csv_record)) => match convert_csv_record(csv_record) {
                    Ok(row) => batch.push(row),
                    Err(e) => tracing::warn!("Skipping grading row: {}", e),
                },
                Some(Err(e)) => tracing::warn!("CSV parse error: {}", e),
                None => break,
            }
        }

        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlacementAction;
    use futures::io::Cursor;

    #[tokio::test]
    async fn test_async_reader_read_batch() {
        let csv_content = "action,player,text,payable\n\
            payable,1,Sold goods for $500 + HST,true\n\
            check,1,,\n\
            check,2,,\n";
        let reader = Cursor::new(csv_content.as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].player, 1);
        assert!(batch[0].record.is_some());
        assert_eq!(batch[1].action, PlacementAction::Check);

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].player, 2);

        let batch = async_reader.read_batch(2).await;
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_empty_csv() {
        let reader = Cursor::new("action,player,text,payable\n".as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        assert!(async_reader.read_batch(10).await.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_skips_invalid_rows() {
        let csv_content = "action,player,text,payable\n\
            toss,1,,\n\
            payable,1,Sold goods for $500 + HST,\n\
            check,1,,\n";
        let reader = Cursor::new(csv_content.as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].action, PlacementAction::Check);
    }

    #[tokio::test]
    async fn test_async_reader_case_insensitive_action() {
        let csv_content = "action,player,text,payable\n\
            RECOVERABLE,1,Bought new computer for $1000 + HST,FALSE\n\
            Check,1,,\n";
        let reader = Cursor::new(csv_content.as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        assert_eq!(async_reader.read_batch(10).await.len(), 2);
    }
}
