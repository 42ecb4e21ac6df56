use crate::core::models::record::ThermoRecord;
use std::error::Error;

/// Result of handing a batch of records to a [`RecordSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// A new dataset was started with a header row followed by `rows` data rows.
    Created { rows: usize },
    /// `rows` data rows were appended below a compatible header.
    Appended { rows: usize },
    /// Nothing was written because the batch was empty.
    Skipped,
}

/// Defines the interface for persisting extracted records.
///
/// Implementors must either write every record of a batch or none of them.
pub trait RecordSink {
    /// The error type for persistence operations.
    type Error: Error;

    /// Persists `records` in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be written or are incompatible with data
    /// already held by the sink. In that case nothing from this batch is persisted.
    fn persist(&mut self, records: &[ThermoRecord]) -> Result<WriteOutcome, Self::Error>;
}
