use super::traits::{RecordSink, WriteOutcome};
use crate::core::models::record::ThermoRecord;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("File I/O error for '{path}': {source}", path = path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("CSV error for '{path}': {source}", path = path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error(
        "Data not compatible with existing file '{path}': {existing:?} does not match with {incoming:?}",
        path = path.display()
    )]
    HeaderMismatch {
        path: PathBuf,
        existing: Vec<String>,
        incoming: Vec<String>,
    },

    #[error("Record {index} has columns {found:?}, expected {expected:?}")]
    InconsistentRecords {
        index: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// A CSV dataset on disk that is created on first use and appended to afterwards.
///
/// Appending is only allowed when the existing header equals the incoming column order
/// field for field; otherwise the file is left untouched.
#[derive(Debug, Clone)]
pub struct CsvTable {
    path: PathBuf,
}

impl CsvTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the header row of the existing file, or `None` if the file is missing or empty.
    pub fn read_header(&self) -> Result<Option<Vec<String>>, SinkError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.csv_error(e))?;
        match reader.records().next() {
            Some(record) => {
                let record = record.map_err(|e| self.csv_error(e))?;
                Ok(Some(record.iter().map(str::to_string).collect()))
            }
            None => Ok(None),
        }
    }

    /// Number of data rows below the header.
    pub fn row_count(&self) -> Result<usize, SinkError> {
        if !self.path.exists() {
            return Ok(0);
        }
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.csv_error(e))?;
        let mut rows = 0;
        for record in reader.records() {
            record.map_err(|e| self.csv_error(e))?;
            rows += 1;
        }
        Ok(rows)
    }

    fn csv_error(&self, source: csv::Error) -> SinkError {
        SinkError::Csv {
            path: self.path.clone(),
            source,
        }
    }

    fn io_error(&self, source: io::Error) -> SinkError {
        SinkError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn write_rows<W: Write>(
        &self,
        sink: W,
        header: Option<&[String]>,
        records: &[ThermoRecord],
    ) -> Result<(), SinkError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(sink);
        if let Some(header) = header {
            writer
                .write_record(header)
                .map_err(|e| self.csv_error(e))?;
        }
        for record in records {
            writer
                .write_record(record.to_row())
                .map_err(|e| self.csv_error(e))?;
        }
        writer.flush().map_err(|e| self.io_error(e))
    }
}

/// Checks that every record shares the column order of the first one.
pub fn common_columns(records: &[ThermoRecord]) -> Result<Option<Vec<String>>, SinkError> {
    let Some(first) = records.first() else {
        return Ok(None);
    };
    let expected = first.keys();
    for (index, record) in records.iter().enumerate().skip(1) {
        let found = record.keys();
        if found != expected {
            return Err(SinkError::InconsistentRecords {
                index,
                expected,
                found,
            });
        }
    }
    Ok(Some(expected))
}

impl RecordSink for CsvTable {
    type Error = SinkError;

    fn persist(&mut self, records: &[ThermoRecord]) -> Result<WriteOutcome, Self::Error> {
        let Some(columns) = common_columns(records)? else {
            debug!("No records to persist; leaving {:?} untouched.", self.path);
            return Ok(WriteOutcome::Skipped);
        };

        match self.read_header()? {
            Some(existing) => {
                if existing != columns {
                    return Err(SinkError::HeaderMismatch {
                        path: self.path.clone(),
                        existing,
                        incoming: columns,
                    });
                }
                let file = OpenOptions::new()
                    .append(true)
                    .open(&self.path)
                    .map_err(|e| self.io_error(e))?;
                self.write_rows(file, None, records)?;
                info!("Appended {} row(s) to {:?}.", records.len(), self.path);
                Ok(WriteOutcome::Appended {
                    rows: records.len(),
                })
            }
            None => {
                let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
                self.write_rows(file, Some(columns.as_slice()), records)?;
                info!("Created {:?} with {} row(s).", self.path, records.len());
                Ok(WriteOutcome::Created {
                    rows: records.len(),
                })
            }
        }
    }
}
