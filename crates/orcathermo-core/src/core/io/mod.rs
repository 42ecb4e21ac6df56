//! Input discovery and record persistence.
//!
//! These are the collaborators around the extraction engine: locating ORCA output
//! files on disk and writing finished records to a tabular dataset through the
//! [`traits::RecordSink`] interface.

pub mod discovery;
pub mod table;
pub mod traits;
