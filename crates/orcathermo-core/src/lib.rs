//! # ORCA Thermochemistry Collector
//!
//! A library for harvesting thermochemistry results from ORCA quantum-chemistry output
//! files into a flat, append-friendly tabular dataset.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that text extraction, record
//! assembly and batch orchestration can be tested in isolation.
//!
//! - **[`core`]: The Foundation.** Stateless pieces: the in-memory `LogDocument`, the
//!   field extractors, the vibrational analysis, the `ThermoRecord` model and the I/O
//!   collaborators (file discovery and the CSV sink).
//!
//! - **[`engine`]: The Logic Core.** Configuration, error types, progress reporting and
//!   the record builder that runs every extractor exactly once against one document.
//!
//! - **[`workflows`]: The Public API.** The batch collector that turns an ordered list of
//!   output files into an ordered list of records, optionally with IR spectra.

pub mod core;
pub mod engine;
pub mod workflows;
