//! # Engine Module
//!
//! This module holds the stateful glue between the stateless extractors in
//! [`crate::core`] and the batch workflows.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Reference temperature and optional IR spectrum pass
//! - **Error Handling** ([`error`]) - Engine-level error types wrapping document and spectrum failures
//! - **Progress Monitoring** ([`progress`]) - Callback-based batch and per-file progress events
//! - **Record Assembly** ([`record`]) - One [`crate::core::models::record::ThermoRecord`] per document

pub mod config;
pub mod error;
pub mod progress;
pub mod record;
