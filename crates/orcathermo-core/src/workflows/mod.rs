//! # Workflows Module
//!
//! High-level entry points that drive complete extraction runs.
//!
//! ## Overview
//!
//! A workflow takes the ordered list of output files chosen by the caller, loads each
//! one exactly once, runs the record builder (and optionally the IR spectrum pass) and
//! hands back the results in input order. Progress is reported through the
//! [`crate::engine::progress::ProgressReporter`] supplied by the caller.
//!
//! - **Collect Workflow** ([`collect`]) - Batch thermochemistry collection

pub mod collect;
