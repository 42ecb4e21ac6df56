//! # Core Module
//!
//! This module provides the stateless building blocks for reading thermochemistry
//! results out of ORCA output files.
//!
//! ## Overview
//!
//! Everything here operates on a single, fully loaded [`document::LogDocument`]. The
//! extractors never touch the filesystem themselves and never fail past their own
//! boundary: a field that cannot be located is reported with a warning and left absent.
//!
//! ## Architecture
//!
//! - **Documents** ([`document`]) - In-memory ORCA output with section slicing
//! - **Field Extraction** ([`extract`]) - Pattern-driven lookup of metadata and energies
//! - **Vibrational Analysis** ([`spectrum`]) - Frequency scan, minimum check and IR intensities
//! - **Data Models** ([`models`]) - Reference temperature and the per-file [`models::record::ThermoRecord`]
//! - **File I/O** ([`io`]) - Input discovery and the CSV dataset sink

pub mod document;
pub mod extract;
pub mod io;
pub mod models;
pub mod spectrum;
