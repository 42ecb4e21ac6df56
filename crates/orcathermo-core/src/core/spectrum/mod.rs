//! Vibrational analysis of ORCA frequency calculations.
//!
//! - **Frequencies** ([`frequencies`]) - sequential scan of the vibrational frequency
//!   block, real/imaginary partitioning and the minimum check.
//! - **Intensities** ([`intensities`]) - IR intensity lookup for real modes and the
//!   advisory linearity hint.

pub mod frequencies;
pub mod intensities;

pub use frequencies::{
    FrequencyEntry, ScanOutcome, SpectrumError, VibrationalSpectrum, check_minimum,
    minimum_from_scan, scan_frequencies,
};
pub use intensities::{
    IntensityAnnotatedFrequency, LinearityHint, annotate_intensities, extract_ir_spectrum,
    ir_spectrum_from_scan, linearity_hint,
};
