//! Pattern-based extraction of single fields from ORCA output.
//!
//! Every extractor follows the same contract: it scans an in-memory [`LogDocument`]
//! for one pattern and returns `Some(value)`, or logs a warning and returns `None`.
//! A missing field never aborts the caller.
//!
//! [`LogDocument`]: crate::core::document::LogDocument

pub mod directive;
pub mod fields;
pub mod pattern;

pub use fields::{
    extract_basis_set, extract_charge, extract_description, extract_electronic_energy,
    extract_enthalpy, extract_entropy, extract_gibbs_free_enthalpy, extract_inner_energy,
    extract_method, extract_multiplicity, extract_orca_version, extract_zero_point_energy,
};
pub use pattern::{ExtractError, FieldPattern};
