use thiserror::Error;

use super::config::ConfigError;
use crate::core::document::DocumentError;
use crate::core::spectrum::SpectrumError;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to load output file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error("IR spectrum extraction failed for '{path}': {source}", path = path.display())]
    Spectrum {
        path: PathBuf,
        #[source]
        source: SpectrumError,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
