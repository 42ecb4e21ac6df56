use orcathermo::engine::config::ExtractionConfig;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub filename: String,
    pub root: PathBuf,
    pub output_path: PathBuf,
    pub extraction: ExtractionConfig,
    /// Operator-facing notes produced while resolving the configuration.
    pub notices: Vec<String>,
}
