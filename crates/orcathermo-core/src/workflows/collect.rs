use crate::core::document::LogDocument;
use crate::core::models::record::ThermoRecord;
use crate::core::spectrum::{IntensityAnnotatedFrequency, ir_spectrum_from_scan, scan_frequencies};
use crate::engine::config::ExtractionConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::record::build_record_from_scan;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// IR spectrum of one input file, in the same order as the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSpectrum {
    pub path: PathBuf,
    pub modes: Vec<IntensityAnnotatedFrequency>,
}

#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    /// One record per input path, in input order.
    pub records: Vec<ThermoRecord>,
    /// Filled only when the IR spectrum pass is enabled.
    pub spectra: Vec<FileSpectrum>,
}

impl BatchResult {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[instrument(skip_all, name = "collect_workflow")]
pub fn run<P: AsRef<Path>>(
    paths: &[P],
    config: &ExtractionConfig,
    reporter: &ProgressReporter,
) -> Result<BatchResult, EngineError> {
    info!(
        "Collecting thermochemistry from {} file(s) at {}.",
        paths.len(),
        config.temperature
    );
    reporter.report(Progress::BatchStart {
        total_files: paths.len() as u64,
    });

    let mut result = BatchResult::default();
    for path in paths {
        let path = path.as_ref();
        reporter.report(Progress::FileStart {
            path: path.to_path_buf(),
        });

        let document = LogDocument::from_path(path).map_err(|e| EngineError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let scan = scan_frequencies(&document);
        if config.ir_spectrum {
            let modes = scan
                .clone()
                .and_then(|spectrum| ir_spectrum_from_scan(&document, &spectrum))
                .map_err(|e| EngineError::Spectrum {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            result.spectra.push(FileSpectrum {
                path: path.to_path_buf(),
                modes,
            });
        }

        result
            .records
            .push(build_record_from_scan(&document, config.temperature, &scan));
        reporter.report(Progress::FileFinish);
    }

    reporter.report(Progress::BatchFinish);
    info!("Collected {} record(s).", result.records.len());
    Ok(result)
}
