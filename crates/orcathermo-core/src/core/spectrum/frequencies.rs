use crate::core::document::LogDocument;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{info, warn};

pub const FREQUENCY_HEADER: &str = "VIBRATIONAL FREQUENCIES";
pub const FREQUENCY_TERMINATOR: &str = "NORMAL MODES";

static MODE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(\d+):[ \t]+(-?\d+\.\d+)").expect("mode line pattern is valid")
});

#[derive(Debug, Clone, Error)]
pub enum SpectrumError {
    #[error("Vibrational frequency block found, but it does not list mode 0")]
    MissingFirstMode,

    #[error("IR intensity for mode {mode} at {frequency} cm**-1 not found")]
    MissingIntensity { mode: usize, frequency: String },

    #[error("Invalid intensity pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// One vibrational mode as printed by ORCA, in cm**-1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyEntry {
    pub mode: usize,
    pub frequency: f64,
}

impl FrequencyEntry {
    pub fn is_imaginary(&self) -> bool {
        self.frequency < 0.0
    }

    pub fn is_real(&self) -> bool {
        self.frequency > 0.0
    }
}

/// How the mode scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The document has no vibrational frequency block at all.
    NoSection,
    /// Modes `0..next_index` were found and `next_index` was not.
    Complete { next_index: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct VibrationalSpectrum {
    entries: Vec<FrequencyEntry>,
    outcome: ScanOutcome,
}

impl VibrationalSpectrum {
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn outcome(&self) -> ScanOutcome {
        self.outcome
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn imaginary(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter().filter(|e| e.is_imaginary())
    }

    /// Modes with a strictly positive frequency. Zero-frequency modes (translations and
    /// rotations) belong to neither partition.
    pub fn real(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter().filter(|e| e.is_real())
    }

    pub fn is_minimum(&self) -> bool {
        self.imaginary().next().is_none()
    }
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Reads the contiguous run of modes `0, 1, 2, ...` from the last vibrational frequency
/// block of the document. The scan stops at the first index without a matching line;
/// later indices are never consulted.
///
/// # Errors
///
/// Returns [`SpectrumError::MissingFirstMode`] if the block exists but has no mode 0,
/// which distinguishes a malformed block from a document without frequencies.
pub fn scan_frequencies(document: &LogDocument) -> Result<VibrationalSpectrum, SpectrumError> {
    let Some(block) = document.last_section(FREQUENCY_HEADER, FREQUENCY_TERMINATOR) else {
        return Ok(VibrationalSpectrum {
            entries: Vec::new(),
            outcome: ScanOutcome::NoSection,
        });
    };

    let mut lines: HashMap<usize, f64> = HashMap::new();
    for caps in MODE_LINE.captures_iter(block) {
        let (Ok(mode), Ok(frequency)) = (caps[1].parse::<usize>(), caps[2].parse::<f64>()) else {
            continue;
        };
        lines.entry(mode).or_insert(frequency);
    }

    let mut entries = Vec::new();
    let mut mode = 0;
    while let Some(&frequency) = lines.get(&mode) {
        entries.push(FrequencyEntry {
            mode,
            frequency: round2(frequency),
        });
        mode += 1;
    }

    if entries.is_empty() {
        return Err(SpectrumError::MissingFirstMode);
    }

    let spectrum = VibrationalSpectrum {
        entries,
        outcome: ScanOutcome::Complete { next_index: mode },
    };
    info!(
        "Found {} vibrations and {} imaginary frequencies.",
        spectrum.real().count(),
        spectrum.imaginary().count()
    );
    Ok(spectrum)
}

/// Whether the structure is a stationary minimum, i.e. has no imaginary modes.
///
/// A document without frequencies is vacuously a minimum. A malformed frequency block
/// yields `None` with a warning.
pub fn check_minimum(document: &LogDocument) -> Option<bool> {
    minimum_from_scan(&scan_frequencies(document))
}

/// Same as [`check_minimum`], for a scan the caller already holds.
pub fn minimum_from_scan(scan: &Result<VibrationalSpectrum, SpectrumError>) -> Option<bool> {
    match scan {
        Ok(spectrum) => {
            let imaginary = spectrum.imaginary().count();
            if imaginary == 0 {
                info!("No imaginary frequencies found. Structure is a minimum.");
            } else {
                info!("{imaginary} imaginary frequencies found. Structure is not a minimum.");
            }
            Some(imaginary == 0)
        }
        Err(e) => {
            warn!("Warning: {e}.");
            None
        }
    }
}
