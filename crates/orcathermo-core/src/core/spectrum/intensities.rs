use super::frequencies::{SpectrumError, VibrationalSpectrum, round2, scan_frequencies};
use crate::core::document::LogDocument;
use regex::Regex;
use tracing::info;

pub const IR_HEADER: &str = "IR SPECTRUM";
pub const IR_TERMINATOR: &str = "The first frequency";

/// A real vibrational mode together with its IR intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityAnnotatedFrequency {
    pub mode: usize,
    pub frequency: f64,
    pub intensity: f64,
}

/// Advisory guess at molecular shape from where the real modes start.
///
/// A linear molecule has five zero modes, so its first real mode is index 5; a
/// non-linear one has six. Neither index being real suggests a non-minimum structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearityHint {
    Linear,
    NonLinear,
    NotMinimum,
}

pub fn linearity_hint(spectrum: &VibrationalSpectrum) -> LinearityHint {
    let has_real = |mode: usize| spectrum.real().any(|e| e.mode == mode);
    if has_real(5) {
        LinearityHint::Linear
    } else if has_real(6) {
        LinearityHint::NonLinear
    } else {
        LinearityHint::NotMinimum
    }
}

fn report_linearity(hint: LinearityHint) {
    match hint {
        LinearityHint::Linear => info!("Molecule is linear."),
        LinearityHint::NonLinear => info!("Molecule is non-linear."),
        LinearityHint::NotMinimum => info!("Structure is not a minimum."),
    }
}

/// Looks up the IR intensity of every real mode of `spectrum`.
///
/// Each mode is matched by its index and by its frequency printed with exactly two
/// decimals, so a line is only accepted if it agrees with the frequency block.
///
/// # Errors
///
/// Fails with [`SpectrumError::MissingIntensity`] on the first real mode without a
/// matching IR line; no partial result is returned.
pub fn annotate_intensities(
    document: &LogDocument,
    spectrum: &VibrationalSpectrum,
) -> Result<Vec<IntensityAnnotatedFrequency>, SpectrumError> {
    let ir_block = document
        .last_section(IR_HEADER, IR_TERMINATOR)
        .unwrap_or_default();

    spectrum
        .real()
        .map(|entry| -> Result<IntensityAnnotatedFrequency, SpectrumError> {
            let frequency = format!("{:.2}", entry.frequency);
            let line = Regex::new(&format!(
                r"(?m)^[ \t]*{}:[ \t]+{}[ \t]+(\d+\.\d+)",
                entry.mode,
                regex::escape(&frequency)
            ))?;
            let intensity = line
                .captures(ir_block)
                .and_then(|caps| caps[1].parse::<f64>().ok())
                .ok_or_else(|| SpectrumError::MissingIntensity {
                    mode: entry.mode,
                    frequency: frequency.clone(),
                })?;
            Ok(IntensityAnnotatedFrequency {
                mode: entry.mode,
                frequency: entry.frequency,
                intensity: round2(intensity),
            })
        })
        .collect()
}

/// Scans the frequencies of `document`, reports the linearity hint and annotates every
/// real mode with its IR intensity.
pub fn extract_ir_spectrum(
    document: &LogDocument,
) -> Result<Vec<IntensityAnnotatedFrequency>, SpectrumError> {
    let spectrum = scan_frequencies(document)?;
    ir_spectrum_from_scan(document, &spectrum)
}

/// Same as [`extract_ir_spectrum`], reusing a spectrum the caller already scanned.
pub fn ir_spectrum_from_scan(
    document: &LogDocument,
    spectrum: &VibrationalSpectrum,
) -> Result<Vec<IntensityAnnotatedFrequency>, SpectrumError> {
    report_linearity(linearity_hint(spectrum));
    annotate_intensities(document, spectrum)
}
