use super::directive::parse_directive;
use super::pattern::{ExtractError, FieldPattern, parse_float, parse_int, resolve};
use crate::core::document::LogDocument;
use crate::core::models::temperature::Temperature;
use std::sync::LazyLock;
use tracing::debug;

pub const THERMOCHEMISTRY_HEADER: &str = "THERMOCHEMISTRY AT";
pub const VERSION_PREFIX: &str = "Orca_";

fn field_pattern<T>(
    field: &'static str,
    regex: &str,
    group: usize,
    convert: fn(&str) -> Option<T>,
) -> FieldPattern<T> {
    FieldPattern::new(field, regex, group, convert).expect("built-in field pattern is valid")
}

static DESCRIPTION: LazyLock<FieldPattern<String>> =
    LazyLock::new(|| field_pattern("description", r"NAME = .*\n.*#\s(.*)", 1, to_description));

static METHOD: LazyLock<FieldPattern<String>> = LazyLock::new(|| {
    field_pattern("method", r"![ \t]*[RU](?:HF|KS)[ \t][^\r\n]*", 0, |s| {
        parse_directive(s)?.method
    })
});

static BASIS_SET: LazyLock<FieldPattern<String>> = LazyLock::new(|| {
    field_pattern("basis set", r"![ \t]*[RU](?:HF|KS)[ \t][^\r\n]*", 0, |s| {
        parse_directive(s)?.basis_set
    })
});

static CHARGE: LazyLock<FieldPattern<i64>> = LazyLock::new(|| {
    field_pattern("charge", r"\*[ \t]*xyz(?:file)?[ \t]+([-+]?\d+)", 1, parse_int)
});

static MULTIPLICITY: LazyLock<FieldPattern<i64>> = LazyLock::new(|| {
    field_pattern(
        "multiplicity",
        r"\*[ \t]*xyz(?:file)?[ \t]+[-+]?\d+[ \t]+(\d+)",
        1,
        parse_int,
    )
});

static SINGLE_POINT_ENERGY: LazyLock<FieldPattern<f64>> = LazyLock::new(|| {
    field_pattern(
        "electronic energy",
        r"FINAL SINGLE POINT ENERGY\s+(-?\d+\.\d+)",
        1,
        parse_float,
    )
});

static THERMO_ELECTRONIC_ENERGY: LazyLock<FieldPattern<f64>> = LazyLock::new(|| {
    field_pattern(
        "electronic energy",
        r"Electronic energy\s+\.\.\.\s+(-?\d+\.\d+)",
        1,
        parse_float,
    )
});

static ZERO_POINT_ENERGY: LazyLock<FieldPattern<f64>> = LazyLock::new(|| {
    field_pattern(
        "zero point energy",
        r"Zero point energy\s+\.\.\.\s+(-?\d+\.\d+)",
        1,
        parse_float,
    )
});

static INNER_ENERGY: LazyLock<FieldPattern<f64>> = LazyLock::new(|| {
    field_pattern(
        "inner energy",
        r"INNER ENERGY[\s\S]*?Total thermal energy\s+(-?\d+\.\d+)",
        1,
        parse_float,
    )
});

static ENTHALPY: LazyLock<FieldPattern<f64>> = LazyLock::new(|| {
    field_pattern(
        "enthalpy",
        r"ENTHALPY[\s\S]*?Total Enthalpy\s+\.*\s*(-?\d+\.\d+)",
        1,
        parse_float,
    )
});

static ENTROPY: LazyLock<FieldPattern<f64>> = LazyLock::new(|| {
    field_pattern(
        "entropy",
        r"ENTROPY[\s\S]*?Final entropy term\s+\.*\s*(-?\d+\.\d+)",
        1,
        parse_float,
    )
});

static GIBBS_FREE_ENTHALPY: LazyLock<FieldPattern<f64>> = LazyLock::new(|| {
    field_pattern(
        "Gibbs free enthalpy",
        r"GIBBS FREE ENTHALPY[\s\S]*?Final Gibbs free (?:enthalpy|energy)\s+\.*\s*(-?\d+\.\d+)",
        1,
        parse_float,
    )
});

static ORCA_VERSION: LazyLock<FieldPattern<String>> = LazyLock::new(|| {
    field_pattern(
        "ORCA version",
        r"Program Version (\d+(?:\.\d+)+)\s*-\s*RELEASE",
        1,
        |v| Some(format!("{VERSION_PREFIX}{v}")),
    )
});

fn to_description(raw: &str) -> Option<String> {
    let description = raw.trim().replace(' ', "_");
    (!description.is_empty()).then_some(description)
}

/// The last `THERMOCHEMISTRY AT <T>K` block for exactly this temperature, up to the next
/// thermochemistry block. Multi-job logs thus report the same final calculation as the
/// frequency scan.
pub fn thermochemistry_section(document: &LogDocument, temperature: Temperature) -> Option<&str> {
    let header = format!("{THERMOCHEMISTRY_HEADER} {}K", temperature.stamp());
    document.last_section(&header, THERMOCHEMISTRY_HEADER)
}

fn extract_scoped(
    pattern: &FieldPattern<f64>,
    document: &LogDocument,
    temperature: Temperature,
) -> Option<f64> {
    let result = match thermochemistry_section(document, temperature) {
        Some(section) => pattern.find_in(section),
        None => Err(ExtractError::NotFound {
            field: pattern.field(),
        }),
    };
    resolve(result.map_err(|e| e.at(temperature)))
}

pub fn extract_description(document: &LogDocument) -> Option<String> {
    resolve(DESCRIPTION.find_in(document.text()))
}

pub fn extract_method(document: &LogDocument) -> Option<String> {
    resolve(METHOD.find_in(document.text()))
}

pub fn extract_basis_set(document: &LogDocument) -> Option<String> {
    resolve(BASIS_SET.find_in(document.text()))
}

/// Total charge from the `* xyz <charge> <multiplicity>` line. An explicit `0` is
/// returned as `Some(0)`; only a missing line yields `None`.
pub fn extract_charge(document: &LogDocument) -> Option<i64> {
    resolve(CHARGE.find_in(document.text()))
}

pub fn extract_multiplicity(document: &LogDocument) -> Option<i64> {
    resolve(MULTIPLICITY.find_in(document.text()))
}

/// Electronic energy in Hartree.
///
/// Documents containing a thermochemistry block report it as `Electronic energy ...`;
/// all others are read from the `FINAL SINGLE POINT ENERGY` line. Either way the last
/// occurrence wins.
pub fn extract_electronic_energy(document: &LogDocument) -> Option<f64> {
    if document.contains(THERMOCHEMISTRY_HEADER) {
        debug!("Thermochemistry block present; reading electronic energy from it.");
        resolve(THERMO_ELECTRONIC_ENERGY.find_last_in(document.text()))
    } else {
        debug!("No thermochemistry block; reading final single point energy.");
        resolve(SINGLE_POINT_ENERGY.find_last_in(document.text()))
    }
}

pub fn extract_zero_point_energy(document: &LogDocument, temperature: Temperature) -> Option<f64> {
    extract_scoped(&ZERO_POINT_ENERGY, document, temperature)
}

pub fn extract_inner_energy(document: &LogDocument, temperature: Temperature) -> Option<f64> {
    extract_scoped(&INNER_ENERGY, document, temperature)
}

pub fn extract_enthalpy(document: &LogDocument, temperature: Temperature) -> Option<f64> {
    extract_scoped(&ENTHALPY, document, temperature)
}

pub fn extract_entropy(document: &LogDocument, temperature: Temperature) -> Option<f64> {
    extract_scoped(&ENTROPY, document, temperature)
}

pub fn extract_gibbs_free_enthalpy(
    document: &LogDocument,
    temperature: Temperature,
) -> Option<f64> {
    extract_scoped(&GIBBS_FREE_ENTHALPY, document, temperature)
}

pub fn extract_orca_version(document: &LogDocument) -> Option<String> {
    resolve(ORCA_VERSION.find_in(document.text()))
}
