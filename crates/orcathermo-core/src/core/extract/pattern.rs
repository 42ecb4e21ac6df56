use crate::core::models::temperature::Temperature;
use regex::Regex;
use thiserror::Error;
use tracing::{trace, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{field} not found")]
    NotFound { field: &'static str },

    #[error("{field} at {temperature} not found")]
    NotFoundAt {
        field: &'static str,
        temperature: Temperature,
    },

    #[error("{field} could not be converted from '{value}'")]
    Conversion { field: &'static str, value: String },

    #[error("Invalid pattern for {field}: {source}")]
    Pattern {
        field: &'static str,
        source: regex::Error,
    },
}

impl ExtractError {
    pub fn field(&self) -> &'static str {
        match self {
            ExtractError::NotFound { field }
            | ExtractError::NotFoundAt { field, .. }
            | ExtractError::Conversion { field, .. }
            | ExtractError::Pattern { field, .. } => *field,
        }
    }

    /// Attaches the reference temperature to a plain "not found" outcome.
    pub fn at(self, temperature: Temperature) -> Self {
        match self {
            ExtractError::NotFound { field } => ExtractError::NotFoundAt { field, temperature },
            other => other,
        }
    }
}

/// A named field located by a regular expression and converted from one capture group.
#[derive(Debug, Clone)]
pub struct FieldPattern<T> {
    field: &'static str,
    regex: Regex,
    group: usize,
    convert: fn(&str) -> Option<T>,
}

impl<T> FieldPattern<T> {
    pub fn new(
        field: &'static str,
        pattern: &str,
        group: usize,
        convert: fn(&str) -> Option<T>,
    ) -> Result<Self, ExtractError> {
        let regex = Regex::new(pattern).map_err(|e| ExtractError::Pattern { field, source: e })?;
        Ok(Self {
            field,
            regex,
            group,
            convert,
        })
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Converts the capture group of the first match in `haystack`.
    pub fn find_in(&self, haystack: &str) -> Result<T, ExtractError> {
        let captures = self
            .regex
            .captures(haystack)
            .ok_or(ExtractError::NotFound { field: self.field })?;
        self.convert_group(&captures)
    }

    /// Converts the capture group of the last match in `haystack`.
    pub fn find_last_in(&self, haystack: &str) -> Result<T, ExtractError> {
        let captures = self
            .regex
            .captures_iter(haystack)
            .last()
            .ok_or(ExtractError::NotFound { field: self.field })?;
        self.convert_group(&captures)
    }

    fn convert_group(&self, captures: &regex::Captures<'_>) -> Result<T, ExtractError> {
        let raw = captures
            .get(self.group)
            .map(|m| m.as_str())
            .ok_or(ExtractError::NotFound { field: self.field })?;
        trace!(field = self.field, raw, "Pattern matched.");
        (self.convert)(raw).ok_or_else(|| ExtractError::Conversion {
            field: self.field,
            value: raw.to_string(),
        })
    }
}

/// Turns an extraction outcome into an optional value, warning about failures.
pub fn resolve<T>(result: Result<T, ExtractError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Warning: {}.", capitalize(&e.to_string()));
            None
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

pub(crate) fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
