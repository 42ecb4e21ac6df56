use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The full text of one ORCA output file.
///
/// A document is read once and then shared by reference with every extractor,
/// so no field lookup ever touches the filesystem again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDocument {
    source: Option<PathBuf>,
    text: String,
}

impl LogDocument {
    /// Reads the whole file at `path` into memory.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Io`] if the file cannot be opened or is not valid UTF-8.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            source: Some(path.to_path_buf()),
            text,
        })
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            source: None,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.text.contains(marker)
    }

    /// Returns the span starting at the first occurrence of `header` and ending right
    /// before the next occurrence of `terminator` after it (or at the end of the text).
    pub fn section(&self, header: &str, terminator: &str) -> Option<&str> {
        let start = self.text.find(header)?;
        Some(bounded_span(&self.text, start, header.len(), terminator))
    }

    /// Like [`section`](Self::section), but anchored on the last occurrence of `header`.
    pub fn last_section(&self, header: &str, terminator: &str) -> Option<&str> {
        let start = self.text.rfind(header)?;
        Some(bounded_span(&self.text, start, header.len(), terminator))
    }
}

fn bounded_span<'a>(text: &'a str, start: usize, header_len: usize, terminator: &str) -> &'a str {
    let body_start = start + header_len;
    let end = text[body_start..]
        .find(terminator)
        .map_or(text.len(), |offset| body_start + offset);
    &text[start..end]
}
