use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Search root '{path}' does not exist", path = path.display())]
    RootNotFound { path: PathBuf },

    #[error("Search root '{path}' is not a directory", path = path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to resolve search root '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Returns every file named `filename` below `root`, as absolute paths.
///
/// Paths come back in traversal order, not sorted; callers use this order as the
/// record order of the dataset. Unreadable directory entries are skipped with a warning.
pub fn find_all(filename: &str, root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !root.exists() {
        return Err(DiscoveryError::RootNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(DiscoveryError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    let root = root.canonicalize().map_err(|e| DiscoveryError::Io {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut found = Vec::new();
    for entry in WalkDir::new(&root).follow_links(false) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && entry.file_name() == filename {
                    debug!("Found {:?}", entry.path());
                    found.push(entry.into_path());
                }
            }
            Err(e) => {
                warn!("Error accessing entry: {}", e);
            }
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_matching_files_recursively() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("water/opt")).unwrap();
        fs::create_dir_all(root.join("ammonia")).unwrap();
        fs::write(root.join("water/opt/orca.out"), "").unwrap();
        fs::write(root.join("ammonia/orca.out"), "").unwrap();
        fs::write(root.join("ammonia/orca.inp"), "").unwrap();

        let mut found = find_all("orca.out", root).unwrap();
        found.sort();

        let canonical = root.canonicalize().unwrap();
        assert_eq!(
            found,
            vec![
                canonical.join("ammonia/orca.out"),
                canonical.join("water/opt/orca.out"),
            ]
        );
        assert!(found.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn directories_with_matching_name_are_ignored() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("orca.out")).unwrap();
        assert!(find_all("orca.out", dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let result = find_all("orca.out", &dir.path().join("nope"));
        assert!(matches!(result, Err(DiscoveryError::RootNotFound { .. })));
    }

    #[test]
    fn file_root_is_an_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("orca.out");
        fs::write(&file, "").unwrap();
        let result = find_all("orca.out", &file);
        assert!(matches!(result, Err(DiscoveryError::NotADirectory { .. })));
    }
}
