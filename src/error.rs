//! Fatal startup errors.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot resolve starting directory: {source}")]
    StartupResolution {
        #[source]
        source: io::Error,
    },
    #[error("{}: Not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Resolve the directory the scan starts from.
///
/// An explicit path is canonicalized; otherwise the process working
/// directory is used as-is.
pub fn resolve_start_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    let path = match explicit {
        Some(p) => p
            .canonicalize()
            .map_err(|source| Error::StartupResolution { source })?,
        None => std::env::current_dir().map_err(|source| Error::StartupResolution { source })?,
    };

    if !path.is_dir() {
        return Err(Error::NotADirectory(path));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_is_startup_error() {
        let err = resolve_start_dir(Some(Path::new("/this/path/does/not/exist"))).unwrap_err();
        assert!(matches!(err, Error::StartupResolution { .. }));
    }

    #[test]
    fn defaults_to_working_directory() {
        let resolved = resolve_start_dir(None).unwrap();
        assert_eq!(resolved, std::env::current_dir().unwrap());
    }

    #[test]
    fn file_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("afile.txt");
        std::fs::write(&file, "hello").unwrap();
        let err = resolve_start_dir(Some(&file)).unwrap_err();
        assert!(err.to_string().contains("Not a directory"));
    }
}
