use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Failure while loading the population CSV.
///
/// Only two kinds are recognized as user-facing: access denied and file not
/// found. Their `Display` strings are shown verbatim in the plugin's error
/// view. Everything else (unreadable header, non-year column, bad number) is
/// `Malformed` and propagates out of plugin construction.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Access to file '{}' denied. Please check the population data path and make sure you have access to it.", path.display())]
    AccessDenied { path: PathBuf },

    #[error("File '{}' not found. Please check the population data path.", path.display())]
    NotFound { path: PathBuf },

    #[error(transparent)]
    Malformed(#[from] anyhow::Error),
}

impl LoadError {
    /// Classify the error from opening the CSV file.
    pub fn from_open_error(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => LoadError::AccessDenied {
                path: path.to_path_buf(),
            },
            io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Malformed(
                anyhow::Error::new(err).context(format!("opening '{}'", path.display())),
            ),
        }
    }

    /// The message to render in place of the dashboard, if this is one of
    /// the two recognized kinds.
    pub fn user_message(&self) -> Option<String> {
        match self {
            LoadError::AccessDenied { .. } | LoadError::NotFound { .. } => Some(self.to_string()),
            LoadError::Malformed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_maps_to_access_denied_with_path() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let load_err = LoadError::from_open_error(err, Path::new("/data/population.csv"));
        assert!(matches!(load_err, LoadError::AccessDenied { .. }));
        let msg = load_err.user_message().unwrap();
        assert!(msg.contains("/data/population.csv"));
        assert!(msg.starts_with("Access to file"));
    }

    #[test]
    fn not_found_maps_to_not_found_with_path() {
        let err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let load_err = LoadError::from_open_error(err, Path::new("/tmp/nope.csv"));
        assert!(matches!(load_err, LoadError::NotFound { .. }));
        let msg = load_err.user_message().unwrap();
        assert!(msg.contains("/tmp/nope.csv"));
        assert!(msg.starts_with("File"));
    }

    #[test]
    fn other_io_errors_have_no_user_message() {
        let err = io::Error::new(io::ErrorKind::Interrupted, "interrupted");
        let load_err = LoadError::from_open_error(err, Path::new("x.csv"));
        assert!(load_err.user_message().is_none());
    }
}
