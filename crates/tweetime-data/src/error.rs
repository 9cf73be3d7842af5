//! Error types for artifact loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the static artifacts.
#[derive(Error, Debug)]
pub enum DataError {
    /// The path does not resolve to an existing, readable file.
    #[error("resource not found: {}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not parse into the expected shape.
    #[error("malformed data in {}: {}", path.display(), reason)]
    MalformedData { path: PathBuf, reason: String },
}

impl DataError {
    pub(crate) fn malformed(path: &std::path::Path, reason: impl Into<String>) -> Self {
        DataError::MalformedData {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Path of the artifact that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            DataError::ResourceNotFound { path, .. } | DataError::MalformedData { path, .. } => {
                path
            }
        }
    }
}

/// Result type alias for loading operations.
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::malformed(std::path::Path::new("hist.csv"), "row 3: bad date");
        assert_eq!(err.to_string(), "malformed data in hist.csv: row 3: bad date");
        assert_eq!(err.path(), std::path::Path::new("hist.csv"));

        let err = DataError::ResourceNotFound {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "resource not found: missing.json");
    }
}
