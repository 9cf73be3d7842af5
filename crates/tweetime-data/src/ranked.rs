//! JSON ranked-groups loading.

use std::fs;
use std::path::Path;

use tracing::info;
use tweetime_models::RankedGroups;

use crate::error::{DataError, Result};

/// Loads the ranked groups from a JSON object of string arrays.
///
/// Category order follows the order of keys in the document.
///
/// # Errors
/// `ResourceNotFound` if the file cannot be read,
/// `MalformedData` if the document is not an object of string arrays.
pub fn load_ranked_groups(path: impl AsRef<Path>) -> Result<RankedGroups> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| DataError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let groups: RankedGroups =
        serde_json::from_slice(&data).map_err(|e| DataError::malformed(path, e.to_string()))?;

    info!(path = %path.display(), categories = groups.len(), "Loaded ranked groups");
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_json(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("top.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_keeps_key_order() {
        let dir = tempdir().unwrap();
        let path = write_json(
            dir.path(),
            r#"{"2022-04-27": ["first", "second"], "2020-05-01": ["only"]}"#,
        );

        let groups = load_ranked_groups(&path).unwrap();

        let labels: Vec<&str> = groups.labels().collect();
        assert_eq!(labels, vec!["2022-04-27", "2020-05-01"]);
        assert_eq!(groups.get("2022-04-27").unwrap(), ["first", "second"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_ranked_groups(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DataError::ResourceNotFound { .. }));
    }

    #[test]
    fn test_wrong_shape() {
        let dir = tempdir().unwrap();

        for body in [r#"["a", "b"]"#, r#"{"A": [1, 2]}"#, r#"{"A": "x"}"#, "{not json"] {
            let path = write_json(dir.path(), body);
            let err = load_ranked_groups(&path).unwrap_err();
            assert!(
                matches!(err, DataError::MalformedData { .. }),
                "expected malformed for {}",
                body
            );
        }
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("top.json");
        fs::write(&path, b"{\"A\": [\"\xff\xfe\"]}").unwrap();

        let err = load_ranked_groups(&path).unwrap_err();
        assert!(matches!(err, DataError::MalformedData { .. }));
    }

    #[test]
    fn test_empty_entries_accepted_by_loader() {
        let dir = tempdir().unwrap();
        let path = write_json(dir.path(), r#"{"A": []}"#);

        let groups = load_ranked_groups(&path).unwrap();
        assert_eq!(groups.get("A").unwrap().len(), 0);
    }
}
