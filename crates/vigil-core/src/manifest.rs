//! Version manifest reading.
//!
//! The project's `package.json` is the version source of truth; its version
//! field is propagated verbatim into the child environment as `CLI_VERSION`.

use std::fs;

use serde::Deserialize;

use crate::errors::SupervisorError;
use crate::paths::ProjectPaths;

#[derive(Debug, Deserialize)]
struct Manifest {
    version: Option<String>,
}

/// Read the project version from the manifest.
///
/// # Errors
///
/// Returns an error when the manifest is missing, unparseable, or has no
/// version field; the supervisor cannot honor the version contract without
/// it.
pub fn read_version(paths: &ProjectPaths) -> Result<String, SupervisorError> {
    let path = paths.manifest();
    let content = fs::read_to_string(&path).map_err(|source| SupervisorError::ManifestRead {
        path: path.clone(),
        source,
    })?;
    let manifest: Manifest =
        serde_json::from_str(&content).map_err(|e| SupervisorError::ManifestParse {
            path: path.clone(),
            message: e.to_string(),
        })?;
    manifest
        .version
        .ok_or(SupervisorError::ManifestMissingVersion { path })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths_with_manifest(content: &str) -> (tempfile::TempDir, ProjectPaths) {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("package.json"), content).expect("write manifest");
        let paths = ProjectPaths::from_dir(dir.path().to_path_buf());
        (dir, paths)
    }

    #[test]
    fn test_read_version_returns_version_field() {
        let (_dir, paths) = paths_with_manifest(r#"{"name":"cli","version":"0.9.1"}"#);
        assert_eq!(read_version(&paths).expect("version"), "0.9.1");
    }

    #[test]
    fn test_read_version_ignores_unknown_fields() {
        let (_dir, paths) =
            paths_with_manifest(r#"{"version":"1.2.3","scripts":{"start":"node ."}}"#);
        assert_eq!(read_version(&paths).expect("version"), "1.2.3");
    }

    #[test]
    fn test_missing_version_field_is_an_error() {
        let (_dir, paths) = paths_with_manifest(r#"{"name":"cli"}"#);
        assert!(matches!(
            read_version(&paths),
            Err(SupervisorError::ManifestMissingVersion { .. })
        ));
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let (_dir, paths) = paths_with_manifest("not json");
        assert!(matches!(
            read_version(&paths),
            Err(SupervisorError::ManifestParse { .. })
        ));
    }

    #[test]
    fn test_missing_manifest_is_a_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = ProjectPaths::from_dir(dir.path().to_path_buf());
        assert!(matches!(
            read_version(&paths),
            Err(SupervisorError::ManifestRead { .. })
        ));
    }
}
