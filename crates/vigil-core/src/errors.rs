use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SupervisorError {
    #[error("Project root not found: {message}")]
    RootNotFound { message: String },

    #[error("Failed to read version manifest '{path}': {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse version manifest '{path}': {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("Version manifest '{path}' has no version field")]
    ManifestMissingVersion { path: PathBuf },

    #[error("Runtime '{runtime}' not found in PATH")]
    RuntimeNotFound { runtime: String },

    #[error("Failed to spawn '{program}': {source}")]
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },

    #[error("Failed to wait for child process: {source}")]
    WaitFailed { source: std::io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failed_message_names_program() {
        let err = SupervisorError::SpawnFailed {
            program: "node".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("node"));
    }

    #[test]
    fn test_manifest_missing_version_message_names_path() {
        let err = SupervisorError::ManifestMissingVersion {
            path: PathBuf::from("/tmp/package.json"),
        };
        assert!(err.to_string().contains("package.json"));
    }
}
