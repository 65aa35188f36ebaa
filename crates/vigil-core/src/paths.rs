//! Centralized path construction over the development tree.
//!
//! Single source of truth for every file the supervisor touches in the
//! project: the version manifest, the collaborator scripts, and the CLI
//! entry point. Use `resolve()` in production code and `from_dir()` in tests.

use std::path::{Path, PathBuf};

use crate::errors::SupervisorError;

/// Overrides the project root; defaults to the current working directory.
const ROOT_ENV: &str = "VIGIL_ROOT";

#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    /// Resolve the project root from `VIGIL_ROOT` or the working directory.
    pub fn resolve() -> Result<Self, SupervisorError> {
        let root = match std::env::var(ROOT_ENV).ok().filter(|s| !s.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => {
                std::env::current_dir().map_err(|e| SupervisorError::RootNotFound {
                    message: e.to_string(),
                })?
            }
        };
        Ok(Self { root })
    }

    /// Create paths from an explicit root directory. Use in tests.
    pub fn from_dir(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The version manifest, read once per launch cycle.
    pub fn manifest(&self) -> PathBuf {
        self.root.join("package.json")
    }

    /// Build-status checker collaborator; writes warnings for the CLI to
    /// display, runs with inherited stdio.
    pub fn build_status_script(&self) -> PathBuf {
        self.root.join("scripts").join("check-build-status.js")
    }

    /// Sandbox probe collaborator; prints the sandbox command when active.
    pub fn sandbox_probe_script(&self) -> PathBuf {
        self.root.join("scripts").join("sandbox_command.js")
    }

    /// The CLI package the runtime executes.
    pub fn cli_entry_point(&self) -> PathBuf {
        self.root.join("packages").join("cli")
    }
}
