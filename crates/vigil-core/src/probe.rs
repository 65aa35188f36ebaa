//! Collaborator invocations that run before each child spawn.
//!
//! Both probes are external scripts owned by the project, not by the
//! supervisor. They run strictly sequentially and block until completion.
//! Neither can fail the supervisor: the build-status checker surfaces its own
//! errors through inherited stdio, and a failing sandbox probe simply means
//! sandboxing is inactive.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::paths::ProjectPaths;

/// Run the build-status checker with inherited stdio.
///
/// The checker writes warnings for the CLI to display later. Its exit status
/// is ignored: a broken or missing checker never blocks a launch.
pub fn check_build_status(runtime: &Path, paths: &ProjectPaths) {
    let script = paths.build_status_script();
    debug!(
        event = "core.probe.build_status_started",
        script = %script.display()
    );

    match Command::new(runtime)
        .arg(&script)
        .current_dir(paths.root())
        .status()
    {
        Ok(status) if status.success() => {
            debug!(event = "core.probe.build_status_completed");
        }
        Ok(status) => {
            debug!(
                event = "core.probe.build_status_nonzero",
                code = ?status.code()
            );
        }
        Err(e) => {
            debug!(event = "core.probe.build_status_spawn_failed", error = %e);
        }
    }
}

/// Probe for an active sandbox.
///
/// Returns the trimmed sandbox command string when the probe succeeds with
/// non-empty output. Any failure (missing helper, non-zero exit, non-UTF-8
/// output) means sandboxing is inactive, an expected outcome rather than a
/// fault.
pub fn sandbox_command(runtime: &Path, paths: &ProjectPaths) -> Option<String> {
    let script = paths.sandbox_probe_script();
    debug!(
        event = "core.probe.sandbox_started",
        script = %script.display()
    );

    let mut cmd = Command::new(runtime);
    cmd.arg(&script).current_dir(paths.root());
    let result = capture_trimmed(&mut cmd);

    debug!(
        event = "core.probe.sandbox_completed",
        sandbox_command = ?result
    );
    result
}

/// Run a command capturing stdout only; stderr stays on the terminal.
/// Returns the trimmed output when the command succeeds and printed
/// something.
fn capture_trimmed(cmd: &mut Command) -> Option<String> {
    let output = cmd
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sh(script: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(script);
        cmd
    }

    #[test]
    fn test_capture_trimmed_strips_whitespace() {
        let result = capture_trimmed(&mut sh("printf '  sandbox-exec -p profile \\n'"));
        assert_eq!(result.as_deref(), Some("sandbox-exec -p profile"));
    }

    #[test]
    fn test_capture_trimmed_empty_output_is_none() {
        assert_eq!(capture_trimmed(&mut sh("printf ''")), None);
        assert_eq!(capture_trimmed(&mut sh("printf '  \\n'")), None);
    }

    #[test]
    fn test_capture_trimmed_nonzero_exit_is_none() {
        assert_eq!(capture_trimmed(&mut sh("echo ignored; exit 3")), None);
    }

    #[test]
    fn test_capture_trimmed_missing_program_is_none() {
        let mut cmd = Command::new("/nonexistent/helper-binary");
        assert_eq!(capture_trimmed(&mut cmd), None);
    }

    #[test]
    fn test_sandbox_command_missing_helper_is_inactive() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = ProjectPaths::from_dir(dir.path().to_path_buf());
        // No scripts/ directory exists; the probe must swallow the failure.
        assert_eq!(
            sandbox_command(&PathBuf::from("/nonexistent/runtime"), &paths),
            None
        );
    }

    #[test]
    fn test_check_build_status_swallows_failures() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = ProjectPaths::from_dir(dir.path().to_path_buf());
        // Must not panic or propagate anything.
        check_build_status(&PathBuf::from("/nonexistent/runtime"), &paths);
    }
}
