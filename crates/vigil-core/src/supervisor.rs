//! The spawn/wait/restart loop.
//!
//! The child owns the terminal: stdio is fully inherited and the supervisor
//! waits indefinitely, one child at a time. The only recovered outcome is the
//! auth-cleared sentinel from [`vigil_protocol`]; every other termination is
//! mirrored outward unchanged. Restarts are unbounded: each one represents a
//! deliberate user action, not a fault. The loop is iterative, so a
//! long-lived session never grows the call stack.

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use tracing::{debug, info};

use crate::errors::SupervisorError;
use crate::launch::{EnvSnapshot, LaunchConfig};
use crate::manifest;
use crate::paths::ProjectPaths;
use crate::probe;
use vigil_protocol::EXIT_CODE_AUTH_CLEARED;

/// Runtime that executes the CLI entry point.
const RUNTIME: &str = "node";

/// A fully resolved spawn request, produced once per launch cycle.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub program: String,
    pub args: Vec<String>,
    pub env: HashMap<String, String>,
    pub cwd: PathBuf,
}

/// How a child terminated. Exactly one of `code` or `signal` is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    pub code: Option<i32>,
    pub signal: Option<i32>,
}

impl ExitOutcome {
    fn from_status(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = std::os::unix::process::ExitStatusExt::signal(&status);
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
        }
    }

    /// True only for a normal exit with the auth-cleared sentinel.
    pub fn is_restart(&self) -> bool {
        self.code == Some(EXIT_CODE_AUTH_CLEARED)
    }

    /// Exit code the supervisor mirrors to its own caller: the child's code,
    /// or the conventional `128 + signal` for signal termination.
    pub fn propagation_code(&self) -> i32 {
        if let Some(code) = self.code {
            code
        } else if let Some(signal) = self.signal {
            128 + signal
        } else {
            1
        }
    }
}

/// Run the supervisor loop against the real project: probes, manifest, and
/// environment snapshot are redone from scratch on every iteration.
pub fn run(paths: &ProjectPaths, user_args: &[String]) -> Result<i32, SupervisorError> {
    supervise_with(|| build_launch_plan(paths, user_args))
}

/// The relaunch loop itself, decoupled from probing so tests can drive it
/// with synthetic children.
///
/// Each iteration asks for a fresh plan, spawns it, and waits. A sentinel
/// exit prints the restart notice and loops; anything else yields the code to
/// mirror. Plan and spawn failures are fatal: there is no child exit code to
/// inspect, so no restart is attempted.
pub fn supervise_with<F>(mut next_plan: F) -> Result<i32, SupervisorError>
where
    F: FnMut() -> Result<LaunchPlan, SupervisorError>,
{
    loop {
        let plan = next_plan()?;
        let outcome = spawn_and_wait(&plan)?;

        if outcome.is_restart() {
            info!(
                event = "supervisor.restart_requested",
                code = EXIT_CODE_AUTH_CLEARED
            );
            println!("\nAuth method cleared. Restarting CLI for new authentication...\n");
            continue;
        }

        debug!(
            event = "supervisor.loop_completed",
            code = ?outcome.code,
            signal = ?outcome.signal
        );
        return Ok(outcome.propagation_code());
    }
}

fn build_launch_plan(
    paths: &ProjectPaths,
    user_args: &[String],
) -> Result<LaunchPlan, SupervisorError> {
    let runtime = which::which(RUNTIME).map_err(|_| SupervisorError::RuntimeNotFound {
        runtime: RUNTIME.to_string(),
    })?;

    // Probes run strictly sequentially before the spawn, both blocking.
    probe::check_build_status(&runtime, paths);
    let sandbox_command = probe::sandbox_command(&runtime, paths);

    let snapshot = EnvSnapshot::capture();
    let version = manifest::read_version(paths)?;
    let config = LaunchConfig::new(&snapshot, sandbox_command, version, user_args.to_vec());

    info!(
        event = "supervisor.launch_planned",
        debug_enabled = config.debug_enabled,
        sandbox_active = config.sandbox_active,
        version = %config.version
    );

    Ok(LaunchPlan {
        program: runtime.to_string_lossy().into_owned(),
        args: config.runtime_args(&paths.cli_entry_point()),
        env: config.child_env(),
        cwd: paths.root().to_path_buf(),
    })
}

/// Spawn one child with inherited stdio and block until it terminates.
fn spawn_and_wait(plan: &LaunchPlan) -> Result<ExitOutcome, SupervisorError> {
    debug!(
        event = "supervisor.child_spawn_started",
        program = %plan.program,
        args = ?plan.args,
        cwd = %plan.cwd.display()
    );

    let mut child = command_for(plan)
        .spawn()
        .map_err(|source| SupervisorError::SpawnFailed {
            program: plan.program.clone(),
            source,
        })?;

    debug!(event = "supervisor.child_spawned", pid = child.id());

    let status = child
        .wait()
        .map_err(|source| SupervisorError::WaitFailed { source })?;
    let outcome = ExitOutcome::from_status(status);

    debug!(
        event = "supervisor.child_exited",
        code = ?outcome.code,
        signal = ?outcome.signal
    );
    Ok(outcome)
}

fn command_for(plan: &LaunchPlan) -> Command {
    let mut cmd = Command::new(&plan.program);
    // env_clear + envs: the plan's map is the complete child environment,
    // already a parent copy with the contract markers overlaid.
    cmd.args(&plan.args)
        .env_clear()
        .envs(&plan.env)
        .current_dir(&plan.cwd);
    cmd
}
