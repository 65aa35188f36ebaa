//! Launch configuration: runtime arguments and child environment.
//!
//! All environment reads happen in [`EnvSnapshot::capture`] so the assembly
//! logic is pure and testable without touching the real process environment.
//! A fresh snapshot is taken on every restart iteration: an operator changing
//! `DEBUG`, `SANDBOX`, or `DEBUG_PORT` between restarts changes subsequent
//! launches.

use std::collections::HashMap;
use std::path::Path;

use vigil_protocol::{DEFAULT_DEBUG_PORT, env};

/// Process-wide toggles, read once per launch cycle.
#[derive(Debug, Clone)]
pub struct EnvSnapshot {
    pub debug: bool,
    pub sandbox_marker: bool,
    pub debug_port: String,
}

impl EnvSnapshot {
    /// Read the toggles from the real process environment.
    pub fn capture() -> Self {
        Self {
            debug: env_flag(env::DEBUG),
            sandbox_marker: env_flag(env::SANDBOX),
            debug_port: std::env::var(env::DEBUG_PORT)
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_DEBUG_PORT.to_string()),
        }
    }
}

/// A variable set to a non-empty value counts as enabled; empty is unset.
fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| !v.is_empty()).unwrap_or(false)
}

/// Everything needed to assemble one launch: rebuilt from scratch each cycle,
/// never cached across restarts.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub debug_enabled: bool,
    pub debug_port: String,
    pub sandbox_active: bool,
    pub sandbox_command: Option<String>,
    pub version: String,
    pub user_args: Vec<String>,
}

impl LaunchConfig {
    pub fn new(
        snapshot: &EnvSnapshot,
        sandbox_command: Option<String>,
        version: String,
        user_args: Vec<String>,
    ) -> Self {
        // A probe hit always implies sandbox mode; the SANDBOX marker covers
        // the case where the probe helper is unavailable inside the sandbox.
        let sandbox_active = snapshot.sandbox_marker || sandbox_command.is_some();
        Self {
            debug_enabled: snapshot.debug,
            debug_port: snapshot.debug_port.clone(),
            sandbox_active,
            sandbox_command,
            version,
            user_args,
        }
    }

    /// Ordered runtime arguments: inspector flag (when debugging), then the
    /// entry point, then user args verbatim.
    ///
    /// The two debug branches differ only in bind address/port. Sandboxed
    /// processes are not reachable on loopback from the host, so the sandbox
    /// branch binds all interfaces on an explicit port.
    pub fn runtime_args(&self, entry_point: &Path) -> Vec<String> {
        let mut args = Vec::new();
        if self.debug_enabled {
            if self.sandbox_active {
                args.push(format!("--inspect-brk=0.0.0.0:{}", self.debug_port));
            } else {
                args.push("--inspect-brk".to_string());
            }
        }
        args.push(entry_point.to_string_lossy().into_owned());
        args.extend(self.user_args.iter().cloned());
        args
    }

    /// The child environment: a full copy of the parent environment with the
    /// contract markers overlaid. Overrides always win over inherited values.
    /// The parent's real environment is never mutated.
    pub fn child_env(&self) -> HashMap<String, String> {
        let mut vars: HashMap<String, String> = std::env::vars().collect();
        vars.insert(env::CLI_VERSION.to_string(), self.version.clone());
        vars.insert(env::DEV.to_string(), "true".to_string());
        if self.debug_enabled {
            // Without this the debugger pauses on the supervisor's relaunch
            // of the child rather than the child itself.
            vars.insert(env::NO_RELAUNCH.to_string(), "true".to_string());
        }
        vars
    }
}
