//! Shared process contract between the vigil supervisor and the CLI it runs.
//!
//! The supervisor and the CLI evolve independently, so every value both sides
//! must agree on lives here: the reserved restart exit code and the names of
//! the environment variables that cross the process boundary. Neither side
//! may hardcode these as literals.

/// Exit code the CLI uses to signal that the user cleared their
/// authentication method. The supervisor absorbs this code and relaunches
/// the CLI instead of propagating it as a failure.
pub const EXIT_CODE_AUTH_CLEARED: i32 = 42;

/// Inspector port used when `DEBUG_PORT` is unset.
pub const DEFAULT_DEBUG_PORT: &str = "9229";

/// Environment variable names crossing the supervisor/child boundary.
pub mod env {
    /// Consumed by the supervisor: enables debug mode (break-on-start
    /// inspector) when set to a non-empty value.
    pub const DEBUG: &str = "DEBUG";

    /// Consumed by the supervisor: marks that the process tree runs inside
    /// a sandbox, where loopback is not reachable from the host.
    pub const SANDBOX: &str = "SANDBOX";

    /// Consumed by the supervisor: overrides the inspector port used in
    /// sandbox mode.
    pub const DEBUG_PORT: &str = "DEBUG_PORT";

    /// Set for the child: the version string from the project manifest.
    pub const CLI_VERSION: &str = "CLI_VERSION";

    /// Set for the child: marks a development-tree launch.
    pub const DEV: &str = "DEV";

    /// Set for the child when debugging: tells the CLI it already runs under
    /// a debugger-attached supervisor and must not spawn its own relaunch.
    pub const NO_RELAUNCH: &str = "VIGIL_NO_RELAUNCH";
}

#[cfg(test)]
mod tests {
    use super::*;

    // The CLI's own auth-cleared exit path must use this exact value.
    // Changing it is a breaking protocol change for both components.
    #[test]
    fn test_auth_cleared_exit_code_is_stable() {
        assert_eq!(EXIT_CODE_AUTH_CLEARED, 42);
    }

    #[test]
    fn test_default_debug_port_parses_as_port() {
        assert!(DEFAULT_DEBUG_PORT.parse::<u16>().is_ok());
    }
}
