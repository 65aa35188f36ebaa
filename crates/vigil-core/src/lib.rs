//! vigil-core: supervisor logic for the vigil dev relauncher.
//!
//! vigil launches the CLI from a development tree, wires up its debug and
//! sandbox environment, and relaunches it whenever the child exits with the
//! reserved auth-cleared code from [`vigil_protocol`].
//!
//! # Main Entry Points
//!
//! - [`supervisor`] - Spawn, wait, restart-on-sentinel loop
//! - [`launch`] - Launch configuration, runtime args, child environment
//! - [`probe`] - Build-status and sandbox collaborator invocations
//! - [`manifest`] - Version manifest reading

pub mod errors;
pub mod launch;
pub mod logging;
pub mod manifest;
pub mod paths;
pub mod probe;
pub mod supervisor;

pub use errors::SupervisorError;
pub use launch::{EnvSnapshot, LaunchConfig};
pub use logging::init_logging;
pub use paths::ProjectPaths;
pub use supervisor::{ExitOutcome, LaunchPlan, run, supervise_with};
