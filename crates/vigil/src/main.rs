use std::env;
use std::process;

use vigil_core::{ProjectPaths, SupervisorError, init_logging, supervisor};

/// Opt-in supervisor logging. The child owns the terminal, so vigil stays
/// silent unless this is set.
const LOG_ENV: &str = "VIGIL_LOG";

fn main() {
    let quiet = env::var(LOG_ENV).is_err();
    init_logging(quiet);

    // Everything after the program name is passed to the child verbatim.
    let user_args: Vec<String> = env::args().skip(1).collect();

    let exit_code = match run(&user_args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("vigil: {e}");
            tracing::error!(event = "supervisor.run_failed", error = %e);
            1
        }
    };
    process::exit(exit_code);
}

fn run(user_args: &[String]) -> Result<i32, SupervisorError> {
    let paths = ProjectPaths::resolve()?;
    supervisor::run(&paths, user_args)
}
