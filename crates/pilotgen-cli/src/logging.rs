//! Tracing setup for the CLI.
//!
//! The filter comes from `-v`/`-vv` when given, otherwise from
//! `PILOTGEN_LOG` (falling back to `RUST_LOG`), otherwise `warn`.
//! Log lines go to stderr so they never mix with command output.
//!
//! ```bash
//! PILOTGEN_LOG=debug pilotgen defs .
//! PILOTGEN_LOG="pilotgen::resolve=debug" pilotgen check parts.json
//! ```

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PILOTGEN_LOG";

/// Filter directives for a verbosity count and the environment value.
pub(crate) fn directives(verbosity: u8, env: Option<String>) -> String {
    match verbosity {
        0 => env.unwrap_or_else(|| "warn".to_string()),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

fn env_directives() -> Option<String> {
    std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
}

/// Initialise the global tracing subscriber.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder().parse_lossy(directives(verbosity, env_directives()));

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
