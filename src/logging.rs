//! Diagnostic tracing, written to stderr so command output stays clean.

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding a tracing filter, e.g. `sitecrew=debug`.
pub const LOG_ENV: &str = "SITECREW_LOG";

pub fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("sitecrew=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("sitecrew=warn"))
    };

    // a second init (e.g. from tests) is harmless
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
