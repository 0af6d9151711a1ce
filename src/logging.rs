//! Diagnostic logging for the binary.
//!
//! Library code logs through `tracing`; this installs the subscriber. Output
//! always goes to stderr so NDJSON on stdout stays clean.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Overrides the `-v` count when set, e.g. `TALENT_CALC_LOG=talent_calc=trace`
pub const LOG_ENV: &str = "TALENT_CALC_LOG";

pub fn setup_logging(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_env_var(LOG_ENV)
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(true)
        .try_init();

    tracing::debug!(verbosity, "logger initialized");
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
