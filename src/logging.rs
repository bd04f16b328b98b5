//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so query results on stdout stay machine readable.
//! `RUST_LOG` takes precedence over the `-v` count when set.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map CLI verbosity to a level: warn, then info, debug, trace.
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init_logging(verbosity: u8) {
    let level = level_from_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "pagestore={}",
            level.as_str().to_ascii_lowercase()
        ))
    });

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
