//! Structured log output on stderr

use tracing::Level;

/// Log level for a count of `-v` flags
pub const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global fmt subscriber writing to stderr
///
/// Returns false when a subscriber was already installed, which happens when
/// several runs share one process.
pub fn init_logging(verbosity: u8) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
