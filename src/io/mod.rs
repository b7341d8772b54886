/// Command-line driver
pub mod cli;
/// Compile-time limits and defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Starting word list parsing
pub mod input;
/// Log subscriber setup
pub mod logging;
/// Exploration progress display
pub mod progress;
