//! Input/output operations and error handling

/// Command-line interface and multi-monitor runner
pub mod cli;
/// Compile-time defaults and limits
pub mod configuration;
/// Error types and pass context
pub mod error;
/// PNG export
pub mod image;
/// Progress display across passes
pub mod progress;
/// Monitor descriptions and TOML settings
pub mod settings;
