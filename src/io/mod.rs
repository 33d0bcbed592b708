/// Command-line interface
pub mod cli;
/// Engine constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Tile and motif text parsing
pub mod parse;
/// Search progress display
pub mod progress;
