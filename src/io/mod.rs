//! Adapters around the core: configuration, errors, images and the CLI

/// Command-line interface and batch file processing
pub mod cli;
/// Algorithm constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Text rendering of fields
pub mod glyphs;
/// PNG loading and export
pub mod image;
/// Starting fields from prefill images
pub mod prefill;
/// Terminal progress display
pub mod progress;
/// GIF capture of sweeps
pub mod visualization;
