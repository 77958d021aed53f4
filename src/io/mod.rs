/// Command-line interface and shuffle orchestration
pub mod cli;
/// Constants and configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of finished tilings
pub mod image;
/// Terminal progress reporting
pub mod progress;
