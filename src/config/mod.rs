//! Startup configuration
//!
//! Settings come from an optional JSON file and are overridden by command-line
//! flags (each with an environment variable fallback). Missing input file or
//! column selection is fatal, but only for the commands that need them.

pub mod app;
pub mod settings;

pub use app::{AppConfig, Overrides};
pub use settings::{LOCAL_CONFIG_FILENAME, Settings};
