//! Configuration management
//!
//! Settings for the chain and the CLI: which digest encoding new chains use
//! and how verbose logging is. Defaults are overridden by environment
//! variables, which are overridden by an optional TOML file.

pub mod settings;

pub use settings::{Config, FileSettings, GLOBAL_CONFIG};
