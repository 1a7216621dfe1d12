//! Configuration module for roster-folders.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument parsing and merging
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, FoldersConfig, RosterConfig, ServerConfig};
pub use validation::validate_config;
