//! Configuration structures and loading logic.

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::IpAddr;
use std::path::Path;

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub roster: RosterConfig,

    #[serde(default)]
    pub folders: FoldersConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum accepted roster upload size in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

/// Roster parsing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Zero-based index of the student-name column.
    /// Defaults to 1 (column B of typical Edexcel exports).
    #[serde(default = "default_name_column")]
    pub name_column: usize,

    /// Whether the first row is a header row to skip.
    #[serde(default = "default_true")]
    pub skip_header: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            name_column: default_name_column(),
            skip_header: true,
        }
    }
}

/// Folder layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldersConfig {
    /// Subfolders created inside every student folder.
    #[serde(default = "default_subfolders")]
    pub subfolders: Vec<String>,

    /// Folder name used when a student name sanitizes to nothing.
    #[serde(default = "default_fallback_name")]
    pub fallback_name: String,
}

impl Default for FoldersConfig {
    fn default() -> Self {
        Self {
            subfolders: default_subfolders(),
            fallback_name: default_fallback_name(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}

fn default_port() -> u16 {
    5000
}

fn default_max_upload_bytes() -> u64 {
    10 * 1024 * 1024
}

fn default_name_column() -> usize {
    1
}

fn default_true() -> bool {
    true
}

fn default_subfolders() -> Vec<String> {
    vec!["Learner Work".to_string(), "Assignment Files".to_string()]
}

fn default_fallback_name() -> String {
    "unnamed_student".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.roster.name_column, 1);
        assert!(config.roster.skip_header);
        assert_eq!(
            config.folders.subfolders,
            vec!["Learner Work", "Assignment Files"]
        );
        assert_eq!(config.folders.fallback_name, "unnamed_student");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080

            [roster]
            name_column = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.roster.name_column, 0);
        assert_eq!(config.folders.subfolders.len(), 2);
    }
}
