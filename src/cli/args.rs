//! Command-line argument definitions using clap.

use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::config::Config;

/// Roster folder generator web service.
#[derive(Parser, Debug)]
#[command(
    name = "roster-folders",
    version,
    about = "Serve a roster-to-assignment-folders web utility",
    long_about = "A small web service for instructors: upload a student roster spreadsheet,\n\
                  generate a unit folder with per-student assignment subfolders, and download\n\
                  the result as a zip archive."
)]
pub struct Args {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "ROSTER_FOLDERS_HOST")]
    pub host: Option<IpAddr>,

    /// Port to listen on.
    #[arg(short, long, env = "ROSTER_FOLDERS_PORT")]
    pub port: Option<u16>,

    /// Maximum roster upload size in bytes.
    #[arg(long)]
    pub max_upload_bytes: Option<u64>,

    /// Zero-based index of the student-name column in uploaded rosters.
    #[arg(long)]
    pub name_column: Option<usize>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server.host = host;
        }

        if let Some(port) = self.port {
            config.server.port = port;
        }

        if let Some(max) = self.max_upload_bytes {
            config.server.max_upload_bytes = max;
        }

        if let Some(column) = self.name_column {
            config.roster.name_column = column;
        }
    }
}
