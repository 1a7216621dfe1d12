//! Roster Folders - assignment folder generator for instructors.
//!
//! This library turns a student roster spreadsheet into a downloadable zip
//! archive of per-student assignment folders.
//!
//! # Features
//!
//! - Extract the student-name column from an uploaded xlsx/xls/ods roster
//! - Build a unit folder with two fixed subfolders per student
//! - Compress the folder tree into a single zip archive
//! - Serve the archive over HTTP by a generated identifier
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use roster_folders::{AppContext, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let ctx = Arc::new(AppContext::new(config));
//!     let routes = roster_folders::server::routes(ctx);
//!     warp::serve(routes).run(([127, 0, 0, 1], 5000)).await;
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod roster;
pub mod server;

// Re-exports for convenience
pub use archive::{ArchiveRecord, ArchiveStore};
pub use config::{validate_config, Config, FoldersConfig, RosterConfig, ServerConfig};
pub use error::{Error, Result};
pub use server::AppContext;
