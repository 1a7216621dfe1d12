//! HTTP server module.
//!
//! Provides:
//! - Shared application context (config + archive store)
//! - warp route filters with CORS
//! - Request handlers and JSON error replies

pub mod handlers;
pub mod routes;

pub use routes::routes;

use crate::archive::ArchiveStore;
use crate::config::Config;

/// Shared state handed to every request handler.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub store: ArchiveStore,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: ArchiveStore::new(),
        }
    }
}
