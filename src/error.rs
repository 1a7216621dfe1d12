//! Error types for the roster-folders service.

use thiserror::Error;
use warp::http::StatusCode;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Request errors
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Folder not found: {0}")]
    ArchiveNotFound(String),

    // Roster errors
    #[error("Roster error: {0}")]
    Roster(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    // Archive errors
    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 3;
    pub const SERVER_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}

impl Error {
    /// HTTP status for this error when it reaches the request boundary.
    ///
    /// The surface is deliberately coarse: missing input, unknown archive,
    /// everything else is a processing failure.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::MissingInput(_) => StatusCode::BAD_REQUEST,
            Error::ArchiveNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            Error::MissingInput("unit_title".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::ArchiveNotFound("abc".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::Roster("bad sheet".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
