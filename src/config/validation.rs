//! Configuration validation logic.

use crate::config::Config;
use crate::error::{Error, Result};

/// Highest name-column index accepted before it is almost certainly a typo.
const MAX_NAME_COLUMN: usize = 255;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_name_column(config.roster.name_column)?;
    validate_subfolders(&config.folders.subfolders)?;
    validate_fallback_name(&config.folders.fallback_name)?;
    validate_max_upload(config.server.max_upload_bytes)?;

    Ok(())
}

fn validate_name_column(column: usize) -> Result<()> {
    if column > MAX_NAME_COLUMN {
        return Err(Error::ConfigValidation {
            field: "roster.name_column".to_string(),
            message: format!("Column index {} exceeds maximum {}", column, MAX_NAME_COLUMN),
        });
    }
    Ok(())
}

fn validate_subfolders(subfolders: &[String]) -> Result<()> {
    if subfolders.is_empty() {
        return Err(Error::ConfigValidation {
            field: "folders.subfolders".to_string(),
            message: "At least one subfolder is required".to_string(),
        });
    }

    for name in subfolders {
        if name.trim().is_empty() {
            return Err(Error::ConfigValidation {
                field: "folders.subfolders".to_string(),
                message: "Subfolder names must not be blank".to_string(),
            });
        }
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(Error::ConfigValidation {
                field: "folders.subfolders".to_string(),
                message: format!("Subfolder name '{}' contains path components", name),
            });
        }
    }

    Ok(())
}

fn validate_fallback_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "folders.fallback_name".to_string(),
            message: "Fallback name must not be blank".to_string(),
        });
    }
    Ok(())
}

fn validate_max_upload(bytes: u64) -> Result<()> {
    if bytes == 0 {
        return Err(Error::ConfigValidation {
            field: "server.max_upload_bytes".to_string(),
            message: "Upload limit must be greater than zero".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_subfolders_rejected() {
        let mut config = Config::default();
        config.folders.subfolders.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_subfolder_with_separator_rejected() {
        let mut config = Config::default();
        config.folders.subfolders = vec!["Work/Files".to_string()];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_blank_fallback_rejected() {
        let mut config = Config::default();
        config.folders.fallback_name = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_upload_limit_rejected() {
        let mut config = Config::default();
        config.server.max_upload_bytes = 0;
        assert!(validate_config(&config).is_err());
    }
}
