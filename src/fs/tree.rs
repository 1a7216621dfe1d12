//! Assignment folder tree generation.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::FoldersConfig;
use crate::error::Result;
use crate::fs::naming::sanitize_name;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Build the unit folder tree under `root`.
///
/// Creates `root/<unit>/<student>/<subfolder>` for every student name and
/// every configured subfolder, sanitizing each component. Duplicate names
/// after sanitization collapse into a single folder.
///
/// Returns the path of the unit folder.
pub fn build_tree(
    root: &Path,
    unit_title: &str,
    student_names: &[String],
    folders: &FoldersConfig,
) -> Result<PathBuf> {
    let unit_name = sanitize_name(unit_title, "unit");
    let unit_path = root.join(&unit_name);
    ensure_dir(&unit_path)?;

    for name in student_names {
        let safe_name = sanitize_name(name, &folders.fallback_name);
        let student_path = unit_path.join(&safe_name);

        for subfolder in &folders.subfolders {
            ensure_dir(&student_path.join(subfolder))?;
        }

        debug!(student = %safe_name, "created student folders");
    }

    Ok(unit_path)
}
