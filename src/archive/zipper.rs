//! Zip serialization of a folder tree.

use std::fs::File;
use std::io;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};

/// Walk `tree_root` and serialize it into a deflate-compressed zip at
/// `zip_path`.
///
/// Entry names are relative to the parent of `tree_root`, so the tree root
/// itself is the top-level entry of the archive. Empty directories are
/// written as explicit directory entries; regular files are written with
/// their contents.
pub fn write_zip(tree_root: &Path, zip_path: &Path) -> Result<()> {
    let base = tree_root.parent().unwrap_or(tree_root);
    let file = File::create(zip_path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    add_directory_contents(&mut writer, tree_root, base, options)?;

    writer.finish()?;
    Ok(())
}

fn add_directory_contents(
    writer: &mut ZipWriter<File>,
    dir: &Path,
    base: &Path,
    options: SimpleFileOptions,
) -> Result<()> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)?.collect::<io::Result<_>>()?;
    entries.sort_by_key(|e| e.file_name());

    if entries.is_empty() {
        writer.add_directory(entry_name(dir, base)?, options)?;
        return Ok(());
    }

    for entry in entries {
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            add_directory_contents(writer, &path, base, options)?;
        } else {
            writer.start_file(entry_name(&path, base)?, options)?;
            let mut file = File::open(&path)?;
            io::copy(&mut file, writer)?;
        }
    }

    Ok(())
}

/// Zip entry name for a path, relative to `base`, with forward slashes.
fn entry_name(path: &Path, base: &Path) -> Result<String> {
    let rel = path
        .strip_prefix(base)
        .map_err(|_| Error::Archive(format!("'{}' is outside the tree", path.display())))?;

    let parts: Vec<&str> = rel
        .components()
        .map(|c| {
            c.as_os_str()
                .to_str()
                .ok_or_else(|| Error::Archive(format!("Non-UTF-8 path: {}", path.display())))
        })
        .collect::<Result<_>>()?;

    Ok(parts.join("/"))
}
