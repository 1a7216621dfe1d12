//! In-memory registry of generated archives.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use tempfile::TempDir;
use uuid::Uuid;

/// A generated archive awaiting download.
///
/// The temporary working directory is held by the record so the zip stays
/// on disk for as long as the record lives. Records are never evicted;
/// their storage is reclaimed on process exit.
#[derive(Debug)]
pub struct ArchiveRecord {
    pub zip_path: PathBuf,
    pub download_name: String,
    pub created_at: DateTime<Utc>,
    _workdir: TempDir,
}

impl ArchiveRecord {
    /// Create a record for a zip living inside `workdir`.
    pub fn new(workdir: TempDir, zip_path: PathBuf, download_name: String) -> Self {
        Self {
            zip_path,
            download_name,
            created_at: Utc::now(),
            _workdir: workdir,
        }
    }
}

/// Registry of archive identifier -> archive record.
///
/// Shared between request handlers behind an `RwLock`; there are no further
/// concurrency guarantees by design.
#[derive(Debug, Default)]
pub struct ArchiveStore {
    inner: RwLock<HashMap<String, ArchiveRecord>>,
}

impl ArchiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an archive and return its generated identifier.
    pub fn insert(&self, record: ArchiveRecord) -> String {
        let id = Uuid::new_v4().to_string();
        self.inner.write().unwrap().insert(id.clone(), record);
        id
    }

    /// Look up the zip path and download name for an identifier.
    pub fn get(&self, id: &str) -> Option<(PathBuf, String)> {
        self.inner
            .read()
            .unwrap()
            .get(id)
            .map(|r| (r.zip_path.clone(), r.download_name.clone()))
    }

    /// Number of registered archives.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> ArchiveRecord {
        let workdir = tempfile::tempdir().unwrap();
        let zip_path = workdir.path().join("Unit 1.zip");
        std::fs::write(&zip_path, b"zip bytes").unwrap();
        ArchiveRecord::new(workdir, zip_path, "Unit 1.zip".to_string())
    }

    #[test]
    fn test_insert_and_get() {
        let store = ArchiveStore::new();
        let record = make_record();
        let expected_path = record.zip_path.clone();

        let id = store.insert(record);
        let (path, name) = store.get(&id).unwrap();
        assert_eq!(path, expected_path);
        assert_eq!(name, "Unit 1.zip");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_unknown_id() {
        let store = ArchiveStore::new();
        assert!(store.get("no-such-id").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_record_keeps_zip_alive() {
        let store = ArchiveStore::new();
        let id = store.insert(make_record());

        let (path, _) = store.get(&id).unwrap();
        assert!(path.exists());
        // Still there on a second lookup; records are never evicted
        let (path, _) = store.get(&id).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_identifiers_are_unique() {
        let store = ArchiveStore::new();
        let a = store.insert(make_record());
        let b = store.insert(make_record());
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }
}
