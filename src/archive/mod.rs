//! Archive module.
//!
//! Provides:
//! - Zip serialization of a generated folder tree
//! - In-memory registry of generated archives

pub mod store;
pub mod zipper;

pub use store::{ArchiveRecord, ArchiveStore};
pub use zipper::write_zip;
