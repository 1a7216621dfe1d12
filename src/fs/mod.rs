//! Filesystem module.
//!
//! Provides:
//! - Student and unit name sanitization
//! - Assignment folder tree generation

pub mod naming;
pub mod tree;

pub use naming::sanitize_name;
pub use tree::{build_tree, ensure_dir};
