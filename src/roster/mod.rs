//! Roster module.
//!
//! Reads an uploaded spreadsheet and extracts the student-name column.

pub mod reader;

pub use reader::extract_names;
