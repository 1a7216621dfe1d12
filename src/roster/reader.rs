//! Spreadsheet reading and name-column extraction.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use tracing::debug;

use crate::config::RosterConfig;
use crate::error::{Error, Result};

/// Extract student names from an uploaded roster spreadsheet.
///
/// The workbook format is auto-detected from the bytes (xlsx, xls and ods
/// all work; the filename is only used for error messages). Names come from
/// the configured column of the first worksheet. The header row is skipped
/// when configured, and empty or whitespace-only cells are dropped.
pub fn extract_names(data: &[u8], filename: &str, roster: &RosterConfig) -> Result<Vec<String>> {
    let cursor = Cursor::new(data);
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| Error::Roster(format!("Could not read '{}': {}", filename, e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Roster(format!("'{}' has no worksheets", filename)))??;

    if range.width() <= roster.name_column {
        return Err(Error::Roster(format!(
            "'{}' has {} column(s), name column {} not present",
            filename,
            range.width(),
            roster.name_column + 1
        )));
    }

    let skip = usize::from(roster.skip_header);
    let names: Vec<String> = range
        .rows()
        .skip(skip)
        .filter_map(|row| cell_to_name(row.get(roster.name_column)))
        .collect();

    debug!(count = names.len(), file = filename, "extracted roster names");

    Ok(names)
}

/// Render a cell as a name, dropping empty and blank values.
fn cell_to_name(cell: Option<&Data>) -> Option<String> {
    match cell {
        None | Some(Data::Empty) => None,
        Some(Data::String(s)) if s.trim().is_empty() => None,
        Some(Data::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}
