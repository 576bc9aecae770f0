//! JSON table writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::table::MessageTable;

/// Writes the table to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {
///     "date": "2024-01-05T09:05:00",
///     "user": "Alice",
///     "message": "Hello there",
///     ...
///   }
/// ]
/// ```
///
/// Null fields appear as explicit `null` so every object carries the full
/// column set.
pub fn write_json(table: &MessageTable, path: impl AsRef<Path>) -> Result<()> {
    let json = to_json_string(table)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Renders the table to a pretty-printed JSON array string.
///
/// Same format as [`write_json`], without touching the filesystem.
pub fn to_json_string(table: &MessageTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}
