//! JSON Lines (JSONL) table writer.
//!
//! One compact JSON object per line, suitable for streaming consumers and
//! line-oriented tooling.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::table::MessageTable;

/// Writes the table in JSONL format.
///
/// Each line is one complete row object:
/// ```jsonl
/// {"date":"2024-01-05T09:05:00","user":"Alice","message":"Hello", ...}
/// {"date":null,"user":"Bob","message":"Hi", ...}
/// ```
pub fn write_jsonl(table: &MessageTable, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for row in table {
        let line = serde_json::to_string(row)?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Renders the table to a JSONL string.
///
/// Same format as [`write_jsonl`], without touching the filesystem. The
/// result is empty for an empty table, otherwise newline-terminated.
pub fn to_jsonl_string(table: &MessageTable) -> Result<String> {
    let mut out = String::new();
    for row in table {
        out.push_str(&serde_json::to_string(row)?);
        out.push('\n');
    }
    Ok(out)
}
