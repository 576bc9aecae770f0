//! CSV table writer.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::Result;
use crate::record::ParsedMessage;
use crate::table::MessageTable;

/// Writes the table to a CSV file.
///
/// # Format
/// - Delimiter: `,`
/// - Header: the twelve [`MessageTable::COLUMNS`] names
/// - `date` rendered as `%Y-%m-%d %H:%M:%S`, `only_date` as `%Y-%m-%d`
/// - Null fields rendered as empty cells
/// - Encoding: UTF-8
pub fn write_csv(table: &MessageTable, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    write_table(&mut writer, table)
}

/// Renders the table to a CSV string.
///
/// Same format as [`write_csv`], without touching the filesystem.
pub fn to_csv_string(table: &MessageTable) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        write_table(&mut writer, table)?;
    }
    String::from_utf8(buf)
        .map_err(|e| crate::error::ChatframeError::invalid_format("csv", e.to_string()))
}

fn write_table<W: io::Write>(writer: &mut csv::Writer<W>, table: &MessageTable) -> Result<()> {
    writer.write_record(MessageTable::COLUMNS)?;
    for row in table {
        writer.write_record(build_record(row))?;
    }
    writer.flush()?;
    Ok(())
}

/// Builds the CSV record for one row, in column order.
fn build_record(row: &ParsedMessage) -> Vec<String> {
    vec![
        row.date
            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
        row.user.clone(),
        row.message.clone(),
        row.only_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        row.year.map(|v| v.to_string()).unwrap_or_default(),
        row.month_num.map(|v| v.to_string()).unwrap_or_default(),
        row.month.clone().unwrap_or_default(),
        row.day.map(|v| v.to_string()).unwrap_or_default(),
        row.day_name.clone().unwrap_or_default(),
        row.hour.map(|v| v.to_string()).unwrap_or_default(),
        row.minute.map(|v| v.to_string()).unwrap_or_default(),
        row.period.clone(),
    ]
}
