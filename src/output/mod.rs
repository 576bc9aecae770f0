//! Table writers.
//!
//! One writer pair per format, all emitting the same twelve columns in
//! [`MessageTable::COLUMNS`](crate::MessageTable::COLUMNS) order:
//! - [`write_csv`] / [`to_csv_string`] - flat file with header row, requires
//!   the `csv-output` feature
//! - [`write_json`] / [`to_json_string`] - pretty-printed array, requires the
//!   `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl_string`] - one object per line, requires
//!   the `json-output` feature
//!
//! Null fields render as empty cells in CSV and explicit `null` in the JSON
//! variants; the `period` column is always a string, `"nan-nan"` included.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatframe::Result<()> {
//! use chatframe::ChatLogParser;
//! use chatframe::output::{to_csv_string, write_csv, write_json, write_jsonl};
//!
//! let table = ChatLogParser::new().parse("chat_export.txt")?;
//!
//! write_csv(&table, "table.csv")?;
//! write_json(&table, "table.json")?;
//! write_jsonl(&table, "table.jsonl")?;
//!
//! let csv = to_csv_string(&table)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv_string, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json_string, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl_string, write_jsonl};
