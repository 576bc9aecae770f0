//! Output format selection.
//!
//! Library-first format types with no CLI dependency: the binary layers its
//! own `clap` surface on top of [`OutputFormat`], and embedders can use the
//! enum directly.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatframe::Result<()> {
//! use chatframe::format::{OutputFormat, to_format_string};
//! use chatframe::ChatLogParser;
//!
//! let table = ChatLogParser::new().parse_str("1/5/24, 9:05 AM - Alice: Hello")?;
//!
//! let csv = to_format_string(&table, OutputFormat::Csv)?;
//! assert!(csv.starts_with("date,user,message"));
//!
//! let format = OutputFormat::from_path("table.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use std::ffi::OsStr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatframeError, Result};
use crate::table::MessageTable;

/// Serialization format for the parsed table.
///
/// - [`Csv`](OutputFormat::Csv) - Flat file, loads directly into dataframe
///   tooling (default).
/// - [`Json`](OutputFormat::Json) - Structured array, good for APIs.
/// - [`Jsonl`](OutputFormat::Jsonl) - One JSON object per line, good for
///   streaming consumers. Also known as NDJSON.
///
/// # Example
///
/// ```rust
/// use chatframe::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,

    /// JSON array of row objects.
    Json,

    /// JSON Lines, one row object per line.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatframe::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all accepted format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Detects format from a file path's extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatframe::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("table.jsonl").unwrap();
    /// assert_eq!(format, OutputFormat::Jsonl);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ChatframeError::InvalidFormat`] for unrecognized extensions.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(OsStr::to_str)
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatframeError::invalid_format(
                "output",
                format!("unknown file extension '.{ext}'; expected one of: csv, json, jsonl"),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ChatframeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatframeError::invalid_format(
                "output",
                format!(
                    "unknown format '{s}'; expected one of: {}",
                    OutputFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Writes the table to a file in the given format.
///
/// Convenience dispatcher over the per-format writers.
///
/// # Errors
///
/// Returns an error if the feature for the format is not enabled or the file
/// cannot be written.
#[allow(unused_variables)]
pub fn write_to_format(
    table: &MessageTable,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::write_csv(table, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::write_json(table, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::write_jsonl(table, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders the table to a string in the given format.
///
/// # Errors
///
/// Returns an error if the feature for the format is not enabled or
/// serialization fails.
#[allow(unused_variables)]
pub fn to_format_string(table: &MessageTable, format: OutputFormat) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::to_csv_string(table),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::to_json_string(table),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::to_jsonl_string(table),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

#[allow(dead_code)]
fn feature_disabled(format: OutputFormat) -> ChatframeError {
    let feature = match format {
        OutputFormat::Csv => "csv-output",
        OutputFormat::Json | OutputFormat::Jsonl => "json-output",
    };
    ChatframeError::invalid_format(
        "output",
        format!("format {format} requires the '{feature}' feature"),
    )
}
