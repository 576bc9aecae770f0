//! # Chatframe
//!
//! A Rust library for turning WhatsApp-style chat exports into a flat,
//! analysis-ready message table.
//!
//! ## Overview
//!
//! A chat export is one text blob where each entry starts with a timestamp
//! header like `1/5/24, 9:05 AM - `. Chatframe segments the blob at those
//! headers, splits each entry into sender and body, derives calendar and
//! hour-bucket columns, and drops system entries (group created, user added,
//! and the like). The result is a [`MessageTable`] with a fixed twelve-column
//! schema that loads straight into dataframe tooling.
//!
//! Data quality never aborts a parse: unparseable timestamps become null
//! date fields, entries without a sender prefix become system entries, and
//! empty input yields an empty table.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> chatframe::Result<()> {
//! use chatframe::prelude::*;
//!
//! let parser = ChatLogParser::new();
//! let table = parser.parse("chat_export.txt")?;
//!
//! println!("{} messages", table.len());
//! write_csv(&table, "chat_table.csv")?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```
//!
//! Parsing from a string works the same way:
//!
//! ```rust
//! use chatframe::ChatLogParser;
//!
//! let table = ChatLogParser::new()
//!     .parse_str("1/5/24, 9:05 AM - Alice: Hello there")?;
//!
//! assert_eq!(table.rows()[0].user, "Alice");
//! assert_eq!(table.rows()[0].day_name.as_deref(), Some("Friday"));
//! # Ok::<(), chatframe::ChatframeError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`ChatLogParser`], the parse pipeline
//! - [`record`] — [`ParsedMessage`] rows and the [`period_label`] bucket
//! - [`table`] — [`MessageTable`] and the canonical column order
//! - [`segment`] — timestamp grammar, whitespace normalization, sender split
//! - [`config`] — [`ParserConfig`] (strict segmentation mode)
//! - [`format`] — [`OutputFormat`](format::OutputFormat) selection
//! - [`output`] — CSV/JSON/JSONL writers (feature-gated)
//! - [`error`] — [`ChatframeError`] and the crate [`Result`]
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod parser;
pub mod record;
pub mod segment;
pub mod table;

// Re-export the main types at the crate root for convenience
pub use config::ParserConfig;
pub use error::{ChatframeError, Result};
pub use parser::ChatLogParser;
pub use record::{GROUP_NOTIFICATION, ParsedMessage, period_label};
pub use table::MessageTable;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatframe::prelude::*;
/// ```
pub mod prelude {
    // Parse pipeline
    pub use crate::parser::ChatLogParser;

    // Rows and table
    pub use crate::record::{GROUP_NOTIFICATION, ParsedMessage, period_label};
    pub use crate::table::MessageTable;

    // Configuration
    pub use crate::config::ParserConfig;

    // Error types
    pub use crate::error::{ChatframeError, Result};

    // Format selection and writers
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv_string, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json_string, to_jsonl_string, write_json, write_jsonl};
}
