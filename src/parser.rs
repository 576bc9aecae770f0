//! Chat export parser.
//!
//! [`ChatLogParser`] turns one raw export blob into a [`MessageTable`] in a
//! single synchronous pass:
//!
//! 1. Normalize whitespace variants (narrow/regular no-break space → space).
//! 2. Segment at timestamp boundaries into (token, chunk) pairs.
//! 3. Parse each token against the fixed format; failures become null dates.
//! 4. Split each chunk at the first `": "` into sender and body, falling
//!    back to the `group_notification` sentinel.
//! 5. Derive the calendar and hour-bucket columns.
//! 6. Drop system entries from the final table.
//!
//! The parser holds no mutable state; one instance can serve any number of
//! calls, including concurrent ones on separate inputs.
//!
//! # Example
//!
//! ```rust
//! use chatframe::ChatLogParser;
//!
//! let parser = ChatLogParser::new();
//! let table = parser.parse_str("1/5/24, 9:05 AM - Alice: Hello there")?;
//!
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.rows()[0].user, "Alice");
//! assert_eq!(table.rows()[0].period, "9-10");
//! # Ok::<(), chatframe::ChatframeError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::ParserConfig;
use crate::error::Result;
use crate::record::{GROUP_NOTIFICATION, ParsedMessage};
use crate::segment::{Segmenter, normalize_whitespace, parse_timestamp, split_sender};
use crate::table::MessageTable;

/// Parser for timestamp-delimited chat exports.
///
/// Owns the compiled boundary grammar and a [`ParserConfig`]; construction is
/// the only place a regex is compiled.
///
/// # Example
///
/// ```rust,no_run
/// use chatframe::ChatLogParser;
///
/// let parser = ChatLogParser::new();
/// let table = parser.parse("chat_export.txt")?;
/// println!("{} messages", table.len());
/// # Ok::<(), chatframe::ChatframeError>(())
/// ```
pub struct ChatLogParser {
    config: ParserConfig,
    segmenter: Segmenter,
}

impl ChatLogParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            segmenter: Segmenter::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads an export file and parses it.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a strict-mode
    /// segmentation error; data-quality problems inside the export never
    /// fail.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<MessageTable> {
        let raw = fs::read_to_string(path)?;
        self.parse_str(&raw)
    }

    /// Parses export text into the final, filtered message table.
    ///
    /// System entries (`group_notification` rows) are removed after all
    /// fields are derived; use [`parse_rows`](Self::parse_rows) to keep them.
    /// Empty input, or input without a single timestamp boundary, yields an
    /// empty table, not an error.
    pub fn parse_str(&self, raw: &str) -> Result<MessageTable> {
        let rows = self.parse_rows(raw)?;
        let total = rows.len();
        let kept: Vec<ParsedMessage> = rows
            .into_iter()
            .filter(|row| !row.is_group_notification())
            .collect();
        debug!(
            total,
            kept = kept.len(),
            dropped = total - kept.len(),
            "parsed chat export"
        );
        Ok(MessageTable::from_rows(kept))
    }

    /// Parses export text into the pre-filter row sequence.
    ///
    /// Every timestamp boundary produces exactly one row here, system
    /// entries included, so the row count equals the token count. Rows are
    /// fully derived; the only difference from [`parse_str`](Self::parse_str)
    /// is that nothing is dropped.
    pub fn parse_rows(&self, raw: &str) -> Result<Vec<ParsedMessage>> {
        let normalized = normalize_whitespace(raw);
        let pairs = self
            .segmenter
            .segment(&normalized)
            .into_pairs(self.config.strict)?;
        Ok(pairs
            .into_iter()
            .map(|(token, chunk)| build_row(token, chunk))
            .collect())
    }
}

impl Default for ChatLogParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds one fully-derived row from an aligned (token, chunk) pair.
fn build_row(token: &str, chunk: &str) -> ParsedMessage {
    let date = parse_timestamp(token);
    match split_sender(chunk) {
        Some((user, body)) => ParsedMessage::new(date, user, body),
        None => ParsedMessage::new(date, GROUP_NOTIFICATION, chunk.trim()),
    }
}
