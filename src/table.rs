//! Final message table.
//!
//! [`MessageTable`] is the parser's output: an ordered sequence of
//! [`ParsedMessage`] rows plus the canonical column order every writer
//! emits. It is a plain container; construction happens in the parser,
//! rendering in the output modules.

use serde::{Deserialize, Serialize};

use crate::record::ParsedMessage;

/// Ordered collection of parsed message rows.
///
/// Row order matches the order of timestamp boundaries in the source text.
/// Serializes transparently as a row array.
///
/// # Example
///
/// ```rust
/// use chatframe::ChatLogParser;
///
/// let table = ChatLogParser::new()
///     .parse_str("1/5/24, 9:05 AM - Alice: Hello\n1/5/24, 9:06 AM - Bob: Hi")?;
///
/// assert_eq!(table.len(), 2);
/// for row in &table {
///     println!("{}: {}", row.user, row.message);
/// }
/// # Ok::<(), chatframe::ChatframeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTable {
    rows: Vec<ParsedMessage>,
}

impl MessageTable {
    /// Column names in output order.
    ///
    /// Every writer renders fields in exactly this order; consumers that
    /// index by position can rely on it.
    pub const COLUMNS: [&'static str; 12] = [
        "date",
        "user",
        "message",
        "only_date",
        "year",
        "month_num",
        "month",
        "day",
        "day_name",
        "hour",
        "minute",
        "period",
    ];

    /// Wraps a row sequence without copying.
    pub fn from_rows(rows: Vec<ParsedMessage>) -> Self {
        Self { rows }
    }

    /// Returns the rows as a slice.
    pub fn rows(&self) -> &[ParsedMessage] {
        &self.rows
    }

    /// Returns the row at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&ParsedMessage> {
        self.rows.get(index)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ParsedMessage> {
        self.rows.iter()
    }

    /// Consumes the table, returning the owned rows.
    pub fn into_rows(self) -> Vec<ParsedMessage> {
        self.rows
    }
}

impl IntoIterator for MessageTable {
    type Item = ParsedMessage;
    type IntoIter = std::vec::IntoIter<ParsedMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a MessageTable {
    type Item = &'a ParsedMessage;
    type IntoIter = std::slice::Iter<'a, ParsedMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<ParsedMessage> for MessageTable {
    fn from_iter<I: IntoIterator<Item = ParsedMessage>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
