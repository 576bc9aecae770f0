//! The output row type for parsed chat exports.
//!
//! This module provides [`ParsedMessage`], one fully-derived table row per
//! message, plus the [`GROUP_NOTIFICATION`] sentinel and the
//! [`period_label`] hour-bucket function.
//!
//! # Overview
//!
//! A row consists of:
//! - **Parsed**: `date` (optional), `user`, `message`
//! - **Derived**: `only_date`, `year`, `month_num`, `month`, `day`,
//!   `day_name`, `hour`, `minute`, `period`
//!
//! Every derived field is computed once, at construction, from `date`. A row
//! is immutable after construction; there is no partially-derived state to
//! observe.
//!
//! # Examples
//!
//! ```
//! use chatframe::ParsedMessage;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 5)
//!     .unwrap()
//!     .and_hms_opt(9, 5, 0)
//!     .unwrap();
//! let row = ParsedMessage::new(Some(date), "Alice", "Hello there");
//!
//! assert_eq!(row.user, "Alice");
//! assert_eq!(row.hour, Some(9));
//! assert_eq!(row.day_name.as_deref(), Some("Friday"));
//! assert_eq!(row.period, "9-10");
//! ```
//!
//! A row whose timestamp failed to parse carries `None` through every derived
//! field and the `"nan-nan"` period:
//!
//! ```
//! use chatframe::ParsedMessage;
//!
//! let row = ParsedMessage::new(None, "Alice", "Hello");
//! assert!(row.year.is_none());
//! assert_eq!(row.period, "nan-nan");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Sentinel sender value for system-generated entries (group creation, title
/// changes, encryption notices) that lack a `"Name: "` prefix.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// One row of the parsed message table.
///
/// Field order is the table's column order: downstream writers emit columns
/// exactly as declared here.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `date` | `Option<NaiveDateTime>` | Parsed timestamp, `None` if the token was malformed |
/// | `user` | `String` | Sender name, or [`GROUP_NOTIFICATION`] |
/// | `message` | `String` | Message body |
/// | `only_date` | `Option<NaiveDate>` | Calendar date of `date` |
/// | `year` | `Option<i32>` | Calendar year |
/// | `month_num` | `Option<u32>` | Month number, 1–12 |
/// | `month` | `Option<String>` | Month name, `January`–`December` |
/// | `day` | `Option<u32>` | Day of month |
/// | `day_name` | `Option<String>` | Weekday name, `Monday`–`Sunday` |
/// | `hour` | `Option<u32>` | 24-hour hour, 0–23 |
/// | `minute` | `Option<u32>` | Minute, 0–59 |
/// | `period` | `String` | Hour-bucket label, see [`period_label`] |
///
/// # Serialization
///
/// Implements `Serialize`/`Deserialize`. Unlike JSON APIs that omit empty
/// fields, this is a table row: every column is always present, with explicit
/// `null`s for missing values, so exports keep a rectangular shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// Parsed timestamp, or `None` when the token failed to parse.
    pub date: Option<NaiveDateTime>,

    /// Sender name, or [`GROUP_NOTIFICATION`] for system entries.
    pub user: String,

    /// Message body.
    ///
    /// Raw remainder after the sender prefix (newlines from the export
    /// survive); trimmed only for system entries without a sender prefix.
    pub message: String,

    /// Calendar date of `date`.
    pub only_date: Option<NaiveDate>,

    /// Calendar year of `date`.
    pub year: Option<i32>,

    /// Month number of `date`, 1–12.
    pub month_num: Option<u32>,

    /// Month name of `date` (`January` … `December`).
    pub month: Option<String>,

    /// Day of month of `date`.
    pub day: Option<u32>,

    /// Weekday name of `date` (`Monday` … `Sunday`).
    pub day_name: Option<String>,

    /// 24-hour hour of `date`.
    pub hour: Option<u32>,

    /// Minute of `date`.
    pub minute: Option<u32>,

    /// Hour-bucket label derived from `hour`.
    pub period: String,
}

impl ParsedMessage {
    /// Creates a row and computes every derived column from `date`.
    ///
    /// A `None` date propagates `None` into all derived fields and
    /// `"nan-nan"` into `period`; no partial derivation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatframe::ParsedMessage;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 15)
    ///     .unwrap()
    ///     .and_hms_opt(23, 59, 0)
    ///     .unwrap();
    /// let row = ParsedMessage::new(Some(date), "Bob", "late night");
    /// assert_eq!(row.month.as_deref(), Some("June"));
    /// assert_eq!(row.period, "23-00");
    /// ```
    pub fn new(
        date: Option<NaiveDateTime>,
        user: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let hour = date.map(|d| d.hour());
        Self {
            date,
            user: user.into(),
            message: message.into(),
            only_date: date.map(|d| d.date()),
            year: date.map(|d| d.year()),
            month_num: date.map(|d| d.month()),
            month: date.map(|d| d.format("%B").to_string()),
            day: date.map(|d| d.day()),
            day_name: date.map(|d| d.format("%A").to_string()),
            hour,
            minute: date.map(|d| d.minute()),
            period: period_label(hour),
        }
    }

    /// Returns `true` if this row is a system entry rather than a user
    /// message.
    pub fn is_group_notification(&self) -> bool {
        self.user == GROUP_NOTIFICATION
    }

    /// Returns `true` if this row carries a parsed timestamp.
    pub fn has_date(&self) -> bool {
        self.date.is_some()
    }

    /// Returns `true` if this row's message body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }
}

impl Default for ParsedMessage {
    fn default() -> Self {
        Self::new(None, "", "")
    }
}

/// Computes the hour-bucket label for a (possibly missing) 24-hour hour.
///
/// - `None` → `"nan-nan"`
/// - `23` → `"23-00"` (wraps to midnight)
/// - `0` → `"00-1"`
/// - otherwise → `"{hour}-{hour+1}"`
///
/// # Example
///
/// ```rust
/// use chatframe::period_label;
///
/// assert_eq!(period_label(Some(14)), "14-15");
/// assert_eq!(period_label(Some(23)), "23-00");
/// assert_eq!(period_label(Some(0)), "00-1");
/// assert_eq!(period_label(None), "nan-nan");
/// ```
pub fn period_label(hour: Option<u32>) -> String {
    match hour {
        None => "nan-nan".to_string(),
        Some(23) => "23-00".to_string(),
        Some(0) => "00-1".to_string(),
        Some(h) => format!("{}-{}", h, h + 1),
    }
}
