//! Timestamp grammar and text segmentation.
//!
//! This module contains the fixed export grammar plus the functions that turn
//! a raw export blob into aligned (timestamp token, message chunk) pairs:
//! whitespace normalization, boundary scanning, the count-alignment policy,
//! timestamp parsing, and the sender/body split.

use chrono::NaiveDateTime;
use regex::Regex;
use tracing::warn;

use crate::error::{ChatframeError, Result};

/// Boundary pattern for one message start.
///
/// Matches `M/D/YY, H:MM AM - ` with 1–2 digit month/day/hour, 2–4 digit
/// year, and an AM/PM marker, capturing the timestamp without the trailing
/// `" - "` separator.
pub const TOKEN_PATTERN: &str = r"(\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s[APM]+)\s-\s";

/// Timestamp parse format for captured tokens.
///
/// Deliberately rigid: the grammar tolerates 4-digit years at the boundary,
/// but only tokens in this exact shape produce a date; anything else becomes
/// a null-dated row rather than a guess.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%y, %I:%M %p";

/// Replaces the narrow no-break space (U+202F) and the no-break space
/// (U+00A0) with ordinary spaces.
///
/// Exporters on different platforms and locales put different space glyphs
/// between the time and the AM/PM marker; the grammar only sees ordinary
/// whitespace, so this runs before any matching.
///
/// # Example
///
/// ```rust
/// use chatframe::segment::normalize_whitespace;
///
/// let raw = "1/5/24, 9:05\u{202F}AM - Alice: hi";
/// assert_eq!(normalize_whitespace(raw), "1/5/24, 9:05 AM - Alice: hi");
/// ```
pub fn normalize_whitespace(raw: &str) -> String {
    raw.replace(['\u{202F}', '\u{00A0}'], " ")
}

/// Parses one captured timestamp token.
///
/// Returns `None` for anything that doesn't conform to
/// [`TIMESTAMP_FORMAT`], including out-of-range fields and 4-digit years.
/// Never panics.
///
/// # Example
///
/// ```rust
/// use chatframe::segment::parse_timestamp;
/// use chrono::Timelike;
///
/// let ts = parse_timestamp("1/5/24, 9:05 AM").unwrap();
/// assert_eq!(ts.hour(), 9);
///
/// assert!(parse_timestamp("1/5/2024, 9:05 AM").is_none());
/// assert!(parse_timestamp("2/30/24, 9:05 AM").is_none());
/// ```
pub fn parse_timestamp(token: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(token, TIMESTAMP_FORMAT).ok()
}

/// Splits a chunk at the first `": "` into (sender, body).
///
/// Returns `None` when no `": "` exists or the prefix before it would be
/// empty; the caller then classifies the chunk as a system entry. Later
/// colons stay inside the body untouched.
pub fn split_sender(chunk: &str) -> Option<(&str, &str)> {
    let idx = chunk.find(": ")?;
    if idx == 0 {
        return None;
    }
    Some((&chunk[..idx], &chunk[idx + 2..]))
}

/// Scanner that locates message boundaries in normalized export text.
#[derive(Debug)]
pub struct Segmenter {
    regex: Regex,
}

impl Segmenter {
    /// Creates a segmenter with the compiled boundary pattern.
    pub fn new() -> Self {
        Self {
            regex: Regex::new(TOKEN_PATTERN).unwrap(),
        }
    }

    /// Scans `text` and returns the timestamp tokens and the message chunks
    /// between consecutive boundaries.
    ///
    /// The segment before the first boundary (empty string or preamble) is
    /// discarded. Call [`Segments::into_pairs`] to apply the alignment policy
    /// and get zipped pairs.
    pub fn segment<'a>(&self, text: &'a str) -> Segments<'a> {
        let tokens = self
            .regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();
        let chunks = self.regex.split(text).skip(1).collect();
        Segments { tokens, chunks }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw segmentation output: timestamp tokens and message chunks, in document
/// order, not yet paired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'a> {
    /// Matched timestamp substrings, without the `" - "` separator.
    pub tokens: Vec<&'a str>,
    /// Text runs between consecutive boundaries.
    pub chunks: Vec<&'a str>,
}

impl<'a> Segments<'a> {
    /// Returns `true` if token and chunk counts agree.
    pub fn is_aligned(&self) -> bool {
        self.tokens.len() == self.chunks.len()
    }

    /// Returns `true` if the text contained no message boundaries at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.chunks.is_empty()
    }

    /// Zips tokens and chunks into pairs, applying the alignment policy.
    ///
    /// When counts disagree (malformed export, truncated log), the longer
    /// sequence is truncated to the shorter one front-aligned, with a
    /// diagnostic warning. Under `strict` the mismatch is a
    /// [`ChatframeError::SegmentMismatch`] instead of a silent data loss.
    pub fn into_pairs(mut self, strict: bool) -> Result<Vec<(&'a str, &'a str)>> {
        if !self.is_aligned() {
            if strict {
                return Err(ChatframeError::segment_mismatch(
                    self.tokens.len(),
                    self.chunks.len(),
                ));
            }
            let keep = self.tokens.len().min(self.chunks.len());
            warn!(
                tokens = self.tokens.len(),
                chunks = self.chunks.len(),
                keep,
                "timestamp and chunk counts disagree; truncating to the shorter sequence"
            );
            self.tokens.truncate(keep);
            self.chunks.truncate(keep);
        }
        Ok(self.tokens.into_iter().zip(self.chunks).collect())
    }
}
