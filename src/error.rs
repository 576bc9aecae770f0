//! Unified error types for chatframe.
//!
//! This module provides a single [`ChatframeError`] enum that covers all error
//! cases in the library. Data-quality problems in the export itself (malformed
//! timestamps, missing sender prefixes) are deliberately *not* errors; the
//! parser degrades to null fields or sentinel classification instead. What
//! remains here is environmental failure (I/O, serialization) plus the one
//! opt-in strict-mode violation.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatframe operations.
///
/// # Example
///
/// ```rust
/// use chatframe::error::Result;
/// use chatframe::MessageTable;
///
/// fn my_function() -> Result<MessageTable> {
///     // ... operations that may fail
///     Ok(MessageTable::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatframeError>;

/// The error type for all chatframe operations.
///
/// Each variant carries context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatframeError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Timestamp-token count and message-chunk count disagree.
    ///
    /// Only raised in strict mode ([`ParserConfig::with_strict`]); the default
    /// recovery truncates the longer sequence and keeps going.
    ///
    /// [`ParserConfig::with_strict`]: crate::config::ParserConfig::with_strict
    #[error("segment mismatch: {tokens} timestamp token(s) vs {chunks} message chunk(s)")]
    SegmentMismatch {
        /// Number of timestamp tokens found
        tokens: usize,
        /// Number of message chunks found
        chunks: usize,
    },

    /// An output format name or file extension was not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatframeError {
    /// Creates a strict-mode segment mismatch error.
    pub fn segment_mismatch(tokens: usize, chunks: usize) -> Self {
        ChatframeError::SegmentMismatch { tokens, chunks }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatframeError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatframeError::Io(_))
    }

    /// Returns `true` if this is a strict-mode segment mismatch.
    pub fn is_segment_mismatch(&self) -> bool {
        matches!(self, ChatframeError::SegmentMismatch { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatframeError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Display tests for all error variants
    // =========================================================================

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatframeError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_segment_mismatch_display() {
        let err = ChatframeError::segment_mismatch(5, 3);
        let display = err.to_string();
        assert!(display.contains('5'));
        assert!(display.contains('3'));
        assert!(display.contains("segment mismatch"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatframeError::InvalidFormat {
            format: "output",
            message: "unrecognized extension: .xml".into(),
        };
        let display = err.to_string();
        assert!(display.contains("output"));
        assert!(display.contains(".xml"));
    }

    // =========================================================================
    // Error source chain tests
    // =========================================================================

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatframeError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_segment_mismatch_has_no_source() {
        use std::error::Error;
        let err = ChatframeError::segment_mismatch(2, 1);
        assert!(err.source().is_none());
    }

    // =========================================================================
    // is_* methods tests
    // =========================================================================

    #[test]
    fn test_is_methods() {
        let io_err = ChatframeError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_segment_mismatch());
        assert!(!io_err.is_invalid_format());

        let mismatch = ChatframeError::segment_mismatch(4, 2);
        assert!(mismatch.is_segment_mismatch());
        assert!(!mismatch.is_io());
        assert!(!mismatch.is_invalid_format());
    }

    #[test]
    fn test_is_invalid_format() {
        let err = ChatframeError::invalid_format("output", "bad extension");
        assert!(err.is_invalid_format());
        assert!(!err.is_io());
    }

    // =========================================================================
    // From conversions tests
    // =========================================================================

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ChatframeError = io_err.into();
        assert!(err.is_io());
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_from_csv_error() {
        let io_err = std::io::Error::other("test");
        let csv_err = csv::Error::from(io_err);
        let err: ChatframeError = csv_err.into();
        assert!(err.to_string().contains("CSV error"));
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatframeError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    // =========================================================================
    // Result type alias test
    // =========================================================================

    #[test]
    fn test_result_type_alias() {
        fn returns_error() -> Result<i32> {
            Err(ChatframeError::segment_mismatch(1, 0))
        }

        assert!(returns_error().is_err());
    }

    #[test]
    fn test_error_debug() {
        let err = ChatframeError::segment_mismatch(1, 0);
        let debug = format!("{:?}", err);
        assert!(debug.contains("SegmentMismatch"));
    }
}
