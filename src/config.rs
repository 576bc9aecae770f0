//! Configuration for the chat log parser.
//!
//! This module provides a clean configuration struct for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatframe::config::ParserConfig;
//! use chatframe::parser::ChatLogParser;
//!
//! let config = ParserConfig::new().with_strict(true);
//! let parser = ChatLogParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for chat export parsing.
///
/// Exports in the wild are frequently irregular, so the parser defaults to
/// best-effort recovery everywhere. The only knob is how hard to fail when
/// the segmentation counts disagree.
///
/// # Example
///
/// ```rust
/// use chatframe::config::ParserConfig;
///
/// let config = ParserConfig::new().with_strict(true);
/// assert!(config.strict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Fail on timestamp/chunk count mismatch instead of silently truncating
    /// the longer sequence (default: false).
    ///
    /// Truncation recovery cannot distinguish a benign formatting quirk from
    /// genuine tail-data loss in a corrupted export; strict mode surfaces the
    /// mismatch as an error so batch pipelines can notice.
    pub strict: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { strict: false }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a strict configuration that fails on segmentation mismatch.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Sets whether a segmentation count mismatch is a hard error.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ParserConfig::default();
        assert!(!config.strict);
    }

    #[test]
    fn test_config_builder() {
        let config = ParserConfig::new().with_strict(true);
        assert!(config.strict);
    }

    #[test]
    fn test_config_strict_constructor() {
        let config = ParserConfig::strict();
        assert!(config.strict);
    }
}
