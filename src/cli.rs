//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - CLI-side output format options
//!
//! The CLI enum mirrors [`crate::format::OutputFormat`] so the library type
//! stays free of clap derives; [`From`] converts between the two.

use clap::{Parser, ValueEnum};

/// Parse a WhatsApp-style chat export into a flat message table
/// ready for analysis.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatframe")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatframe chat_export.txt
    chatframe chat_export.txt -o table.csv
    chatframe chat_export.txt --format jsonl
    chatframe chat_export.txt --include-system
    chatframe chat_export.txt --strict")]
pub struct Args {
    /// Path to input file
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = "chat_table.csv")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Fail when timestamp tokens and message chunks disagree
    /// instead of truncating to the shorter sequence
    #[arg(long)]
    pub strict: bool,

    /// Keep system entries (group created, user added, ...) in the output
    #[arg(long)]
    pub include_system: bool,
}

/// Output format options.
///
/// # Example
///
/// ```rust
/// use chatframe::cli::OutputFormat;
///
/// let format = OutputFormat::Jsonl;
/// println!("Extension: {}", format.extension()); // "jsonl"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,

    /// JSON array of row objects
    Json,

    /// JSON Lines - one row object per line
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
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

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
