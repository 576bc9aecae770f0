//! # chatframe CLI
//!
//! Command-line interface for the chatframe library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatframe::cli::Args;
use chatframe::format::{OutputFormat, write_to_format};
use chatframe::{ChatLogParser, ChatframeError, MessageTable, ParserConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatframeError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Determine output extension based on format
    let output_path = adjust_output_extension(&args.output, args.format);

    // Print header
    println!("📦 chatframe v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", args.format);
    if args.strict {
        println!("⚠️  Mode:    Strict segmentation");
    }
    if args.include_system {
        println!("🔔 Keeping system entries");
    }
    println!();

    let config = ParserConfig::new().with_strict(args.strict);
    let parser = ChatLogParser::with_config(config);

    // Parse into the pre-filter row sequence so the drop count is reportable
    println!("⏳ Parsing chat export...");
    let parse_start = Instant::now();
    let raw = fs::read_to_string(&args.input)?;
    let rows = parser.parse_rows(&raw)?;
    let total_count = rows.len();
    let parse_time = parse_start.elapsed();
    println!(
        "   Found {} entries ({:.2}s)",
        total_count,
        parse_time.as_secs_f64()
    );

    // Drop system entries unless asked to keep them
    let table = if args.include_system {
        MessageTable::from_rows(rows)
    } else {
        let table: MessageTable = rows
            .into_iter()
            .filter(|row| !row.is_group_notification())
            .collect();
        println!(
            "   {} messages after dropping {} system entries",
            table.len(),
            total_count - table.len()
        );
        table
    };

    // Write output in selected format
    let lib_format: OutputFormat = args.format.into();
    println!("💾 Writing {}...", lib_format);
    let write_start = Instant::now();
    write_to_format(&table, &output_path, lib_format)?;
    let write_time = write_start.elapsed();
    println!("   Written in {:.2}s", write_time.as_secs_f64());

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Entries:   {}", total_count);
    println!("   Rows out:  {}", table.len());

    // Performance stats
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let rows_per_sec = total_count as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} entries/sec", rows_per_sec);

    Ok(())
}

/// Adjusts output file extension based on format if using default output.
fn adjust_output_extension(output: &str, format: chatframe::cli::OutputFormat) -> String {
    if output != "chat_table.csv" {
        return output.to_string();
    }

    format!("chat_table.{}", format.extension())
}
