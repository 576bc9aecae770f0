//! Toxic chat export generator for stress testing chatframe.
//!
//! Usage: cargo run --features gen-test --bin gen_chat -- [entries] [output]
//! Example: cargo run --features gen-test --bin gen_chat -- 100000 heavy_chat.txt

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

const EMOJIS: &[&str] = &[
    "😀",
    "😂",
    "🤣",
    "😍",
    "🤔",
    "🙄",
    "😱",
    "🤯",
    "💀",
    "🤖",
    "🦄",
    "🌈",
    "⚡",
    "🔥",
    "👍",
    "❤️",
    "🏳️‍🌈",
    "🇰🇿",
    "👨‍👩‍👧‍👦",
    "🤷‍♀️", // Complex emojis
];

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "Мария",
    "村上",
    "محمد",
    "Dr. Smith",
    "User,With,Commas",
    "User\"With\"Quotes",
    "🔥FireUser🔥",
    "+1 555 0100",
];

const NOTIFICATIONS: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat can read or listen to them.",
    "Alice created group \"Weekend Trip\"",
    "Alice added Bob",
    "Bob left",
    "Мария changed the subject from \"Trip\" to \"Weekend Trip\"",
    "You deleted this message",
    "<Media omitted>",
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);

    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");

    println!("🧪 Chat Export Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Entries: {}", count);
    println!("   Output:  {}", output);
    println!();

    generate_export(count, output);
}

fn generate_export(count: usize, output: &str) {
    let file = File::create(output).expect("Failed to create output file");
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;

    // Preamble before the first timestamp, discarded by the parser
    let preamble = "Chat history exported from the app\n";
    writer.write_all(preamble.as_bytes()).unwrap();
    bytes_written += preamble.len();

    for i in 0..count {
        let header = timestamp_header(&mut rng, i);

        let line = if i % 10 == 3 {
            // System entry: timestamp but no "Sender: " prefix
            let notification = NOTIFICATIONS.choose(&mut rng).unwrap();
            format!("{} - {}\n", header, notification)
        } else {
            let sender = SENDERS.choose(&mut rng).unwrap();
            let body = generate_body(&mut rng, i);
            format!("{} - {}: {}\n", header, sender, body)
        };

        bytes_written += line.len();
        writer.write_all(line.as_bytes()).unwrap();

        // Occasionally insert bare lines that glue onto the previous entry
        if i % 1000 == 500 {
            let garbage = generate_garbage_line(&mut rng);
            writer.write_all(garbage.as_bytes()).unwrap();
            bytes_written += garbage.len();
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let eps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} entries/s)",
                i + 1,
                count,
                mb,
                eps
            );
        }
    }

    writer.flush().unwrap();

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", mb);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} entries/s",
        count as f64 / elapsed.as_secs_f64()
    );
}

/// Builds a timestamp header in export shape, advancing with the index.
///
/// Most headers parse cleanly; a slice of them use a narrow or regular
/// no-break space before the meridiem, and every 97th uses a four-digit
/// year that passes segmentation but fails timestamp parsing.
fn timestamp_header(rng: &mut impl Rng, index: usize) -> String {
    let minute = index % 60;
    let hour24 = (index / 60) % 24;
    let day = (index / 1440) % 28 + 1;
    let month = (index / 40320) % 12 + 1;

    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    let meridiem = if hour24 < 12 { "AM" } else { "PM" };

    let separator = match rng.gen_range(0..10) {
        0 => '\u{202F}',
        1 => '\u{00A0}',
        _ => ' ',
    };

    let year = if index % 97 == 96 { "2024" } else { "24" };

    format!(
        "{}/{}/{}, {}:{:02}{}{}",
        month, day, year, hour12, minute, separator, meridiem
    )
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 16 {
        // Normal messages
        0..=6 => format!("Normal message #{} with some text", index),

        // Colons inside the body
        7 => format!("Note: remember: milk, eggs, index={}", index),
        8 => format!("meeting at 5/6/24, 3:00 PM tomorrow #{}", index),

        // Emoji spam
        9 => {
            let emojis: String = (0..30)
                .map(|_| *EMOJIS.choose(rng).unwrap())
                .collect::<Vec<_>>()
                .join("");
            format!("Emoji spam: {} #{}", emojis, index)
        }

        // Unicode edge cases
        10 => format!("Кириллица: Привет мир! #{}", index),
        11 => format!("日本語: こんにちは #{}", index),
        12 => format!("Mixed: Hello Привет 你好 🌍 #{}", index),

        // Empty-ish
        13 => String::new(),
        14 => "   ".to_string(),

        // Giant message
        15 => {
            let base = format!("Giant message #{}: ", index);
            let padding: String = (0..10_000).map(|_| 'X').collect();
            base + &padding
        }

        _ => format!("Fallback message #{}", index),
    }
}

fn generate_garbage_line(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..5) {
        0 => "this continuation line has no timestamp\n".to_string(),
        1 => "second line of the previous message\n".to_string(),
        2 => "-------------------------------------------\n".to_string(),
        3 => "\n".to_string(), // Empty line
        4 => "☠️💀👻 Random emoji line 👻💀☠️\n".to_string(),
        _ => "garbage\n".to_string(),
    }
}
