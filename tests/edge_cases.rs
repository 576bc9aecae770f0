//! Edge case tests for chatframe
//!
//! These tests cover boundary conditions that might not be covered by
//! regular unit and integration tests.

use chatframe::prelude::*;

fn parse(text: &str) -> MessageTable {
    ChatLogParser::new().parse_str(text).unwrap()
}

fn rows(text: &str) -> Vec<ParsedMessage> {
    ChatLogParser::new().parse_rows(text).unwrap()
}

// =========================================================================
// Unicode and special character tests
// =========================================================================

#[test]
fn test_unicode_senders_and_bodies() {
    let table = parse(
        "1/5/24, 9:05 AM - Иван: Привет мир!\n\
         1/5/24, 9:06 AM - 田中太郎: こんにちは世界！\n\
         1/5/24, 9:07 AM - محمد: مرحبا بالعالم\n\
         1/5/24, 9:08 AM - User 🎉: Hello 👋 World 🌍",
    );

    assert_eq!(table.len(), 4);
    assert_eq!(table.rows()[0].user, "Иван");
    assert_eq!(table.rows()[1].user, "田中太郎");
    assert_eq!(table.rows()[2].user, "محمد");
    assert_eq!(table.rows()[3].user, "User 🎉");
    assert_eq!(table.rows()[3].message, "Hello 👋 World 🌍");
}

#[test]
fn test_zero_width_characters_in_sender() {
    // Zero-width non-joiner survives the sender split untouched.
    let table = parse("1/5/24, 9:05 AM - User\u{200C}Name: hi");
    assert!(table.rows()[0].user.contains('\u{200C}'));

    let table = parse("1/5/24, 9:05 AM - User\u{200B}Name: hi");
    assert!(table.rows()[0].user.contains('\u{200B}'));
}

#[test]
fn test_combining_diacritics_in_sender() {
    let table = parse("1/5/24, 9:05 AM - Café: naïve résumé");
    assert_eq!(table.rows()[0].user, "Café");
    assert_eq!(table.rows()[0].message, "naïve résumé");

    // NFD form: e + combining acute accent
    let table = parse("1/5/24, 9:05 AM - Cafe\u{0301}: hi");
    assert_eq!(table.rows()[0].user, "Cafe\u{0301}");
}

// =========================================================================
// Boundary hour tests
// =========================================================================

#[test]
fn test_midnight_hour() {
    let table = parse("1/5/24, 12:00 AM - Alice: midnight");
    let row = &table.rows()[0];
    assert_eq!(row.hour, Some(0));
    assert_eq!(row.period, "00-1");
}

#[test]
fn test_noon_hour() {
    let table = parse("1/5/24, 12:00 PM - Alice: noon");
    let row = &table.rows()[0];
    assert_eq!(row.hour, Some(12));
    assert_eq!(row.period, "12-13");
}

#[test]
fn test_last_hour_of_day() {
    let table = parse("1/5/24, 11:59 PM - Alice: almost tomorrow");
    let row = &table.rows()[0];
    assert_eq!(row.hour, Some(23));
    assert_eq!(row.minute, Some(59));
    assert_eq!(row.period, "23-00");
}

#[test]
fn test_first_am_hour() {
    let table = parse("1/5/24, 1:00 AM - Alice: early");
    let row = &table.rows()[0];
    assert_eq!(row.hour, Some(1));
    assert_eq!(row.period, "1-2");
}

// =========================================================================
// Sender split edge cases
// =========================================================================

#[test]
fn test_colon_without_space_is_a_system_entry() {
    // "Alice:Hello" has no ": " separator, so there is no sender prefix.
    let rows = rows("1/5/24, 9:05 AM - Alice:Hello");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user, GROUP_NOTIFICATION);
    assert_eq!(rows[0].message, "Alice:Hello");
}

#[test]
fn test_leading_separator_is_a_system_entry() {
    // ": " at position zero means an empty sender, treated as no sender.
    let rows = rows("1/5/24, 9:05 AM - : orphan body");
    assert_eq!(rows[0].user, GROUP_NOTIFICATION);
    assert_eq!(rows[0].message, ": orphan body");
}

#[test]
fn test_empty_body_after_separator() {
    let table = parse("1/5/24, 9:05 AM - Alice: ");
    assert_eq!(table.rows()[0].user, "Alice");
    assert_eq!(table.rows()[0].message, "");
}

#[test]
fn test_sender_with_punctuation() {
    let table = parse("1/5/24, 9:05 AM - Dr. Smith: hello");
    assert_eq!(table.rows()[0].user, "Dr. Smith");
}

#[test]
fn test_phone_number_sender() {
    let table = parse("1/5/24, 9:05 AM - +1 555 0100: call me back");
    assert_eq!(table.rows()[0].user, "+1 555 0100");
    assert_eq!(table.rows()[0].message, "call me back");
}

// =========================================================================
// Timestamp-like content inside bodies
// =========================================================================

#[test]
fn test_embedded_header_starts_a_new_segment() {
    // A full header shape inside a body, dash included, is a boundary.
    let table = parse("1/5/24, 9:05 AM - Alice: see 1/6/24, 2:00 PM - Bob: fake");

    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0].user, "Alice");
    assert_eq!(table.rows()[0].message, "see ");
    assert_eq!(table.rows()[1].user, "Bob");
    assert_eq!(table.rows()[1].message, "fake");
}

#[test]
fn test_timestamp_without_dash_stays_in_body() {
    // Without the " - " suffix the shape is ordinary text.
    let table = parse("1/5/24, 9:05 AM - Alice: meeting at 5/6/24, 3:00 PM tomorrow");

    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].message, "meeting at 5/6/24, 3:00 PM tomorrow");
}

// =========================================================================
// Very long content
// =========================================================================

#[test]
fn test_very_long_body() {
    let body = "x".repeat(100 * 1024);
    let text = format!("1/5/24, 9:05 AM - Alice: {}", body);
    let table = parse(&text);

    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].message.len(), 100 * 1024);
}

#[test]
fn test_many_entries() {
    let mut lines = Vec::with_capacity(1000);
    for i in 0..1000 {
        lines.push(format!(
            "1/5/24, 9:{:02} AM - Alice: message {}",
            i % 60,
            i
        ));
    }
    let table = parse(&lines.join("\n"));
    assert_eq!(table.len(), 1000);
}

// =========================================================================
// Line ending tests
// =========================================================================

#[test]
fn test_crlf_line_endings() {
    // Bodies keep the raw remainder, carriage return included.
    let table = parse("1/5/24, 9:05 AM - Alice: Hello\r\n1/5/24, 9:06 AM - Bob: Hi");

    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0].message, "Hello\r\n");
    assert_eq!(table.rows()[1].message, "Hi");
}

#[test]
fn test_trailing_newline_on_final_entry() {
    let table = parse("1/5/24, 9:05 AM - Alice: Hello\n");
    assert_eq!(table.rows()[0].message, "Hello\n");
}

// =========================================================================
// Whitespace normalization scope
// =========================================================================

#[test]
fn test_nbsp_in_body_is_normalized_too() {
    // Normalization runs on the whole input, not just headers.
    let table = parse("1/5/24, 9:05 AM - Alice: price\u{00A0}100");
    assert_eq!(table.rows()[0].message, "price 100");

    let table = parse("1/5/24, 9:05 AM - Alice: gap\u{202F}here");
    assert_eq!(table.rows()[0].message, "gap here");
}

// =========================================================================
// Output edge cases
// =========================================================================

#[cfg(feature = "csv-output")]
#[test]
fn test_csv_with_quotes_commas_and_newlines() {
    use chatframe::output::to_csv_string;

    let table = parse(
        "1/5/24, 9:05 AM - Alice: Say \"Hi\", then: stop\n\
         1/5/24, 9:06 AM - Bob: line one\nline two\n\
         1/5/24, 9:07 AM - Charlie: plain",
    );

    let csv = to_csv_string(&table).expect("CSV generation failed");
    assert!(!csv.is_empty());

    // Read back to prove the quoting is reversible.
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 3);
    assert_eq!(&records[0][2], "Say \"Hi\", then: stop\n");
    assert_eq!(&records[1][2], "line one\nline two\n");
}

#[cfg(feature = "json-output")]
#[test]
fn test_json_with_special_chars() {
    use chatframe::output::to_json_string;

    let table = parse(
        "1/5/24, 9:05 AM - Alice: Quote: \"test\" and backslash \\\n\
         1/5/24, 9:06 AM - Bob: tab\there",
    );

    let json = to_json_string(&table).expect("JSON generation failed");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");
    assert!(parsed.is_array());
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}
