//! RFC 3977 Section 8.3 - XOVER line decoding
//!
//! Overview lines are tab-separated: the article number first, then one
//! value per field announced by LIST OVERVIEW.FMT, in order.

use nntp_overview::commands::parse_overview_line;

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_values_zip_with_field_names() {
    let fields = fields(&["Subject", "From", "Date", "Message-ID"]);
    let entry = parse_overview_line("1\tHello\tAlice\tMon\t<id@x>", &fields);

    assert_eq!(entry.headers["Subject"], "Hello");
    assert_eq!(entry.headers["From"], "Alice");
    assert_eq!(entry.headers["Date"], "Mon");
    assert_eq!(entry.headers["Message-ID"], "<id@x>");
}

#[test]
fn test_article_number_is_not_a_field() {
    let fields = fields(&["Subject"]);
    let entry = parse_overview_line("12345\tHello", &fields);

    assert_eq!(entry.headers.len(), 1);
    assert!(!entry.headers.values().any(|v| v == "12345"));
}

#[test]
fn test_short_line_yields_partial_record() {
    // Fewer values than announced fields: the unmatched names are simply
    // absent, not an error
    let fields = fields(&["Subject", "From", "Date", "Message-ID"]);
    let entry = parse_overview_line("1\tHello\tAlice", &fields);

    assert_eq!(entry.headers.len(), 2);
    assert!(entry.headers.contains_key("Subject"));
    assert!(entry.headers.contains_key("From"));
    assert!(!entry.headers.contains_key("Date"));
    assert!(!entry.headers.contains_key("Message-ID"));
}

#[test]
fn test_excess_values_ignored() {
    // Servers may append columns beyond the announced format
    let fields = fields(&["Subject", "From"]);
    let entry = parse_overview_line("1\tHello\tAlice\txref:extra\tmore", &fields);

    assert_eq!(entry.headers.len(), 2);
}

#[test]
fn test_empty_values_preserved() {
    // An article with no References still has the column, empty
    let fields = fields(&["Subject", "References", "Bytes"]);
    let entry = parse_overview_line("1\tHello\t\t1024", &fields);

    assert_eq!(entry.headers["References"], "");
    assert_eq!(entry.headers["Bytes"], "1024");
}

#[test]
fn test_values_keep_internal_spaces_and_punctuation() {
    let fields = fields(&["Subject", "From"]);
    let entry = parse_overview_line(
        "1\tRe: [PATCH v2] Fix: \"bug\" in <module>\t\"John Doe\" <john@example.com>",
        &fields,
    );

    assert_eq!(entry.headers["Subject"], "Re: [PATCH v2] Fix: \"bug\" in <module>");
    assert_eq!(entry.headers["From"], "\"John Doe\" <john@example.com>");
}

#[test]
fn test_unicode_values() {
    let fields = fields(&["Subject"]);
    let entry = parse_overview_line("1\t日本語の件名", &fields);

    assert_eq!(entry.headers["Subject"], "日本語の件名");
}

#[test]
fn test_line_without_tabs_yields_empty_record() {
    let fields = fields(&["Subject", "From"]);
    let entry = parse_overview_line("12345", &fields);

    assert!(entry.headers.is_empty());
}

#[test]
fn test_empty_field_list_yields_empty_record() {
    let entry = parse_overview_line("1\tHello\tAlice", &[]);
    assert!(entry.headers.is_empty());
}

#[test]
fn test_spaces_are_not_separators() {
    // Only TAB separates overview values
    let fields = fields(&["Subject", "From"]);
    let entry = parse_overview_line("1\tHello world Alice", &fields);

    assert_eq!(entry.headers.len(), 1);
    assert_eq!(entry.headers["Subject"], "Hello world Alice");
}
