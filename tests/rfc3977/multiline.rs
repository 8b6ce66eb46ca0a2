//! RFC 3977 Section 3.1.1 - Multi-line blocks and dot-stuffing
//!
//! Multi-line blocks end with a line containing only "."; body lines that
//! start with "." are sent with an extra "." prepended. These tests pin
//! down the receiving rules; the wire-level behavior is exercised against
//! a live stub in `session_test.rs`.

/// Receiving rule for one body line, as the client applies it
fn unstuff_line(line: &str) -> &str {
    if line.starts_with("..") { &line[1..] } else { line }
}

fn is_terminator(line: &str) -> bool {
    line == "."
}

/// Apply the block rules to already-split lines
fn parse_block(lines: &[&str]) -> Vec<String> {
    let mut result = Vec::new();
    for line in lines {
        if is_terminator(line) {
            break;
        }
        result.push(unstuff_line(line).to_string());
    }
    result
}

#[test]
fn test_single_dot_is_terminator() {
    assert!(is_terminator("."));
    assert!(!is_terminator(".."));
    assert!(!is_terminator(". "));
    assert!(!is_terminator(" ."));
    assert!(!is_terminator("data."));
}

#[test]
fn test_unstuffing() {
    assert_eq!(unstuff_line(".."), ".");
    assert_eq!(unstuff_line("..."), "..");
    assert_eq!(unstuff_line("..Hello"), ".Hello");
    assert_eq!(unstuff_line("Hello"), "Hello");
    assert_eq!(unstuff_line(""), "");
    // Dots elsewhere are untouched
    assert_eq!(unstuff_line("a.b."), "a.b.");
    // Stuffing applies at position 0 only
    assert_eq!(unstuff_line(" ..x"), " ..x");
}

#[test]
fn test_block_excludes_terminator() {
    let result = parse_block(&["Line 1", "Line 2", "."]);
    assert_eq!(result, vec!["Line 1", "Line 2"]);
}

#[test]
fn test_block_empty_when_terminator_first() {
    let result = parse_block(&["."]);
    assert!(result.is_empty());
}

#[test]
fn test_block_with_stuffed_lines() {
    let result = parse_block(&["Normal", "..was a dot line", "..", "."]);
    assert_eq!(result, vec!["Normal", ".was a dot line", "."]);
}

#[test]
fn test_block_preserves_empty_lines() {
    let result = parse_block(&["First", "", "Third", "."]);
    assert_eq!(result, vec!["First", "", "Third"]);
}

#[test]
fn test_overview_lines_pass_through_unchanged() {
    // XOVER lines start with a digit, so stuffing never applies
    let result = parse_block(&[
        "1\tHello\tAlice\tMon\t<id1@x>",
        "2\tRe: Hello\tBob\tTue\t<id2@x>",
        ".",
    ]);
    assert_eq!(result.len(), 2);
    assert!(result[0].starts_with("1\t"));
    assert!(result[1].starts_with("2\t"));
}
