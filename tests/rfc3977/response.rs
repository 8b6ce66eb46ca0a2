//! RFC 3977 Section 3.2 - Response line parsing
//!
//! Responses start with a 3-digit status code, usually followed by a space
//! and human-readable text.

use nntp_overview::commands::parse_status_line;

#[test]
fn test_code_and_message() {
    let (code, msg) = parse_status_line("211 43 1 43 example.group").unwrap();
    assert_eq!(code, 211);
    assert_eq!(msg, "43 1 43 example.group");
}

#[test]
fn test_code_without_message() {
    let (code, msg) = parse_status_line("205").unwrap();
    assert_eq!(code, 205);
    assert_eq!(msg, "");
}

#[test]
fn test_all_codes_in_protocol_range() {
    for line in ["100 help", "215 list follows", "224 overview", "503 nope"] {
        let (code, _) = parse_status_line(line).unwrap();
        assert!((100..=599).contains(&code), "code {code} out of range");
    }
}

#[test]
fn test_rejects_short_or_non_numeric() {
    assert!(parse_status_line("").is_err());
    assert!(parse_status_line("21").is_err());
    assert!(parse_status_line("hello").is_err());
    assert!(parse_status_line("2x4 message").is_err());
}

#[test]
fn test_rejects_overlong_code() {
    // "2115 ..." must not be read as code 211
    assert!(parse_status_line("2115 not a real code").is_err());
}

#[test]
fn test_tolerates_missing_separator() {
    let (code, msg) = parse_status_line("200ready").unwrap();
    assert_eq!(code, 200);
    assert_eq!(msg, "ready");
}

#[test]
fn test_tolerates_leading_bom() {
    let (code, msg) = parse_status_line("\u{FEFF}215 list follows").unwrap();
    assert_eq!(code, 215);
    assert_eq!(msg, "list follows");
}

#[test]
fn test_trailing_text_after_code_is_arbitrary() {
    // Anything after the code is free text and must be tolerated
    let (code, msg) = parse_status_line("200 anything at all, even 999 or tabs\there").unwrap();
    assert_eq!(code, 200);
    assert_eq!(msg, "anything at all, even 999 or tabs\there");
}
