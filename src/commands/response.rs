//! Core NNTP response parsing utilities

use crate::error::{NntpError, Result};

/// Parse an NNTP response line into code and message
///
/// The message is whatever follows the 3-digit code, with the separating
/// space removed when present. Servers that glue the message directly to
/// the code are tolerated; codes of four or more digits are not.
pub fn parse_status_line(line: &str) -> Result<(u16, String)> {
    // Some broken servers/proxies prepend a UTF-8 BOM
    let line = line.trim_start_matches('\u{FEFF}');

    let bytes = line.as_bytes();
    if bytes.len() < 3 || !bytes[..3].iter().all(u8::is_ascii_digit) {
        return Err(invalid(line));
    }

    // A fourth digit means the code is not 3-digit ("2005 ..." is garbage,
    // not code 200)
    if bytes.len() > 3 && bytes[3].is_ascii_digit() {
        return Err(invalid(line));
    }

    let code = line[..3].parse::<u16>().map_err(|_| invalid(line))?;

    let message = match bytes.get(3) {
        Some(b' ') => line[4..].to_string(),
        Some(_) => line[3..].to_string(),
        None => String::new(),
    };

    Ok((code, message))
}

fn invalid(line: &str) -> NntpError {
    NntpError::InvalidResponse(line.chars().take(100).collect())
}
