//! LIST command (RFC 3977 Section 7.6.3)

use crate::response::NntpResponse;

/// Build LIST command
pub fn list() -> &'static str {
    "LIST\r\n"
}

/// Extract the LIST body as raw ordered lines
///
/// Each line is "group high low status"; this crate hands the lines to the
/// caller without further parsing.
pub fn parse_list_response(response: NntpResponse) -> Vec<String> {
    response.lines
}
