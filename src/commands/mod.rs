//! NNTP command builders and response parsers

pub mod group;
pub mod list;
pub mod over;
pub mod response;

pub use group::*;
pub use list::*;
pub use over::*;
pub use response::*;

// Session management commands

/// Build MODE READER command (RFC 3977 §5.3)
///
/// Instructs the server to switch to reader mode (for news reading clients).
pub fn mode_reader() -> &'static str {
    "MODE READER\r\n"
}

/// Build QUIT command
pub fn quit() -> &'static str {
    "QUIT\r\n"
}
