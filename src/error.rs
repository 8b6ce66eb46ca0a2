//! NNTP error types

use thiserror::Error;

/// NNTP protocol and connection errors
#[derive(Error, Debug)]
pub enum NntpError {
    /// IO error during network operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection timeout
    #[error("Connection timeout")]
    Timeout,

    /// Connection closed while waiting for a response line
    #[error("Connection closed")]
    ConnectionClosed,

    /// Server greeting did not carry status 200
    ///
    /// Carries the greeting line exactly as received.
    #[error("Handshake rejected: {0}")]
    Handshake(String),

    /// Response status code did not match the code the command requires
    #[error("Unexpected status {got} (want {want}): {response}")]
    UnexpectedStatus {
        /// Status code the server sent
        got: u16,
        /// Status code the command expects
        want: u16,
        /// Raw response line for diagnostics
        response: String,
    },

    /// Response line without a parseable 3-digit status code
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Status line matched the expected code but failed structural parsing
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Multi-line body ended before the "." terminator
    #[error("Truncated multi-line response")]
    Truncated,
}

/// Result type alias using NntpError
pub type Result<T> = std::result::Result<T, NntpError>;
