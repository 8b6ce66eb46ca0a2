//! Low-level I/O operations for NNTP protocol communication
//!
//! Core primitives shared by every command:
//! - Command transmission
//! - Status-line reading with expected-code validation
//! - Dot-terminated multi-line body reading
//!
//! Every command is one cycle through [`NntpClient::exchange`] or
//! [`NntpClient::exchange_multiline`]: exactly one status line is consumed
//! after a command before any body is read.

use super::NntpClient;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::NntpResponse;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt};
use tracing::trace;

/// Strip NNTP dot-stuffing from a body line (leading ".." becomes ".").
fn strip_dot_stuffing(line: &str) -> &str {
    if line.starts_with("..") { &line[1..] } else { line }
}

impl NntpClient {
    /// Send a command line to the server
    pub(super) async fn send_command(&mut self, command: &str) -> Result<()> {
        trace!("Sending command: {}", command.trim_end());
        self.stream.get_mut().write_all(command.as_bytes()).await?;
        self.stream.get_mut().flush().await?;
        Ok(())
    }

    /// Read one line, stripped of its CRLF/LF terminator
    ///
    /// EOF here means the server closed the connection where a status line
    /// was expected.
    pub(super) async fn read_raw_line(&mut self) -> Result<String> {
        let mut line_bytes = Vec::with_capacity(512);
        self.stream.read_until(b'\n', &mut line_bytes).await?;

        if line_bytes.is_empty() {
            return Err(NntpError::ConnectionClosed);
        }

        let line = String::from_utf8_lossy(&line_bytes);
        let line = line.trim_end_matches(['\r', '\n']);
        trace!("Received: {}", line);
        Ok(line.to_string())
    }

    /// Read one status line and validate it against the expected code
    pub(super) async fn read_status_line(&mut self, expected: u16) -> Result<NntpResponse> {
        let line = self.read_raw_line().await?;
        let (code, message) = commands::parse_status_line(&line)?;

        if code != expected {
            return Err(NntpError::UnexpectedStatus {
                got: code,
                want: expected,
                response: line,
            });
        }

        Ok(NntpResponse {
            code,
            message,
            lines: vec![],
        })
    }

    /// Read body lines until the "." terminator
    ///
    /// The terminator is not included in the result; dot-stuffed lines are
    /// unstuffed. EOF before the terminator is a truncated response. Only
    /// CR/LF are trimmed so overview lines keep trailing tabs for empty
    /// final fields.
    pub(super) async fn read_multiline_block(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::with_capacity(64);
        loop {
            let mut line_bytes = Vec::with_capacity(512);
            self.stream.read_until(b'\n', &mut line_bytes).await?;

            if line_bytes.is_empty() {
                return Err(NntpError::Truncated);
            }

            let line = String::from_utf8_lossy(&line_bytes);
            let line = line.trim_end_matches(['\r', '\n']);

            if line == "." {
                break;
            }

            lines.push(strip_dot_stuffing(line).to_string());
        }
        Ok(lines)
    }

    /// One command cycle without a body: send, then validate the status line
    pub(super) async fn exchange(&mut self, command: &str, expected: u16) -> Result<NntpResponse> {
        self.send_command(command).await?;
        self.read_status_line(expected).await
    }

    /// One command cycle with a dot-terminated body after the status line
    pub(super) async fn exchange_multiline(
        &mut self,
        command: &str,
        expected: u16,
    ) -> Result<NntpResponse> {
        self.send_command(command).await?;
        let mut response = self.read_status_line(expected).await?;
        response.lines = self.read_multiline_block().await?;
        Ok(response)
    }
}
