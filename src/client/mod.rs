//! NNTP client implementation

mod connection;
mod group_ops;
mod io;
mod listing;
mod overview;
mod state;

use crate::config::ServerConfig;
use state::SessionState;
use tokio::io::BufReader;
use tokio::net::TcpStream;
use tracing::debug;

pub use overview::XoverProgress;

/// Async NNTP client for overview retrieval
///
/// Owns the connection and its read cursor as a single unit; all reads are
/// strictly sequential through it. One command is in flight at a time — the
/// client is not meant to be shared across tasks.
///
/// # Example
///
/// ```no_run
/// use nntp_overview::{NntpClient, ServerConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ServerConfig::plain("news.example.org");
/// let mut client = NntpClient::connect(config).await?;
/// client.mode_reader().await?;
///
/// let group = client.select_group("comp.lang.rust").await?;
/// let entries = client.xover(&group).await?;
/// println!("{} overview entries", entries.len());
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct NntpClient {
    /// Buffered stream (transport plus line cursor)
    stream: BufReader<TcpStream>,
    /// Session state
    state: SessionState,
    /// Server configuration
    config: ServerConfig,
    /// Currently selected newsgroup
    current_group: Option<String>,
}

impl std::fmt::Debug for NntpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NntpClient")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("current_group", &self.current_group)
            .finish_non_exhaustive()
    }
}

impl NntpClient {
    /// Get the currently selected newsgroup, if any
    pub fn current_group(&self) -> Option<&str> {
        self.current_group.as_deref()
    }

    /// Check if the session has switched to reader mode
    pub fn is_reader_mode(&self) -> bool {
        matches!(
            self.state,
            SessionState::ReaderMode | SessionState::GroupSelected
        )
    }

    /// The server this client is connected to
    pub fn server(&self) -> &ServerConfig {
        &self.config
    }
}

impl Drop for NntpClient {
    fn drop(&mut self) {
        debug!("NntpClient dropped");
    }
}
