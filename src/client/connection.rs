//! Connection management for the NNTP client
//!
//! TCP establishment, socket tuning, and server greeting validation.

use std::net::ToSocketAddrs;
use std::time::Duration;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::io::BufReader;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::NntpClient;
use super::state::SessionState;
use crate::commands;
use crate::config::ServerConfig;
use crate::error::{NntpError, Result};
use crate::response::codes;

/// TCP connection timeout in seconds
const TCP_CONNECT_TIMEOUT_SECS: u64 = 120;

/// BufReader capacity for bulk overview reads (64KB)
const BUFREADER_CAPACITY: usize = 64 * 1024;

/// Socket receive buffer size (1MB); XOVER over a large range arrives as
/// one long burst
const RECV_BUFFER_SIZE: usize = 1024 * 1024;

impl NntpClient {
    /// Connect to an NNTP server
    ///
    /// Establishes the TCP transport, then reads the server greeting, which
    /// must carry status 200. Any other greeting fails the handshake with
    /// the raw line preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::Io`] - TCP connection fails (DNS resolution, refused, etc.)
    /// - [`NntpError::Timeout`] - connection attempt times out
    /// - [`NntpError::Handshake`] - greeting status was not 200
    pub async fn connect(config: ServerConfig) -> Result<Self> {
        debug!("Connecting to NNTP server {}:{}", config.host, config.port);

        let socket_addr = config.addr().to_socket_addrs()?.next().ok_or_else(|| {
            NntpError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "no address resolved",
            ))
        })?;

        let domain = if socket_addr.is_ipv4() {
            Domain::IPV4
        } else {
            Domain::IPV6
        };
        let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

        // Low latency for the command/response cycle
        socket.set_nodelay(true)?;

        if let Err(e) = socket.set_recv_buffer_size(RECV_BUFFER_SIZE) {
            warn!(
                "Failed to set receive buffer size to {} bytes: {}",
                RECV_BUFFER_SIZE, e
            );
        }

        // socket2 connect is blocking; keep it off the async runtime, and
        // switch to non-blocking only after the connect completes
        let tcp_stream = timeout(
            Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
            tokio::task::spawn_blocking(move || -> std::io::Result<std::net::TcpStream> {
                socket.connect(&socket_addr.into())?;
                socket.set_nonblocking(true)?;
                Ok(socket.into())
            }),
        )
        .await
        .map_err(|_| NntpError::Timeout)?
        .map_err(|e| NntpError::Io(std::io::Error::other(format!("task join error: {}", e))))?
        .map_err(NntpError::Io)?;

        let tcp_stream = TcpStream::from_std(tcp_stream)?;
        let stream = BufReader::with_capacity(BUFREADER_CAPACITY, tcp_stream);

        let mut client = Self {
            stream,
            state: SessionState::Greeted,
            config,
            current_group: None,
        };

        let greeting = client.read_raw_line().await?;
        debug!("Server greeting: {}", greeting);

        match commands::parse_status_line(&greeting) {
            Ok((code, _)) if code == codes::READY_POSTING_ALLOWED => {}
            _ => return Err(NntpError::Handshake(greeting)),
        }

        Ok(client)
    }

    /// Switch the session to reader mode
    pub async fn mode_reader(&mut self) -> Result<()> {
        self.exchange(commands::mode_reader(), codes::READY_POSTING_ALLOWED)
            .await?;
        self.state = SessionState::ReaderMode;
        debug!("Reader mode selected");
        Ok(())
    }

    /// End the session, consuming the client
    pub async fn quit(mut self) -> Result<()> {
        self.exchange(commands::quit(), codes::CLOSING_CONNECTION)
            .await?;
        debug!("Session closed");
        Ok(())
    }
}
