//! NNTP server configuration

/// NNTP server configuration
///
/// Address of the server to connect to. Authentication and TLS are not
/// supported by this crate, so host and port are the whole surface.
///
/// # Example
///
/// ```
/// use nntp_overview::ServerConfig;
///
/// // Standard NNTP port (119)
/// let config = ServerConfig::plain("news.example.org");
///
/// // Custom port
/// let config = ServerConfig::new("news.example.org", 1119);
/// ```
#[must_use]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerConfig {
    /// Server hostname (e.g., "news.example.org")
    pub host: String,

    /// Server port (typically 119)
    pub port: u16,
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Create a configuration for the standard NNTP port (119)
    pub fn plain(host: impl Into<String>) -> Self {
        Self::new(host, 119)
    }

    /// The `host:port` address string used to dial the server
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
