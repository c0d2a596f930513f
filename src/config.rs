//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::Result;
use crate::cli::Cli;

/// How long a single request may take before the server gives up on it.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Listen configuration for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface the listener binds to.
    pub host: IpAddr,
    /// TCP port the listener binds to.
    pub port: u16,
}

impl ServerConfig {
    /// Build a config from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            host: cli.host.parse()?,
            port: cli.port,
        })
    }

    /// The socket address to bind.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}
