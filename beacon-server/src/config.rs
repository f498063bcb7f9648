use crate::error::{RelayError, RelayResult};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Runtime settings of the relay server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// Capacity of the hub command queue shared by all sessions.
    pub command_buffer: usize,
    /// Interval between WebSocket pings sent to each session.
    pub heartbeat_interval: Duration,
    /// Longest a single socket write may take before the session is dropped.
    pub write_timeout: Duration,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn validate(&self) -> RelayResult<()> {
        if self.command_buffer == 0 {
            return Err(RelayError::InvalidConfig("command buffer must be positive"));
        }
        if self.heartbeat_interval.is_zero() {
            return Err(RelayError::InvalidConfig("heartbeat interval must be positive"));
        }
        if self.write_timeout.is_zero() {
            return Err(RelayError::InvalidConfig("write timeout must be positive"));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 4000,
            command_buffer: 256,
            heartbeat_interval: Duration::from_secs(30),
            write_timeout: Duration::from_secs(10),
        }
    }
}
