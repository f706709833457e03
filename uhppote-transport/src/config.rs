//! Network configuration

use std::net::{Ipv4Addr, SocketAddrV4};

use crate::error::{Error, Result};

/// Default controller port (UDP and TCP)
pub const CONTROLLER_PORT: u16 = 60000;

/// Default event listener port
pub const LISTEN_PORT: u16 = 60001;

/// Network configuration for controller exchanges and event listening
///
/// The configuration is an immutable value captured at client construction -
/// there is no ambient or global state.
///
/// # Examples
///
/// ```
/// use uhppote_transport::Config;
///
/// let config = Config::new()
///     .with_broadcast("192.168.1.255:60000".parse().unwrap())
///     .with_debug(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Local address for request sockets
    pub bind: SocketAddrV4,

    /// Destination for broadcast requests
    pub broadcast: SocketAddrV4,

    /// Local address for the event listener socket
    pub listen: SocketAddrV4,

    /// Hex-dump sent/received packets to the log
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0),
            broadcast: SocketAddrV4::new(Ipv4Addr::BROADCAST, CONTROLLER_PORT),
            listen: SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, LISTEN_PORT),
            debug: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bind(mut self, bind: SocketAddrV4) -> Self {
        self.bind = bind;
        self
    }

    pub fn with_broadcast(mut self, broadcast: SocketAddrV4) -> Self {
        self.broadcast = broadcast;
        self
    }

    pub fn with_listen(mut self, listen: SocketAddrV4) -> Self {
        self.listen = listen;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// A request socket bound to the broadcast port would receive its own
    /// broadcast requests (and controller events). Rejected before any send.
    pub(crate) fn check(&self) -> Result<()> {
        if self.bind.port() != 0 && self.bind.port() == self.broadcast.port() {
            return Err(Error::Configuration(format!(
                "bind port {} conflicts with broadcast port {}",
                self.bind.port(),
                self.broadcast.port()
            )));
        }

        Ok(())
    }
}
