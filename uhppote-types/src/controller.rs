//! Controller references and identity records

use std::fmt;
use std::net::{Ipv4Addr, SocketAddrV4};

use chrono::NaiveDate;

/// Default controller UDP/TCP port
pub const DEFAULT_PORT: u16 = 60000;

/// Transport protocol for a request/response exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Udp,
    Tcp,
}

/// Reference to an access controller
///
/// A controller is always identified by its 32-bit serial number. A bare
/// serial number is reachable only via UDP broadcast; a located reference
/// carries the controller's address and an optional transport hint, enabling
/// unicast UDP or TCP.
///
/// # Examples
///
/// ```
/// use uhppote_types::{Controller, Protocol};
///
/// let broadcast_only = Controller::from(405419896);
/// let tcp = Controller::at(405419896, "192.168.1.100:60000".parse().unwrap())
///     .via(Protocol::Tcp);
///
/// assert_eq!(broadcast_only.id(), 405419896);
/// assert_eq!(tcp.id(), 405419896);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Serial number only - requests are broadcast
    Id(u32),

    /// Serial number with a known address and optional transport hint
    Located {
        id: u32,
        address: SocketAddrV4,
        protocol: Option<Protocol>,
    },
}

impl Controller {
    /// Create a located reference from a serial number and address.
    pub fn at(id: u32, address: SocketAddrV4) -> Self {
        Self::Located {
            id,
            address,
            protocol: None,
        }
    }

    /// Create a located reference from a serial number and bare IPv4 address,
    /// defaulting the port to 60000.
    pub fn at_ip(id: u32, ip: Ipv4Addr) -> Self {
        Self::at(id, SocketAddrV4::new(ip, DEFAULT_PORT))
    }

    /// Pin the transport protocol for this reference.
    pub fn via(self, protocol: Protocol) -> Self {
        match self {
            Self::Id(id) => Self::Located {
                id,
                // A bare id has no address - the resolver rejects TCP without one,
                // and UDP without an address falls back to broadcast.
                address: SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, DEFAULT_PORT),
                protocol: Some(protocol),
            },
            Self::Located { id, address, .. } => Self::Located {
                id,
                address,
                protocol: Some(protocol),
            },
        }
    }

    /// Controller serial number.
    pub fn id(&self) -> u32 {
        match self {
            Self::Id(id) => *id,
            Self::Located { id, .. } => *id,
        }
    }

    /// Controller address, if the reference carries one.
    pub fn address(&self) -> Option<SocketAddrV4> {
        match self {
            Self::Id(_) => None,
            Self::Located { address, .. } => {
                if address.ip().is_unspecified() {
                    None
                } else {
                    Some(*address)
                }
            }
        }
    }

    /// Transport hint, if the reference carries one.
    pub fn protocol(&self) -> Option<Protocol> {
        match self {
            Self::Id(_) => None,
            Self::Located { protocol, .. } => *protocol,
        }
    }
}

impl From<u32> for Controller {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Located { id, address, .. } => write!(f, "{}@{}", id, address),
        }
    }
}

/// 48-bit MAC address, displayed as colon-separated hex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacAddr(pub [u8; 6]);

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            m[0], m[1], m[2], m[3], m[4], m[5]
        )
    }
}

/// Controller identity, as reported by a get-controller request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerInfo {
    /// Controller serial number
    pub controller: u32,

    /// Controller IPv4 address
    pub address: Ipv4Addr,

    /// Controller subnet mask
    pub netmask: Ipv4Addr,

    /// Controller gateway address
    pub gateway: Ipv4Addr,

    /// Controller MAC address
    pub mac: MacAddr,

    /// Firmware version, e.g. "v8.92"
    pub version: String,

    /// Firmware release date
    pub date: Option<NaiveDate>,
}

impl fmt::Display for ControllerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "controller {} at {} ({}, {})",
            self.controller, self.address, self.mac, self.version
        )
    }
}

/// Event listener endpoint configured on a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerConfig {
    /// Listener IPv4 address
    pub address: Ipv4Addr,

    /// Listener UDP port
    pub port: u16,

    /// Status auto-send interval in seconds (0: disabled)
    pub interval: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_controller_from_id() {
        let controller = Controller::from(405419896);
        assert_eq!(controller.id(), 405419896);
        assert_eq!(controller.address(), None);
        assert_eq!(controller.protocol(), None);
    }

    #[test]
    fn test_controller_located() {
        let addr: SocketAddrV4 = "192.168.1.100:60000".parse().unwrap();
        let controller = Controller::at(405419896, addr).via(Protocol::Tcp);

        assert_eq!(controller.id(), 405419896);
        assert_eq!(controller.address(), Some(addr));
        assert_eq!(controller.protocol(), Some(Protocol::Tcp));
    }

    #[test]
    fn test_controller_tcp_without_address() {
        let controller = Controller::from(405419896).via(Protocol::Tcp);

        assert_eq!(controller.address(), None);
        assert_eq!(controller.protocol(), Some(Protocol::Tcp));
    }

    #[test]
    fn test_mac_display() {
        let mac = MacAddr([0x00, 0x12, 0x23, 0x34, 0x45, 0x56]);
        assert_eq!(mac.to_string(), "00:12:23:34:45:56");
    }
}
