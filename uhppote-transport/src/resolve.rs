//! Controller address and transport resolution

use std::net::SocketAddrV4;

use uhppote_types::{Controller, Protocol};

use crate::error::{Error, Result};

/// Resolved destination for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// UDP broadcast to the configured broadcast address
    Broadcast,

    /// UDP unicast to the controller's address
    Unicast(SocketAddrV4),

    /// TCP to the controller's address
    Tcp(SocketAddrV4),
}

/// Resolves a controller reference to a destination.
///
/// - an explicit protocol with an address is used exactly as given
/// - an address without a protocol is unicast UDP
/// - a bare serial number is broadcast UDP
/// - TCP without an address is a configuration error
pub fn resolve(controller: &Controller) -> Result<Destination> {
    match (controller.protocol(), controller.address()) {
        (Some(Protocol::Tcp), Some(address)) => Ok(Destination::Tcp(address)),
        (Some(Protocol::Tcp), None) => Err(Error::Configuration(format!(
            "controller {}: TCP requires an address",
            controller.id()
        ))),
        (Some(Protocol::Udp), Some(address)) => Ok(Destination::Unicast(address)),
        (Some(Protocol::Udp), None) => Ok(Destination::Broadcast),
        (None, Some(address)) => Ok(Destination::Unicast(address)),
        (None, None) => Ok(Destination::Broadcast),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_id_resolves_to_broadcast() {
        let controller = Controller::from(405419896);

        assert_eq!(resolve(&controller).unwrap(), Destination::Broadcast);
    }

    #[test]
    fn test_address_resolves_to_unicast() {
        let addr: SocketAddrV4 = "192.168.1.100:60000".parse().unwrap();
        let controller = Controller::at(405419896, addr);

        assert_eq!(resolve(&controller).unwrap(), Destination::Unicast(addr));
    }

    #[test]
    fn test_explicit_tcp() {
        let addr: SocketAddrV4 = "192.168.1.100:60000".parse().unwrap();
        let controller = Controller::at(405419896, addr).via(Protocol::Tcp);

        assert_eq!(resolve(&controller).unwrap(), Destination::Tcp(addr));
    }

    #[test]
    fn test_explicit_udp_without_address_broadcasts() {
        let controller = Controller::from(405419896).via(Protocol::Udp);

        assert_eq!(resolve(&controller).unwrap(), Destination::Broadcast);
    }

    #[test]
    fn test_tcp_without_address_is_rejected() {
        let controller = Controller::from(405419896).via(Protocol::Tcp);

        assert!(matches!(
            resolve(&controller),
            Err(Error::Configuration(_))
        ));
    }
}
