//! Request/reply engine
//!
//! Resolves a controller reference to a destination and performs a single
//! bounded exchange. Timeouts are clamped to the supported range before use.

use std::time::Duration;

use bytes::BytesMut;

use uhppote_core::Packet;
use uhppote_types::Controller;

use crate::config::Config;
use crate::error::Result;
use crate::resolve::{resolve, Destination};
use crate::{clamp_timeout, tcp, udp};

/// Sends a request to a controller and returns the raw 64-byte reply.
pub async fn exchange(
    config: &Config,
    controller: &Controller,
    request: &Packet,
    wait: Duration,
) -> Result<BytesMut> {
    let wait = clamp_timeout(wait);

    match resolve(controller)? {
        Destination::Broadcast => udp::broadcast_exchange(config, request, wait).await,
        Destination::Unicast(address) => {
            udp::unicast_exchange(config, address, request, wait).await
        }
        Destination::Tcp(address) => tcp::exchange(config, address, request, wait).await,
    }
}

/// Sends a request to a controller without waiting for a reply (set-ipv4 is
/// fire-and-forget - the controller never acknowledges it).
pub async fn send_no_reply(
    config: &Config,
    controller: &Controller,
    request: &Packet,
    wait: Duration,
) -> Result<()> {
    let wait = clamp_timeout(wait);

    match resolve(controller)? {
        Destination::Broadcast => udp::broadcast_send(config, request).await,
        Destination::Unicast(address) => udp::unicast_send(config, address, request).await,
        Destination::Tcp(address) => tcp::send(config, address, request, wait).await,
    }
}

/// Broadcasts a request and collects every reply received before the timeout
/// expires - used for controller discovery.
pub async fn broadcast_collect(
    config: &Config,
    request: &Packet,
    wait: Duration,
) -> Result<Vec<BytesMut>> {
    let wait = clamp_timeout(wait);

    udp::broadcast_collect(config, request, wait).await
}
