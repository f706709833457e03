//! UDP broadcast/unicast exchanges and listener socket binding

use std::net::SocketAddrV4;
use std::time::Duration;

use bytes::BytesMut;
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, trace};

use uhppote_core::{Packet, CONTROLLER_OFFSET, PACKET_SIZE};

use crate::config::Config;
use crate::dump::dump;
use crate::error::{Error, Result};

async fn bind(config: &Config, broadcast: bool) -> Result<UdpSocket> {
    config.check()?;

    let socket = UdpSocket::bind(config.bind).await?;
    if broadcast {
        socket.set_broadcast(true)?;
    }

    Ok(socket)
}

fn serial(packet: &[u8]) -> &[u8] {
    &packet[CONTROLLER_OFFSET..CONTROLLER_OFFSET + 4]
}

/// Broadcasts a request and waits for the reply from the addressed
/// controller.
///
/// Every controller on the subnet receives the broadcast; replies from other
/// controllers and non-64-byte datagrams are discarded until the matching
/// reply arrives or the timeout expires.
pub async fn broadcast_exchange(
    config: &Config,
    request: &Packet,
    wait: Duration,
) -> Result<BytesMut> {
    let deadline = Instant::now() + wait;
    let socket = bind(config, true).await?;

    if config.debug {
        dump(request.as_bytes(), "request");
    }

    debug!("broadcast request to {}", config.broadcast);
    socket.send_to(request.as_bytes(), config.broadcast).await?;

    let expected = serial(request.as_bytes());
    let mut buf = [0u8; 1024];

    loop {
        let (n, addr) = match timeout_at(deadline, socket.recv_from(&mut buf)).await {
            Err(_) => return Err(Error::Timeout(wait)),
            Ok(received) => received?,
        };

        if n != PACKET_SIZE {
            trace!("discarding {} byte datagram from {}", n, addr);
            continue;
        }

        if serial(&buf[..n]) != expected {
            trace!("discarding reply from another controller ({})", addr);
            continue;
        }

        if config.debug {
            dump(&buf[..n], "reply");
        }

        return Ok(BytesMut::from(&buf[..n]));
    }
}

/// Broadcasts a request and collects all 64-byte replies received before the
/// timeout expires. The timeout elapsing is the normal exit, not an error.
pub async fn broadcast_collect(
    config: &Config,
    request: &Packet,
    wait: Duration,
) -> Result<Vec<BytesMut>> {
    let deadline = Instant::now() + wait;
    let socket = bind(config, true).await?;

    if config.debug {
        dump(request.as_bytes(), "request");
    }

    debug!("broadcast request to {}", config.broadcast);
    socket.send_to(request.as_bytes(), config.broadcast).await?;

    let mut replies = Vec::new();
    let mut buf = [0u8; 1024];

    loop {
        let (n, addr) = match timeout_at(deadline, socket.recv_from(&mut buf)).await {
            Err(_) => return Ok(replies),
            Ok(received) => received?,
        };

        if n != PACKET_SIZE {
            trace!("discarding {} byte datagram from {}", n, addr);
            continue;
        }

        if config.debug {
            dump(&buf[..n], "reply");
        }

        replies.push(BytesMut::from(&buf[..n]));
    }
}

/// Sends a request to a single controller and waits for a 64-byte reply.
pub async fn unicast_exchange(
    config: &Config,
    address: SocketAddrV4,
    request: &Packet,
    wait: Duration,
) -> Result<BytesMut> {
    let deadline = Instant::now() + wait;
    let socket = bind(config, false).await?;

    socket.connect(address).await?;

    if config.debug {
        dump(request.as_bytes(), "request");
    }

    debug!("request to {}", address);
    socket.send(request.as_bytes()).await?;

    let mut buf = [0u8; 1024];

    loop {
        let n = match timeout_at(deadline, socket.recv(&mut buf)).await {
            Err(_) => return Err(Error::Timeout(wait)),
            Ok(received) => received?,
        };

        if n != PACKET_SIZE {
            trace!("discarding {} byte datagram from {}", n, address);
            continue;
        }

        if config.debug {
            dump(&buf[..n], "reply");
        }

        return Ok(BytesMut::from(&buf[..n]));
    }
}

/// Broadcasts a request without waiting for a reply.
pub async fn broadcast_send(config: &Config, request: &Packet) -> Result<()> {
    let socket = bind(config, true).await?;

    if config.debug {
        dump(request.as_bytes(), "request");
    }

    debug!("broadcast request to {} (no reply)", config.broadcast);
    socket.send_to(request.as_bytes(), config.broadcast).await?;

    Ok(())
}

/// Sends a request to a single controller without waiting for a reply.
pub async fn unicast_send(config: &Config, address: SocketAddrV4, request: &Packet) -> Result<()> {
    let socket = bind(config, false).await?;

    if config.debug {
        dump(request.as_bytes(), "request");
    }

    debug!("request to {} (no reply)", address);
    socket.send_to(request.as_bytes(), address).await?;

    Ok(())
}

/// Binds the event listener socket (blocking variant).
pub fn bind_listener(config: &Config) -> Result<std::net::UdpSocket> {
    let socket = std::net::UdpSocket::bind(config.listen)?;

    debug!("listening on {}", config.listen);

    Ok(socket)
}

/// Binds the event listener socket (async variant).
pub async fn bind_listener_async(config: &Config) -> Result<UdpSocket> {
    let socket = UdpSocket::bind(config.listen).await?;

    debug!("listening on {}", config.listen);

    Ok(socket)
}
