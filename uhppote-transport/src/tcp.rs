//! One-shot TCP exchanges
//!
//! A TCP exchange is connect/send/receive/close per request - no connection
//! is held between calls. The whole exchange is bounded by the timeout.

use std::io;
use std::net::SocketAddrV4;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use uhppote_core::{Packet, PACKET_SIZE};

use crate::config::Config;
use crate::dump::dump;
use crate::error::{Error, Result};

/// Connects to a controller, sends the request and reads the 64-byte reply.
pub async fn exchange(
    config: &Config,
    address: SocketAddrV4,
    request: &Packet,
    wait: Duration,
) -> Result<BytesMut> {
    match timeout(wait, exchange_inner(config, address, request)).await {
        Err(_) => Err(Error::Timeout(wait)),
        Ok(result) => result,
    }
}

async fn exchange_inner(
    config: &Config,
    address: SocketAddrV4,
    request: &Packet,
) -> Result<BytesMut> {
    let mut stream = TcpStream::connect(address).await?;

    if config.debug {
        dump(request.as_bytes(), "request");
    }

    debug!("request to {} (TCP)", address);
    stream.write_all(request.as_bytes()).await?;

    let mut reply = [0u8; PACKET_SIZE];
    stream.read_exact(&mut reply).await.map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Error::ConnectionClosed
        } else {
            Error::Io(e)
        }
    })?;

    if config.debug {
        dump(&reply, "reply");
    }

    Ok(BytesMut::from(&reply[..]))
}

/// Connects to a controller and sends a request without reading a reply.
pub async fn send(
    config: &Config,
    address: SocketAddrV4,
    request: &Packet,
    wait: Duration,
) -> Result<()> {
    let result = timeout(wait, async {
        let mut stream = TcpStream::connect(address).await?;

        if config.debug {
            dump(request.as_bytes(), "request");
        }

        debug!("request to {} (TCP, no reply)", address);
        stream.write_all(request.as_bytes()).await?;

        Ok(())
    })
    .await;

    match result {
        Err(_) => Err(Error::Timeout(wait)),
        Ok(result) => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::net::TcpListener;

    use uhppote_core::encode;

    #[tokio::test]
    async fn test_tcp_exchange() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = match listener.local_addr().unwrap() {
            std::net::SocketAddr::V4(addr) => addr,
            _ => unreachable!(),
        };

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();

            let mut request = [0u8; 64];
            stream.read_exact(&mut request).await.unwrap();

            let mut reply = [0u8; 64];
            reply[0] = 0x17;
            reply[1] = 0x94;
            reply[4..8].copy_from_slice(&request[4..8]);
            stream.write_all(&reply).await.unwrap();
        });

        let config = Config::new();
        let request = encode::get_controller_request(405419896);

        let reply = exchange(&config, address, &request, Duration::from_secs(1))
            .await
            .unwrap();

        assert_eq!(reply.len(), 64);
        assert_eq!(&reply[4..8], &[0x78, 0x37, 0x2a, 0x18]);
    }

    #[tokio::test]
    async fn test_tcp_exchange_connection_closed() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = match listener.local_addr().unwrap() {
            std::net::SocketAddr::V4(addr) => addr,
            _ => unreachable!(),
        };

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();

            let mut request = [0u8; 64];
            stream.read_exact(&mut request).await.unwrap();
            // close without replying
        });

        let config = Config::new();
        let request = encode::get_controller_request(405419896);

        let result = exchange(&config, address, &request, Duration::from_secs(1)).await;

        assert!(matches!(result, Err(Error::ConnectionClosed)));
    }
}
