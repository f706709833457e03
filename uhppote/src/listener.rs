//! Controller event listeners
//!
//! Controllers push events to the host configured by set-listener as
//! unsolicited 64-byte status packets. Two listening models are provided:
//!
//! - [`listen`] - a blocking loop on a dedicated thread, for applications
//!   without an async runtime
//! - [`EventListener`] - a cooperative tokio loop with a cancellation handle
//!
//! In both models a packet that does not decode to an event is dropped, not
//! an error - anything can arrive on an open UDP port.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use uhppote_core::decode;
use uhppote_transport::{udp, Config};
use uhppote_types::ListenEvent;

use crate::error::{Error, Result};

/// Listens for controller events on the configured listen address, invoking
/// the handler for each event in arrival order.
///
/// Blocks forever: decode failures are silently dropped and the loop
/// continues; socket errors are fatal and propagate.
pub fn listen<H>(config: &Config, mut handler: H) -> Result<()>
where
    H: FnMut(ListenEvent),
{
    let socket = udp::bind_listener(config)?;
    let mut buf = [0u8; 1024];

    loop {
        let (n, addr) = socket.recv_from(&mut buf)?;

        match decode::listen_event(&buf[..n]) {
            Ok(event) => handler(event),
            Err(e) => trace!("dropping {} byte packet from {}: {}", n, addr, e),
        }
    }
}

/// Cooperative event listener
///
/// Receives packets on a tokio task and spawns a fire-and-forget task per
/// packet for decode and dispatch - a slow handler delays nothing and there
/// is no backpressure.
///
/// # Examples
///
/// ```no_run
/// use uhppote::{Config, EventListener};
///
/// #[tokio::main]
/// async fn main() -> uhppote::Result<()> {
///     let listener = EventListener::new(Config::default())
///         .on_error(|e| eprintln!("listen: {}", e))
///         .on_close(|| println!("closed"));
///
///     let handle = listener
///         .listen(|event| println!("{}: event {}", event.controller, event.event.index))
///         .await?;
///
///     // ... later
///     handle.close().await;
///
///     Ok(())
/// }
/// ```
pub struct EventListener {
    config: Config,
    on_error: Option<Arc<dyn Fn(Error) + Send + Sync>>,
    on_close: Option<Box<dyn FnOnce() + Send>>,
}

impl EventListener {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            on_error: None,
            on_close: None,
        }
    }

    /// Callback for per-packet faults (receive errors, undecodable
    /// packets). Without a callback, faults are dropped.
    pub fn on_error(mut self, f: impl Fn(Error) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(f));
        self
    }

    /// Callback invoked exactly once when the listener shuts down.
    pub fn on_close(mut self, f: impl FnOnce() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    /// Binds the listen socket and starts the receive loop. Bind errors
    /// always surface here rather than inside the loop.
    pub async fn listen<H>(self, handler: H) -> Result<ListenerHandle>
    where
        H: Fn(ListenEvent) + Send + Sync + 'static,
    {
        let socket = udp::bind_listener_async(&self.config).await?;
        let handler = Arc::new(handler);
        let on_error = self.on_error;
        let on_close = self.on_close;

        let (shutdown, mut cancelled) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut buf = [0u8; 1024];

            loop {
                tokio::select! {
                    _ = cancelled.changed() => break,

                    received = socket.recv_from(&mut buf) => {
                        match received {
                            Err(e) => {
                                if let Some(on_error) = &on_error {
                                    on_error(e.into());
                                }
                            }

                            Ok((n, _)) => {
                                let packet = buf[..n].to_vec();
                                let handler = Arc::clone(&handler);
                                let on_error = on_error.clone();

                                tokio::spawn(async move {
                                    match decode::listen_event(&packet) {
                                        Ok(event) => handler(event),
                                        Err(e) => {
                                            if let Some(on_error) = &on_error {
                                                on_error(e.into());
                                            }
                                        }
                                    }
                                });
                            }
                        }
                    }
                }
            }

            debug!("event listener closed");

            if let Some(on_close) = on_close {
                on_close();
            }
        });

        Ok(ListenerHandle { shutdown, task })
    }
}

/// Handle to a running [`EventListener`]
///
/// Dropping the handle without calling [`close`](Self::close) detaches the
/// listener - it keeps running for the lifetime of the runtime.
pub struct ListenerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ListenerHandle {
    /// Stops the receive loop and waits for it to wind down. The close
    /// callback fires before this returns.
    pub async fn close(self) {
        // The receiver is gone only if the loop already exited.
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }

    /// True once the receive loop has exited.
    pub fn is_closed(&self) -> bool {
        self.task.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use std::net::SocketAddrV4;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use tokio::net::UdpSocket;

    #[rustfmt::skip]
    const EVENT: [u8; 64] = [
        0x17, 0x20, 0x00, 0x00, 0x78, 0x37, 0x2a, 0x18, 0x46, 0x00, 0x00, 0x00, 0x02, 0x01, 0x03, 0x01,
        0x9f, 0x98, 0x7c, 0x00, 0x20, 0x24, 0x02, 0x22, 0x10, 0x23, 0x40, 0x2c, 0x01, 0x00, 0x00, 0x01,
        0x01, 0x00, 0x01, 0x01, 0x03, 0x10, 0x23, 0x40, 0x7b, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x27, 0x0a, 0x05, 0x24, 0x02, 0x22, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    fn listen_config() -> (Config, SocketAddrV4) {
        // OS-assigned port, discovered after bind - tests poke the port into
        // the config up front by binding a throwaway socket
        let probe = std::net::UdpSocket::bind("127.0.0.1:0").unwrap();
        let addr = match probe.local_addr().unwrap() {
            std::net::SocketAddr::V4(addr) => addr,
            _ => unreachable!(),
        };
        drop(probe);

        (Config::new().with_listen(addr), addr)
    }

    #[tokio::test]
    async fn test_listener_receives_events() {
        let (config, addr) = listen_config();

        let received = Arc::new(Mutex::new(Vec::new()));
        let events = Arc::clone(&received);

        let handle = EventListener::new(config)
            .listen(move |event| {
                events.lock().unwrap().push(event.event.index);
            })
            .await
            .unwrap();

        let sender = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        sender.send_to(&EVENT, addr).await.unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(received.lock().unwrap().as_slice(), &[70]);

        handle.close().await;
    }

    #[tokio::test]
    async fn test_listener_drops_undecodable_packets() {
        let (config, addr) = listen_config();

        let count = Arc::new(AtomicUsize::new(0));
        let errors = Arc::new(AtomicUsize::new(0));

        let events = Arc::clone(&count);
        let faults = Arc::clone(&errors);

        let handle = EventListener::new(config)
            .on_error(move |_| {
                faults.fetch_add(1, Ordering::SeqCst);
            })
            .listen(move |_| {
                events.fetch_add(1, Ordering::SeqCst);
            })
            .await
            .unwrap();

        let sender = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        sender.send_to(&[0x17, 0x20, 0x00], addr).await.unwrap();
        sender.send_to(&EVENT, addr).await.unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(errors.load(Ordering::SeqCst), 1);

        handle.close().await;
    }

    #[tokio::test]
    async fn test_close_fires_close_callback_once() {
        let (config, _) = listen_config();

        let closed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closed);

        let handle = EventListener::new(config)
            .on_close(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .listen(|_| {})
            .await
            .unwrap();

        assert!(!handle.is_closed());

        handle.close().await;

        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_bind_error_surfaces() {
        let (config, addr) = listen_config();

        // occupy the port
        let _holder = UdpSocket::bind(addr).await.unwrap();

        let result = EventListener::new(config).listen(|_| {}).await;

        assert!(result.is_err());
    }
}
