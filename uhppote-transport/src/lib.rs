//! Transport layer for the UHPPOTE protocol
//!
//! Sends 64-byte request packets to access controllers over UDP broadcast,
//! UDP unicast or TCP, and binds the UDP socket used to receive controller
//! events.
//!
//! Every exchange is a single attempt bounded by a timeout - there are no
//! retries at this layer.

pub mod config;
pub mod error;
pub mod exchange;
pub mod resolve;
pub mod tcp;
pub mod udp;

mod dump;

pub use config::Config;
pub use error::{Error, Result};
pub use exchange::{broadcast_collect, exchange, send_no_reply};
pub use resolve::{resolve, Destination};

use std::time::Duration;

/// Default exchange timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2500);

/// Minimum exchange timeout
pub const MIN_TIMEOUT: Duration = Duration::from_millis(50);

/// Maximum exchange timeout
pub const MAX_TIMEOUT: Duration = Duration::from_secs(30);

/// Clamps a timeout to the supported [50ms..30s] range.
pub fn clamp_timeout(timeout: Duration) -> Duration {
    timeout.clamp(MIN_TIMEOUT, MAX_TIMEOUT)
}
