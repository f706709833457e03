//! # uhppote-core
//!
//! Codec for the UHPPOTE access controller protocol.
//!
//! Requests and responses are fixed-size 64 byte packets with fields at fixed
//! offsets:
//! - uint16/uint24/uint32 values are little-endian
//! - date/time values are BCD encoded
//! - boolean values are a single 0/1 byte
//! - IPv4 addresses and MAC addresses are raw bytes
//!
//! This crate is pure encoding/decoding - no I/O.

pub mod decode;
pub mod encode;
pub mod error;
pub mod function;
pub mod packet;

pub use error::{Error, Result};
pub use function::Function;
pub use packet::Packet;

/// Start-of-message byte for all requests and almost all responses
pub const SOM: u8 = 0x17;

/// Start-of-message byte in event packets from controllers with v6.62
/// firmware
pub const SOM_V6_62: u8 = 0x19;

/// Packet size - all requests and responses are exactly 64 bytes
pub const PACKET_SIZE: usize = 64;

/// Magic word required by 'destructive' requests
pub const MAGIC: u32 = 0x55AA_AA55;

/// Offset of the controller serial number in every request and response
pub const CONTROLLER_OFFSET: usize = 4;
