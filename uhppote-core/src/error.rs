//! Error types for uhppote-core

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Packet encoding/decoding errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Packet is not exactly 64 bytes
    #[error("invalid packet length: expected {expected} bytes, got {actual} bytes")]
    InvalidLength { expected: usize, actual: usize },

    /// Start-of-message byte is not 0x17 (or 0x19 for v6.62 event packets)
    #[error("invalid start-of-message byte 0x{0:02x}")]
    InvalidSom(u8),

    /// Function code does not match the expected response type
    #[error("invalid function code: expected 0x{expected:02x}, got 0x{actual:02x}")]
    InvalidFunction { expected: u8, actual: u8 },

    /// Function code not defined by the protocol
    #[error("unknown function code 0x{0:02x}")]
    UnknownFunction(u8),

    /// Request field value outside the range accepted by the controller
    #[error("{field} out of range: {value}")]
    ValueOutOfRange { field: &'static str, value: u32 },

    /// Date not representable as 4-digit BCD
    #[error("{field} not encodable as BCD")]
    InvalidDate { field: &'static str },

    /// Event packet with event index 0 - the controller has no event to
    /// report
    #[error("packet carries no event")]
    MissingEvent,

    /// Response field value not decodable to its typed representation
    #[error(transparent)]
    Value(#[from] uhppote_types::Error),
}
