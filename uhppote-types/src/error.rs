//! Error types for uhppote-types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Byte value has no mapping to the target enum
    #[error("invalid {field} value: {value}")]
    InvalidValue { field: &'static str, value: u8 },
}
