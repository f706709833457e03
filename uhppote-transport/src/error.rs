//! Transport errors

use std::io;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or inconsistent network configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No reply before the timeout expired
    #[error("no reply from controller within {}ms", .0.as_millis())]
    Timeout(Duration),

    /// TCP connection closed before a complete reply was received
    #[error("connection closed by controller")]
    ConnectionClosed,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
