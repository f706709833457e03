//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("codec error: {0}")]
    Codec(#[from] uhppote_core::Error),

    #[error("transport error: {0}")]
    Transport(#[from] uhppote_transport::Error),

    #[error("type error: {0}")]
    Types(#[from] uhppote_types::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Controller has no record for the card
    #[error("card {card} not found")]
    CardNotFound { card: u32 },

    /// Card list record at the index is a deleted-card tombstone
    #[error("card at index {index} has been deleted")]
    CardDeleted { index: u32 },

    /// Controller has no event at the index
    #[error("no event at index {index}")]
    EventNotFound { index: u32 },

    /// Event at the index precedes the earliest retained event
    #[error("event at index {index} has been overwritten")]
    EventOverwritten { index: u32 },

    /// Controller has no time profile with the ID
    #[error("time profile {profile_id} not defined")]
    TimeProfileNotFound { profile_id: u8 },
}

impl Error {
    /// True if the error is an absence/tombstone classification rather than
    /// a communication or protocol fault.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CardNotFound { .. }
                | Self::CardDeleted { .. }
                | Self::EventNotFound { .. }
                | Self::EventOverwritten { .. }
                | Self::TimeProfileNotFound { .. }
        )
    }
}
