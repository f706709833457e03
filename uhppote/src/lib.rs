//! # uhppote
//!
//! Rust client for the UHPPOTE access controller UDP/TCP protocol.
//!
//! ## Features
//!
//! - Type-safe request/response API for the full 64-byte wire protocol
//! - Async/await API using Tokio, with a [`blocking`] wrapper
//! - Broadcast discovery, directed UDP and TCP transports
//! - Event listening for controller-pushed status packets
//!
//! ## Quick Start
//!
//! ```no_run
//! use uhppote::{Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> uhppote::Result<()> {
//!     let client = Client::new(Config::default());
//!
//!     // Discover controllers on the local network
//!     for controller in client.get_all_controllers().await? {
//!         println!("{}", controller);
//!     }
//!
//!     // Unlock door 3 on a specific controller
//!     client.open_door(405419896, 3).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod blocking;
pub mod client;
pub mod error;
pub mod listener;

// Re-exports
pub use client::Client;
pub use error::{Error, Result};
pub use listener::{listen, EventListener, ListenerHandle};

// Re-export transport configuration
pub use uhppote_transport::Config;

// Re-export types
pub use uhppote_types::{
    AntiPassback, Card, Controller, ControllerInfo, DoorControl, DoorMode, Event, Interlock,
    ListenEvent, ListenerConfig, MacAddr, Permission, Protocol, Status, Task, TaskType,
    TimeProfile, TimeSegment, Weekdays,
};
