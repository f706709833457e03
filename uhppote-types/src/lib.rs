//! # uhppote-types
//!
//! Typed records for the UHPPOTE access controller protocol:
//! - Controller references (serial number with optional address/protocol)
//! - Response records (controller identity, status, cards, events, time profiles)
//! - Field types with fixed wire semantics (MAC addresses, door permissions,
//!   weekday masks, anti-passback modes)

pub mod card;
pub mod controller;
pub mod door;
pub mod error;
pub mod event;
pub mod profile;
pub mod task;

pub use card::{Card, Permission, CARD_DELETED};
pub use controller::{Controller, ControllerInfo, ListenerConfig, MacAddr, Protocol};
pub use door::{AntiPassback, DoorControl, DoorMode, Interlock};
pub use error::{Error, Result};
pub use event::{Event, ListenEvent, Status, EVENT_OVERWRITTEN};
pub use profile::{TimeProfile, TimeSegment, Weekdays};
pub use task::{Task, TaskType};
