//! Controller events and status records

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Event type byte reported for an index that precedes the earliest
/// retained event (the controller ring buffer has overwritten it)
pub const EVENT_OVERWRITTEN: u8 = 0xFF;

/// A single access/system event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Index of the event in the controller's event list
    pub index: u32,

    /// Event type (0: none, 1: card swipe, 2: door, 3: alarm, 255: overwritten)
    pub event_type: u8,

    /// Access granted/denied
    pub access_granted: bool,

    /// Door [1..4]
    pub door: u8,

    /// Direction (1: in, 2: out)
    pub direction: u8,

    /// Card number (0: none)
    pub card: u32,

    /// Event date/time
    pub timestamp: Option<NaiveDateTime>,

    /// Event reason code
    pub reason: u8,
}

impl Event {
    /// True if the index precedes the earliest event retained by the
    /// controller.
    pub fn is_overwritten(&self) -> bool {
        self.event_type == EVENT_OVERWRITTEN
    }
}

/// Controller status, as reported by a get-status request
///
/// The embedded event is the most recent event, carried in the same packet.
/// An event index of zero means the controller has no event to report and
/// `event` is `None` - zero is never a valid event index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// Controller serial number
    pub controller: u32,

    /// Controller system date
    pub system_date: Option<NaiveDate>,

    /// Controller system time
    pub system_time: Option<NaiveTime>,

    /// Door open sensors, doors 1-4
    pub door_open: [bool; 4],

    /// Pushbutton states, doors 1-4
    pub door_button: [bool; 4],

    /// Relay state bits
    pub relays: u8,

    /// Input state bits
    pub inputs: u8,

    /// System error code
    pub system_error: u8,

    /// Undocumented status byte - wire position is fixed but the semantics
    /// are unknown; treated as opaque
    pub special_info: u8,

    /// Most recent event (None if the controller reported index 0)
    pub event: Option<Event>,

    /// Packet sequence number
    pub sequence_no: u32,
}

/// An event pushed by a controller to its configured listener
///
/// Carries the same layout as a status packet: the event itself plus a
/// snapshot of the controller state at the time of the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenEvent {
    /// Controller serial number
    pub controller: u32,

    /// Controller system date
    pub system_date: Option<NaiveDate>,

    /// Controller system time
    pub system_time: Option<NaiveTime>,

    /// Door open sensors, doors 1-4
    pub door_open: [bool; 4],

    /// Pushbutton states, doors 1-4
    pub door_button: [bool; 4],

    /// Relay state bits
    pub relays: u8,

    /// Input state bits
    pub inputs: u8,

    /// System error code
    pub system_error: u8,

    /// Undocumented status byte (opaque)
    pub special_info: u8,

    /// The event
    pub event: Event,

    /// Packet sequence number
    pub sequence_no: u32,
}
