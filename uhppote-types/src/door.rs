//! Door control and anti-passback modes

use std::fmt;

use crate::error::Error;

/// Door control mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DoorMode {
    /// Relay permanently energised
    NormallyOpen = 1,

    /// Relay permanently de-energised
    NormallyClosed = 2,

    /// Relay operated by card/keypad access
    Controlled = 3,
}

impl From<DoorMode> for u8 {
    fn from(m: DoorMode) -> u8 {
        m as u8
    }
}

impl TryFrom<u8> for DoorMode {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Error> {
        match v {
            1 => Ok(Self::NormallyOpen),
            2 => Ok(Self::NormallyClosed),
            3 => Ok(Self::Controlled),
            value => Err(Error::InvalidValue {
                field: "door mode",
                value,
            }),
        }
    }
}

impl fmt::Display for DoorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NormallyOpen => write!(f, "normally open"),
            Self::NormallyClosed => write!(f, "normally closed"),
            Self::Controlled => write!(f, "controlled"),
        }
    }
}

/// Door control mode and unlock delay for a single door
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorControl {
    /// Door [1..4]
    pub door: u8,

    /// Control mode
    pub mode: DoorMode,

    /// Unlock duration in seconds
    pub delay: u8,
}

/// Door interlock mode
///
/// An interlocked door set only unlocks a door while the other doors in the
/// set are closed. The wire values are sparse (8, not 5, for the four-door
/// interlock).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Interlock {
    /// No interlock
    None = 0,

    /// Doors 1 and 2 interlocked
    Doors12 = 1,

    /// Doors 3 and 4 interlocked
    Doors34 = 2,

    /// Doors 1 and 2 interlocked, doors 3 and 4 interlocked
    Doors12_34 = 3,

    /// Doors 1, 2 and 3 interlocked
    Doors123 = 4,

    /// All four doors interlocked
    Doors1234 = 8,
}

impl From<Interlock> for u8 {
    fn from(m: Interlock) -> u8 {
        m as u8
    }
}

impl TryFrom<u8> for Interlock {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Error> {
        match v {
            0 => Ok(Self::None),
            1 => Ok(Self::Doors12),
            2 => Ok(Self::Doors34),
            3 => Ok(Self::Doors12_34),
            4 => Ok(Self::Doors123),
            8 => Ok(Self::Doors1234),
            value => Err(Error::InvalidValue {
                field: "interlock mode",
                value,
            }),
        }
    }
}

/// Anti-passback mode - door pairings that enforce sequential in/out access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AntiPassback {
    /// No anti-passback
    Disabled = 0,

    /// (1:2); (3:4)
    Readers12_34 = 1,

    /// (1,3) : (2,4)
    Readers13_24 = 2,

    /// 1 : (2,3)
    Readers1_23 = 3,

    /// 1 : (2,3,4)
    Readers1_234 = 4,
}

impl From<AntiPassback> for u8 {
    fn from(m: AntiPassback) -> u8 {
        m as u8
    }
}

impl TryFrom<u8> for AntiPassback {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Error> {
        match v {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::Readers12_34),
            2 => Ok(Self::Readers13_24),
            3 => Ok(Self::Readers1_23),
            4 => Ok(Self::Readers1_234),
            value => Err(Error::InvalidValue {
                field: "anti-passback mode",
                value,
            }),
        }
    }
}

impl fmt::Display for AntiPassback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::Readers12_34 => write!(f, "(1:2);(3:4)"),
            Self::Readers13_24 => write!(f, "(1,3):(2,4)"),
            Self::Readers1_23 => write!(f, "1:(2,3)"),
            Self::Readers1_234 => write!(f, "1:(2,3,4)"),
        }
    }
}
