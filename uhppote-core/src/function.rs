//! UHPPOTE protocol function codes

use std::fmt;

use crate::error::{Error, Result};

/// Protocol function codes
///
/// The function code occupies byte 1 of every request and response. The
/// get-status code doubles as the message type for events pushed to a
/// configured listener.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Function {
    GetStatus = 0x20,
    SetTime = 0x30,
    GetTime = 0x32,
    OpenDoor = 0x40,
    PutCard = 0x50,
    DeleteCard = 0x52,
    DeleteAllCards = 0x54,
    GetCards = 0x58,
    GetCard = 0x5A,
    GetCardAtIndex = 0x5C,
    SetDoor = 0x80,
    GetDoor = 0x82,
    SetAntiPassback = 0x84,
    GetAntiPassback = 0x86,
    SetTimeProfile = 0x88,
    ClearTimeProfiles = 0x8A,
    SetDoorPasscodes = 0x8C,
    RecordSpecialEvents = 0x8E,
    SetListener = 0x90,
    GetListener = 0x92,
    GetController = 0x94,
    SetIPv4 = 0x96,
    GetTimeProfile = 0x98,
    SetPcControl = 0xA0,
    SetInterlock = 0xA2,
    ActivateKeypads = 0xA4,
    ClearTaskList = 0xA6,
    AddTask = 0xA8,
    RefreshTaskList = 0xAC,
    GetEvent = 0xB0,
    SetEventIndex = 0xB2,
    GetEventIndex = 0xB4,
    RestoreDefaultParameters = 0xC8,
}

impl Function {
    /// Wire value of the function code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<Function> for u8 {
    fn from(f: Function) -> u8 {
        f as u8
    }
}

impl TryFrom<u8> for Function {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self> {
        match v {
            0x20 => Ok(Self::GetStatus),
            0x30 => Ok(Self::SetTime),
            0x32 => Ok(Self::GetTime),
            0x40 => Ok(Self::OpenDoor),
            0x50 => Ok(Self::PutCard),
            0x52 => Ok(Self::DeleteCard),
            0x54 => Ok(Self::DeleteAllCards),
            0x58 => Ok(Self::GetCards),
            0x5A => Ok(Self::GetCard),
            0x5C => Ok(Self::GetCardAtIndex),
            0x80 => Ok(Self::SetDoor),
            0x82 => Ok(Self::GetDoor),
            0x84 => Ok(Self::SetAntiPassback),
            0x86 => Ok(Self::GetAntiPassback),
            0x88 => Ok(Self::SetTimeProfile),
            0x8A => Ok(Self::ClearTimeProfiles),
            0x8C => Ok(Self::SetDoorPasscodes),
            0x8E => Ok(Self::RecordSpecialEvents),
            0x90 => Ok(Self::SetListener),
            0x92 => Ok(Self::GetListener),
            0x94 => Ok(Self::GetController),
            0x96 => Ok(Self::SetIPv4),
            0x98 => Ok(Self::GetTimeProfile),
            0xA0 => Ok(Self::SetPcControl),
            0xA2 => Ok(Self::SetInterlock),
            0xA4 => Ok(Self::ActivateKeypads),
            0xA6 => Ok(Self::ClearTaskList),
            0xA8 => Ok(Self::AddTask),
            0xAC => Ok(Self::RefreshTaskList),
            0xB0 => Ok(Self::GetEvent),
            0xB2 => Ok(Self::SetEventIndex),
            0xB4 => Ok(Self::GetEventIndex),
            0xC8 => Ok(Self::RestoreDefaultParameters),
            code => Err(Error::UnknownFunction(code)),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (0x{:02x})", self, self.code())
    }
}
