//! Scheduled controller tasks

use chrono::{NaiveDate, NaiveTime};

use crate::error::Error;
use crate::profile::Weekdays;

/// Controller-side scheduled action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TaskType {
    DoorControlled = 0,
    DoorUnlocked = 1,
    DoorLocked = 2,
    DisableTimeProfile = 3,
    EnableTimeProfile = 4,
    CardNoPassword = 5,
    CardInPassword = 6,
    CardInOutPassword = 7,
    EnableMoreCards = 8,
    DisableMoreCards = 9,
    TriggerOnce = 10,
    DisablePushbutton = 11,
    EnablePushbutton = 12,
}

impl From<TaskType> for u8 {
    fn from(t: TaskType) -> u8 {
        t as u8
    }
}

impl TryFrom<u8> for TaskType {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Error> {
        match v {
            0 => Ok(Self::DoorControlled),
            1 => Ok(Self::DoorUnlocked),
            2 => Ok(Self::DoorLocked),
            3 => Ok(Self::DisableTimeProfile),
            4 => Ok(Self::EnableTimeProfile),
            5 => Ok(Self::CardNoPassword),
            6 => Ok(Self::CardInPassword),
            7 => Ok(Self::CardInOutPassword),
            8 => Ok(Self::EnableMoreCards),
            9 => Ok(Self::DisableMoreCards),
            10 => Ok(Self::TriggerOnce),
            11 => Ok(Self::DisablePushbutton),
            12 => Ok(Self::EnablePushbutton),
            value => Err(Error::InvalidValue {
                field: "task type",
                value,
            }),
        }
    }
}

/// A task queued for execution on a controller at a given time/day
///
/// Queued tasks only become active after a refresh-tasklist request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    /// Task 'valid from' date
    pub start_date: NaiveDate,

    /// Task 'valid until' date
    pub end_date: NaiveDate,

    /// Days of the week on which the task runs
    pub weekdays: Weekdays,

    /// Time of day at which the task runs
    pub start_time: NaiveTime,

    /// Door [1..4] to which the task applies
    pub door: u8,

    /// Action to perform
    pub task_type: TaskType,

    /// Number of cards for the 'more cards' task types
    pub more_cards: u8,
}
