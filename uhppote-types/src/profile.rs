//! Time profiles - weekly access schedules

use bitflags::bitflags;
use chrono::{NaiveDate, NaiveTime};

bitflags! {
    /// Weekday mask for time profiles and tasks
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Weekdays: u8 {
        const MONDAY    = 1 << 0;
        const TUESDAY   = 1 << 1;
        const WEDNESDAY = 1 << 2;
        const THURSDAY  = 1 << 3;
        const FRIDAY    = 1 << 4;
        const SATURDAY  = 1 << 5;
        const SUNDAY    = 1 << 6;
    }
}

impl Weekdays {
    /// Monday through Friday.
    pub fn weekdays() -> Self {
        Self::MONDAY | Self::TUESDAY | Self::WEDNESDAY | Self::THURSDAY | Self::FRIDAY
    }
}

/// A start/end time segment within a time profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeSegment {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl TimeSegment {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

/// A weekly access schedule, referenced by ID from card door permissions
///
/// Valid profile IDs are [2..254]; 0 and 1 are reserved by the firmware
/// (1 is the implicit 'unrestricted' permission).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeProfile {
    /// Profile ID [2..254]
    pub id: u8,

    /// 'valid from' date
    pub start_date: Option<NaiveDate>,

    /// 'valid until' date
    pub end_date: Option<NaiveDate>,

    /// Days of the week on which the profile is active
    pub weekdays: Weekdays,

    /// Up to three active time segments per day
    pub segments: [TimeSegment; 3],

    /// Next profile ID in chain (0: none)
    pub linked: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_weekdays() {
        let days = Weekdays::weekdays();

        assert!(days.contains(Weekdays::MONDAY));
        assert!(days.contains(Weekdays::FRIDAY));
        assert!(!days.contains(Weekdays::SATURDAY));
        assert!(!days.contains(Weekdays::SUNDAY));
        assert_eq!(days.bits(), 0b0001_1111);
    }
}
