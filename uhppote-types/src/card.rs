//! Card access records

use std::fmt;

use chrono::NaiveDate;

/// Card number returned for a tombstoned (deleted but not compacted) record
pub const CARD_DELETED: u32 = 0xFFFF_FFFF;

/// Door access permission byte
///
/// - 0: no access
/// - 1: unrestricted access
/// - 2-254: access governed by the time profile with that ID
/// - 255: reserved by the firmware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    None,
    All,
    Profile(u8),
    Reserved,
}

impl From<u8> for Permission {
    fn from(v: u8) -> Self {
        match v {
            0 => Self::None,
            1 => Self::All,
            255 => Self::Reserved,
            id => Self::Profile(id),
        }
    }
}

impl From<Permission> for u8 {
    fn from(p: Permission) -> u8 {
        match p {
            Permission::None => 0,
            Permission::All => 1,
            Permission::Profile(id) => id,
            Permission::Reserved => 255,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::All => write!(f, "all"),
            Self::Profile(id) => write!(f, "profile {}", id),
            Self::Reserved => write!(f, "reserved"),
        }
    }
}

/// Card access record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// Card number
    pub card: u32,

    /// 'valid from' date
    pub start_date: Option<NaiveDate>,

    /// 'valid until' date
    pub end_date: Option<NaiveDate>,

    /// Access permissions for doors 1-4
    pub doors: [Permission; 4],

    /// Keypad PIN code (0: none, max 999999)
    pub pin: u32,
}

impl Card {
    /// True if this record is a tombstone for a deleted card.
    pub fn is_deleted(&self) -> bool {
        self.card == CARD_DELETED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_permission_from_byte() {
        assert_eq!(Permission::from(0), Permission::None);
        assert_eq!(Permission::from(1), Permission::All);
        assert_eq!(Permission::from(29), Permission::Profile(29));
        assert_eq!(Permission::from(254), Permission::Profile(254));
        assert_eq!(Permission::from(255), Permission::Reserved);
    }

    #[test]
    fn test_permission_round_trip() {
        for v in 0..=255u8 {
            assert_eq!(u8::from(Permission::from(v)), v);
        }
    }

    #[test]
    fn test_card_tombstone() {
        let card = Card {
            card: CARD_DELETED,
            start_date: None,
            end_date: None,
            doors: [Permission::None; 4],
            pin: 0,
        };

        assert!(card.is_deleted());
    }
}
