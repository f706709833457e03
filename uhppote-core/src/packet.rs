//! 64-byte packet construction and field packing/unpacking
//!
//! ```text
//! ┌──────┬──────────┬──────────┬────────────┬──────────────────────────┐
//! │ SOM  │ function │ reserved │ controller │ function-specific fields │
//! │ 0x17 │  1 byte  │ 2 bytes  │ (LE u32)   │ zero-padded to 64 bytes  │
//! └──────┴──────────┴──────────┴────────────┴──────────────────────────┘
//! ```

use std::net::Ipv4Addr;

use byteorder::{ByteOrder, LittleEndian};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use uhppote_types::MacAddr;

use crate::error::{Error, Result};
use crate::function::Function;
use crate::{CONTROLLER_OFFSET, PACKET_SIZE, SOM};

/// A request packet under construction
///
/// # Examples
///
/// ```
/// use uhppote_core::{Function, Packet};
///
/// let packet = Packet::new(Function::GetController, 405419896);
///
/// assert_eq!(packet.as_bytes()[0], 0x17);
/// assert_eq!(packet.as_bytes()[1], 0x94);
/// assert_eq!(&packet.as_bytes()[4..8], &[0x78, 0x37, 0x2a, 0x18]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    buf: [u8; PACKET_SIZE],
}

impl Packet {
    /// Create a request packet with the SOM, function code and controller
    /// serial number filled in and the remainder zeroed.
    pub fn new(function: Function, controller: u32) -> Self {
        let mut buf = [0u8; PACKET_SIZE];

        buf[0] = SOM;
        buf[1] = function.code();
        LittleEndian::write_u32(&mut buf[CONTROLLER_OFFSET..CONTROLLER_OFFSET + 4], controller);

        Self { buf }
    }

    /// The packet as raw bytes.
    pub fn as_bytes(&self) -> &[u8; PACKET_SIZE] {
        &self.buf
    }

    pub(crate) fn put_u8(&mut self, offset: usize, v: u8) {
        self.buf[offset] = v;
    }

    pub(crate) fn put_u16(&mut self, offset: usize, v: u16) {
        LittleEndian::write_u16(&mut self.buf[offset..offset + 2], v);
    }

    pub(crate) fn put_u32(&mut self, offset: usize, v: u32) {
        LittleEndian::write_u32(&mut self.buf[offset..offset + 4], v);
    }

    pub(crate) fn put_ipv4(&mut self, offset: usize, v: Ipv4Addr) {
        self.buf[offset..offset + 4].copy_from_slice(&v.octets());
    }

    pub(crate) fn put_bool(&mut self, offset: usize, v: bool) {
        self.buf[offset] = if v { 0x01 } else { 0x00 };
    }

    /// 24-bit little-endian PIN.
    pub(crate) fn put_pin(&mut self, offset: usize, v: u32) {
        self.buf[offset] = (v & 0x00ff) as u8;
        self.buf[offset + 1] = ((v >> 8) & 0x00ff) as u8;
        self.buf[offset + 2] = ((v >> 16) & 0x00ff) as u8;
    }

    /// 4-byte BCD YYYYMMDD.
    pub(crate) fn put_date(
        &mut self,
        offset: usize,
        v: NaiveDate,
        field: &'static str,
    ) -> Result<()> {
        let year = v.year();
        if !(0..=9999).contains(&year) {
            return Err(Error::InvalidDate { field });
        }

        self.buf[offset] = bcd2((year / 100) as u8);
        self.buf[offset + 1] = bcd2((year % 100) as u8);
        self.buf[offset + 2] = bcd2(v.month() as u8);
        self.buf[offset + 3] = bcd2(v.day() as u8);

        Ok(())
    }

    /// 7-byte BCD YYYYMMDDHHmmss.
    pub(crate) fn put_datetime(
        &mut self,
        offset: usize,
        v: NaiveDateTime,
        field: &'static str,
    ) -> Result<()> {
        self.put_date(offset, v.date(), field)?;

        self.buf[offset + 4] = bcd2(v.hour() as u8);
        self.buf[offset + 5] = bcd2(v.minute() as u8);
        self.buf[offset + 6] = bcd2(v.second() as u8);

        Ok(())
    }

    /// 2-byte BCD HHmm. Seconds are discarded.
    pub(crate) fn put_hhmm(&mut self, offset: usize, v: NaiveTime) {
        self.buf[offset] = bcd2(v.hour() as u8);
        self.buf[offset + 1] = bcd2(v.minute() as u8);
    }
}

impl AsRef<[u8]> for Packet {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

/// Two-digit decimal value to a BCD byte. Values are known to be <= 99 at
/// every call site (calendar fields and year halves).
fn bcd2(v: u8) -> u8 {
    ((v / 10) << 4) | (v % 10)
}

/// A BCD byte back to its two-digit decimal value, or `None` for a non-BCD
/// nibble.
fn bcd(b: u8) -> Option<u32> {
    let hi = (b >> 4) as u32;
    let lo = (b & 0x0f) as u32;

    if hi > 9 || lo > 9 {
        None
    } else {
        Some(hi * 10 + lo)
    }
}

pub(crate) fn unpack_u8(packet: &[u8], offset: usize) -> u8 {
    packet[offset]
}

pub(crate) fn unpack_u16(packet: &[u8], offset: usize) -> u16 {
    LittleEndian::read_u16(&packet[offset..offset + 2])
}

pub(crate) fn unpack_u32(packet: &[u8], offset: usize) -> u32 {
    LittleEndian::read_u32(&packet[offset..offset + 4])
}

pub(crate) fn unpack_ipv4(packet: &[u8], offset: usize) -> Ipv4Addr {
    Ipv4Addr::new(
        packet[offset],
        packet[offset + 1],
        packet[offset + 2],
        packet[offset + 3],
    )
}

pub(crate) fn unpack_mac(packet: &[u8], offset: usize) -> MacAddr {
    let mut mac = [0u8; 6];
    mac.copy_from_slice(&packet[offset..offset + 6]);

    MacAddr(mac)
}

/// 2-byte version, formatted as hex digits ('v8.92' from `[0x08, 0x92]`).
pub(crate) fn unpack_version(packet: &[u8], offset: usize) -> String {
    format!("v{:x}.{:02x}", packet[offset], packet[offset + 1])
}

pub(crate) fn unpack_bool(packet: &[u8], offset: usize) -> bool {
    packet[offset] != 0x00
}

/// 24-bit little-endian PIN.
pub(crate) fn unpack_pin(packet: &[u8], offset: usize) -> u32 {
    (packet[offset] as u32)
        | ((packet[offset + 1] as u32) << 8)
        | ((packet[offset + 2] as u32) << 16)
}

/// 4-byte BCD YYYYMMDD. `None` if the field is not a valid date.
pub(crate) fn unpack_date(packet: &[u8], offset: usize) -> Option<NaiveDate> {
    let year = bcd(packet[offset])? * 100 + bcd(packet[offset + 1])?;
    let month = bcd(packet[offset + 2])?;
    let day = bcd(packet[offset + 3])?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// 3-byte BCD YYMMDD with an implied '20' century. `None` if the field is not
/// a valid date.
pub(crate) fn unpack_shortdate(packet: &[u8], offset: usize) -> Option<NaiveDate> {
    let year = 2000 + bcd(packet[offset])?;
    let month = bcd(packet[offset + 1])?;
    let day = bcd(packet[offset + 2])?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// 7-byte BCD YYYYMMDDHHmmss. `None` if the field is not a valid date/time.
pub(crate) fn unpack_datetime(packet: &[u8], offset: usize) -> Option<NaiveDateTime> {
    let date = unpack_date(packet, offset)?;
    let time = unpack_time(packet, offset + 4)?;

    Some(NaiveDateTime::new(date, time))
}

/// 3-byte BCD HHmmss. `None` if the field is not a valid time.
pub(crate) fn unpack_time(packet: &[u8], offset: usize) -> Option<NaiveTime> {
    let hour = bcd(packet[offset])?;
    let minute = bcd(packet[offset + 1])?;
    let second = bcd(packet[offset + 2])?;

    NaiveTime::from_hms_opt(hour, minute, second)
}

/// 2-byte BCD HHmm. `None` if the field is not a valid time.
pub(crate) fn unpack_hhmm(packet: &[u8], offset: usize) -> Option<NaiveTime> {
    let hour = bcd(packet[offset])?;
    let minute = bcd(packet[offset + 1])?;

    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_packet() {
        let packet = Packet::new(Function::GetController, 405419896);
        let bytes = packet.as_bytes();

        assert_eq!(bytes[0], 0x17);
        assert_eq!(bytes[1], 0x94);
        assert_eq!(&bytes[4..8], &[0x78, 0x37, 0x2a, 0x18]);
        assert!(bytes[8..].iter().all(|&b| b == 0x00));
    }

    #[test]
    fn test_pack_date() {
        let mut packet = Packet::new(Function::SetTime, 405419896);
        let date = NaiveDate::from_ymd_opt(2018, 11, 5).unwrap();

        packet.put_date(8, date, "date").unwrap();

        assert_eq!(&packet.as_bytes()[8..12], &[0x20, 0x18, 0x11, 0x05]);
    }

    #[test]
    fn test_unpack_date() {
        let mut packet = [0u8; PACKET_SIZE];
        packet[28..32].copy_from_slice(&[0x20, 0x18, 0x11, 0x05]);

        assert_eq!(
            unpack_date(&packet, 28),
            NaiveDate::from_ymd_opt(2018, 11, 5)
        );
    }

    #[test]
    fn test_unpack_invalid_date() {
        let mut packet = [0u8; PACKET_SIZE];

        // non-BCD nibble
        packet[28..32].copy_from_slice(&[0x20, 0x1a, 0x11, 0x05]);
        assert_eq!(unpack_date(&packet, 28), None);

        // BCD but not a calendar date
        packet[28..32].copy_from_slice(&[0x20, 0x18, 0x13, 0x05]);
        assert_eq!(unpack_date(&packet, 28), None);

        // all zero
        packet[28..32].copy_from_slice(&[0x00, 0x00, 0x00, 0x00]);
        assert_eq!(unpack_date(&packet, 28), None);
    }

    #[test]
    fn test_unpack_shortdate() {
        let mut packet = [0u8; PACKET_SIZE];
        packet[51..54].copy_from_slice(&[0x22, 0x08, 0x23]);

        assert_eq!(
            unpack_shortdate(&packet, 51),
            NaiveDate::from_ymd_opt(2022, 8, 23)
        );
    }

    #[test]
    fn test_unpack_datetime() {
        let mut packet = [0u8; PACKET_SIZE];
        packet[8..15].copy_from_slice(&[0x20, 0x23, 0x01, 0x02, 0x12, 0x34, 0x56]);

        let expected = NaiveDate::from_ymd_opt(2023, 1, 2)
            .unwrap()
            .and_hms_opt(12, 34, 56);

        assert_eq!(unpack_datetime(&packet, 8), expected);
        assert_eq!(unpack_datetime(&packet, 16), None);
    }

    #[test]
    fn test_unpack_version() {
        assert_eq!(unpack_version(&[0x08, 0x92], 0), "v8.92");
        assert_eq!(unpack_version(&[0x10, 0x07], 0), "v10.07");
    }

    #[test]
    fn test_pin_round_trip() {
        let mut packet = Packet::new(Function::PutCard, 405419896);
        packet.put_pin(24, 999_999);

        assert_eq!(&packet.as_bytes()[24..27], &[0x3f, 0x42, 0x0f]);
        assert_eq!(unpack_pin(packet.as_bytes(), 24), 999_999);
    }
}
