//! Response packet decoders
//!
//! One decoder per response type. Every decoder validates the packet length,
//! start-of-message byte and function code before unpacking fields.
//!
//! Date/time fields that do not contain a valid BCD date or time decode to
//! `None` rather than an error - controllers routinely report all-zero or
//! garbage timestamps.

use chrono::NaiveDateTime;

use uhppote_types::{
    AntiPassback, Card, ControllerInfo, DoorControl, DoorMode, Event, ListenEvent, ListenerConfig,
    Status, TimeProfile, TimeSegment, Weekdays,
};

use crate::error::{Error, Result};
use crate::function::Function;
use crate::packet::{
    unpack_bool, unpack_date, unpack_datetime, unpack_hhmm, unpack_ipv4, unpack_mac, unpack_pin,
    unpack_shortdate, unpack_time, unpack_u16, unpack_u32, unpack_u8, unpack_version,
};
use crate::{CONTROLLER_OFFSET, PACKET_SIZE, SOM, SOM_V6_62};

/// Validates the packet length, SOM and function code.
///
/// Event packets (function code 0x20) from controllers with v6.62 firmware
/// carry 0x19 as the SOM and are accepted as valid.
pub fn validate(packet: &[u8], function: Function) -> Result<()> {
    if packet.len() != PACKET_SIZE {
        return Err(Error::InvalidLength {
            expected: PACKET_SIZE,
            actual: packet.len(),
        });
    }

    let som_v6_62 = function == Function::GetStatus && packet[0] == SOM_V6_62;
    if packet[0] != SOM && !som_v6_62 {
        return Err(Error::InvalidSom(packet[0]));
    }

    if packet[1] != function.code() {
        return Err(Error::InvalidFunction {
            expected: function.code(),
            actual: packet[1],
        });
    }

    Ok(())
}

/// Controller serial number from a validated packet.
pub fn controller(packet: &[u8]) -> u32 {
    unpack_u32(packet, CONTROLLER_OFFSET)
}

/// Success/fail acknowledgement - the layout shared by all 'set' responses.
fn ack(packet: &[u8], function: Function) -> Result<(u32, bool)> {
    validate(packet, function)?;

    Ok((controller(packet), unpack_bool(packet, 8)))
}

fn unpack_weekdays(packet: &[u8], offset: usize) -> Weekdays {
    const DAYS: [Weekdays; 7] = [
        Weekdays::MONDAY,
        Weekdays::TUESDAY,
        Weekdays::WEDNESDAY,
        Weekdays::THURSDAY,
        Weekdays::FRIDAY,
        Weekdays::SATURDAY,
        Weekdays::SUNDAY,
    ];

    let mut weekdays = Weekdays::empty();
    for (i, &day) in DAYS.iter().enumerate() {
        if unpack_bool(packet, offset + i) {
            weekdays |= day;
        }
    }

    weekdays
}

fn unpack_event(packet: &[u8]) -> Option<Event> {
    let index = unpack_u32(packet, 8);
    if index == 0 {
        return None;
    }

    Some(Event {
        index,
        event_type: unpack_u8(packet, 12),
        access_granted: unpack_bool(packet, 13),
        door: unpack_u8(packet, 14),
        direction: unpack_u8(packet, 15),
        card: unpack_u32(packet, 16),
        timestamp: unpack_datetime(packet, 20),
        reason: unpack_u8(packet, 27),
    })
}

fn unpack_door_states(packet: &[u8], offset: usize) -> [bool; 4] {
    [
        unpack_bool(packet, offset),
        unpack_bool(packet, offset + 1),
        unpack_bool(packet, offset + 2),
        unpack_bool(packet, offset + 3),
    ]
}

pub fn get_controller_response(packet: &[u8]) -> Result<ControllerInfo> {
    validate(packet, Function::GetController)?;

    Ok(ControllerInfo {
        controller: controller(packet),
        address: unpack_ipv4(packet, 8),
        netmask: unpack_ipv4(packet, 12),
        gateway: unpack_ipv4(packet, 16),
        mac: unpack_mac(packet, 20),
        version: unpack_version(packet, 26),
        date: unpack_date(packet, 28),
    })
}

pub fn get_time_response(packet: &[u8]) -> Result<(u32, Option<NaiveDateTime>)> {
    validate(packet, Function::GetTime)?;

    Ok((controller(packet), unpack_datetime(packet, 8)))
}

/// The set-time response echoes the controller date/time after the update.
pub fn set_time_response(packet: &[u8]) -> Result<(u32, Option<NaiveDateTime>)> {
    validate(packet, Function::SetTime)?;

    Ok((controller(packet), unpack_datetime(packet, 8)))
}

pub fn get_status_response(packet: &[u8]) -> Result<Status> {
    validate(packet, Function::GetStatus)?;

    Ok(Status {
        controller: controller(packet),
        system_date: unpack_shortdate(packet, 51),
        system_time: unpack_time(packet, 37),
        door_open: unpack_door_states(packet, 28),
        door_button: unpack_door_states(packet, 32),
        relays: unpack_u8(packet, 49),
        inputs: unpack_u8(packet, 50),
        system_error: unpack_u8(packet, 36),
        special_info: unpack_u8(packet, 48),
        event: unpack_event(packet),
        sequence_no: unpack_u32(packet, 40),
    })
}

/// An event pushed by a controller to its configured listener. The packet
/// layout is identical to a get-status response, but an event packet with no
/// event is an error.
pub fn listen_event(packet: &[u8]) -> Result<ListenEvent> {
    validate(packet, Function::GetStatus)?;

    let event = unpack_event(packet).ok_or(Error::MissingEvent)?;

    Ok(ListenEvent {
        controller: controller(packet),
        system_date: unpack_shortdate(packet, 51),
        system_time: unpack_time(packet, 37),
        door_open: unpack_door_states(packet, 28),
        door_button: unpack_door_states(packet, 32),
        relays: unpack_u8(packet, 49),
        inputs: unpack_u8(packet, 50),
        system_error: unpack_u8(packet, 36),
        special_info: unpack_u8(packet, 48),
        event,
        sequence_no: unpack_u32(packet, 40),
    })
}

pub fn get_listener_response(packet: &[u8]) -> Result<(u32, ListenerConfig)> {
    validate(packet, Function::GetListener)?;

    let listener = ListenerConfig {
        address: unpack_ipv4(packet, 8),
        port: unpack_u16(packet, 12),
        interval: unpack_u8(packet, 14),
    };

    Ok((controller(packet), listener))
}

pub fn set_listener_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::SetListener)
}

pub fn get_door_response(packet: &[u8]) -> Result<(u32, DoorControl)> {
    validate(packet, Function::GetDoor)?;

    let control = DoorControl {
        door: unpack_u8(packet, 8),
        mode: DoorMode::try_from(unpack_u8(packet, 9))?,
        delay: unpack_u8(packet, 10),
    };

    Ok((controller(packet), control))
}

/// The set-door response echoes the door, mode and delay after the update.
pub fn set_door_response(packet: &[u8]) -> Result<(u32, DoorControl)> {
    validate(packet, Function::SetDoor)?;

    let control = DoorControl {
        door: unpack_u8(packet, 8),
        mode: DoorMode::try_from(unpack_u8(packet, 9))?,
        delay: unpack_u8(packet, 10),
    };

    Ok((controller(packet), control))
}

pub fn open_door_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::OpenDoor)
}

/// Card count, including deleted-but-not-compacted records.
pub fn get_cards_response(packet: &[u8]) -> Result<(u32, u32)> {
    validate(packet, Function::GetCards)?;

    Ok((controller(packet), unpack_u32(packet, 8)))
}

fn unpack_card(packet: &[u8]) -> Card {
    Card {
        card: unpack_u32(packet, 8),
        start_date: unpack_date(packet, 12),
        end_date: unpack_date(packet, 16),
        doors: [
            unpack_u8(packet, 20).into(),
            unpack_u8(packet, 21).into(),
            unpack_u8(packet, 22).into(),
            unpack_u8(packet, 23).into(),
        ],
        pin: unpack_pin(packet, 24),
    }
}

/// A card number of 0 means the card was not found - the caller is expected
/// to classify that.
pub fn get_card_response(packet: &[u8]) -> Result<(u32, Card)> {
    validate(packet, Function::GetCard)?;

    Ok((controller(packet), unpack_card(packet)))
}

/// A card number of 0 means the index is out of range; 0xffffffff is a
/// deleted card - the caller is expected to classify those.
pub fn get_card_at_index_response(packet: &[u8]) -> Result<(u32, Card)> {
    validate(packet, Function::GetCardAtIndex)?;

    Ok((controller(packet), unpack_card(packet)))
}

pub fn put_card_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::PutCard)
}

pub fn delete_card_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::DeleteCard)
}

pub fn delete_all_cards_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::DeleteAllCards)
}

/// An index of 0 means no event at the requested index; an event type of
/// 0xff means the event has been overwritten - the caller is expected to
/// classify those.
pub fn get_event_response(packet: &[u8]) -> Result<(u32, Event)> {
    validate(packet, Function::GetEvent)?;

    let event = Event {
        index: unpack_u32(packet, 8),
        event_type: unpack_u8(packet, 12),
        access_granted: unpack_bool(packet, 13),
        door: unpack_u8(packet, 14),
        direction: unpack_u8(packet, 15),
        card: unpack_u32(packet, 16),
        timestamp: unpack_datetime(packet, 20),
        reason: unpack_u8(packet, 27),
    };

    Ok((controller(packet), event))
}

pub fn get_event_index_response(packet: &[u8]) -> Result<(u32, u32)> {
    validate(packet, Function::GetEventIndex)?;

    Ok((controller(packet), unpack_u32(packet, 8)))
}

pub fn set_event_index_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::SetEventIndex)
}

pub fn record_special_events_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::RecordSpecialEvents)
}

/// A profile ID of 0 means no such time profile - the caller is expected to
/// classify that.
pub fn get_time_profile_response(packet: &[u8]) -> Result<(u32, TimeProfile)> {
    validate(packet, Function::GetTimeProfile)?;

    let mut segments = [TimeSegment::default(); 3];
    for (i, segment) in segments.iter_mut().enumerate() {
        let offset = 24 + 4 * i;

        *segment = TimeSegment {
            start: unpack_hhmm(packet, offset),
            end: unpack_hhmm(packet, offset + 2),
        };
    }

    let profile = TimeProfile {
        id: unpack_u8(packet, 8),
        start_date: unpack_date(packet, 9),
        end_date: unpack_date(packet, 13),
        weekdays: unpack_weekdays(packet, 17),
        segments,
        linked: unpack_u8(packet, 36),
    };

    Ok((controller(packet), profile))
}

pub fn set_time_profile_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::SetTimeProfile)
}

pub fn clear_time_profiles_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::ClearTimeProfiles)
}

pub fn add_task_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::AddTask)
}

pub fn refresh_tasklist_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::RefreshTaskList)
}

pub fn clear_tasklist_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::ClearTaskList)
}

pub fn set_pc_control_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::SetPcControl)
}

pub fn set_interlock_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::SetInterlock)
}

pub fn activate_keypads_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::ActivateKeypads)
}

pub fn set_door_passcodes_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::SetDoorPasscodes)
}

pub fn get_antipassback_response(packet: &[u8]) -> Result<(u32, AntiPassback)> {
    validate(packet, Function::GetAntiPassback)?;

    let antipassback = AntiPassback::try_from(unpack_u8(packet, 8))?;

    Ok((controller(packet), antipassback))
}

pub fn set_antipassback_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::SetAntiPassback)
}

pub fn restore_default_parameters_response(packet: &[u8]) -> Result<(u32, bool)> {
    ack(packet, Function::RestoreDefaultParameters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use chrono::{NaiveDate, NaiveTime};
    use uhppote_types::Permission;

    #[rustfmt::skip]
    const GET_CONTROLLER: [u8; 64] = [
        0x17, 0x94, 0x00, 0x00, 0x78, 0x37, 0x2a, 0x18, 0xc0, 0xa8, 0x01, 0x64, 0xff, 0xff, 0xff, 0x00,
        0xc0, 0xa8, 0x01, 0x01, 0x00, 0x12, 0x23, 0x34, 0x45, 0x56, 0x08, 0x92, 0x20, 0x18, 0x11, 0x05,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    #[rustfmt::skip]
    const GET_STATUS: [u8; 64] = [
        0x17, 0x20, 0x00, 0x00, 0x78, 0x37, 0x2a, 0x18, 0x4e, 0x00, 0x00, 0x00, 0x02, 0x01, 0x03, 0x01,
        0xa1, 0x98, 0x7c, 0x00, 0x20, 0x22, 0x08, 0x23, 0x09, 0x47, 0x06, 0x2c, 0x00, 0x01, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x01, 0x03, 0x09, 0x49, 0x39, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x27, 0x07, 0x09, 0x22, 0x08, 0x23, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    #[rustfmt::skip]
    const LISTEN_EVENT: [u8; 64] = [
        0x17, 0x20, 0x00, 0x00, 0x78, 0x37, 0x2a, 0x18, 0x46, 0x00, 0x00, 0x00, 0x02, 0x01, 0x03, 0x01,
        0x9f, 0x98, 0x7c, 0x00, 0x20, 0x24, 0x02, 0x22, 0x10, 0x23, 0x40, 0x2c, 0x01, 0x00, 0x00, 0x01,
        0x01, 0x00, 0x01, 0x01, 0x03, 0x10, 0x23, 0x40, 0x7b, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x27, 0x0a, 0x05, 0x24, 0x02, 0x22, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn test_get_controller_response() {
        let response = get_controller_response(&GET_CONTROLLER).unwrap();

        assert_eq!(response.controller, 405419896);
        assert_eq!(response.address, "192.168.1.100".parse::<std::net::Ipv4Addr>().unwrap());
        assert_eq!(response.netmask, "255.255.255.0".parse::<std::net::Ipv4Addr>().unwrap());
        assert_eq!(response.gateway, "192.168.1.1".parse::<std::net::Ipv4Addr>().unwrap());
        assert_eq!(response.mac.to_string(), "00:12:23:34:45:56");
        assert_eq!(response.version, "v8.92");
        assert_eq!(response.date, NaiveDate::from_ymd_opt(2018, 11, 5));
    }

    #[test]
    fn test_get_status_response() {
        let status = get_status_response(&GET_STATUS).unwrap();

        assert_eq!(status.controller, 405419896);
        assert_eq!(status.system_date, NaiveDate::from_ymd_opt(2022, 8, 23));
        assert_eq!(status.system_time, NaiveTime::from_hms_opt(9, 49, 39));
        assert_eq!(status.door_open, [false, true, false, false]);
        assert_eq!(status.door_button, [false, false, false, true]);
        assert_eq!(status.relays, 7);
        assert_eq!(status.inputs, 9);
        assert_eq!(status.system_error, 3);
        assert_eq!(status.special_info, 39);
        assert_eq!(status.sequence_no, 0);

        let event = status.event.unwrap();
        assert_eq!(event.index, 78);
        assert_eq!(event.event_type, 2);
        assert!(event.access_granted);
        assert_eq!(event.door, 3);
        assert_eq!(event.direction, 1);
        assert_eq!(event.card, 8165537);
        assert_eq!(
            event.timestamp,
            NaiveDate::from_ymd_opt(2022, 8, 23)
                .unwrap()
                .and_hms_opt(9, 47, 6)
        );
        assert_eq!(event.reason, 44);
    }

    #[test]
    fn test_get_status_response_with_no_event() {
        let mut packet = GET_STATUS;
        packet[8..28].fill(0x00);

        let status = get_status_response(&packet).unwrap();

        assert_eq!(status.controller, 405419896);
        assert_eq!(status.event, None);
    }

    #[test]
    fn test_get_status_response_with_invalid_event_timestamp() {
        let mut packet = GET_STATUS;
        packet[20..27].copy_from_slice(&[0x20, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00]);

        let status = get_status_response(&packet).unwrap();
        let event = status.event.unwrap();

        assert_eq!(event.index, 78);
        assert_eq!(event.timestamp, None);
    }

    #[test]
    fn test_get_time_response() {
        let mut packet = [0u8; 64];
        packet[0] = 0x17;
        packet[1] = 0x32;
        packet[4..8].copy_from_slice(&[0x78, 0x37, 0x2a, 0x18]);
        packet[8..15].copy_from_slice(&[0x20, 0x23, 0x01, 0x02, 0x12, 0x34, 0x56]);

        let (controller, datetime) = get_time_response(&packet).unwrap();

        assert_eq!(controller, 405419896);
        assert_eq!(
            datetime,
            NaiveDate::from_ymd_opt(2023, 1, 2)
                .unwrap()
                .and_hms_opt(12, 34, 56)
        );
    }

    #[test]
    fn test_get_time_response_with_invalid_datetime() {
        let mut packet = [0u8; 64];
        packet[0] = 0x17;
        packet[1] = 0x32;
        packet[4..8].copy_from_slice(&[0x78, 0x37, 0x2a, 0x18]);
        packet[8] = 0x20;

        let (controller, datetime) = get_time_response(&packet).unwrap();

        assert_eq!(controller, 405419896);
        assert_eq!(datetime, None);
    }

    #[test]
    fn test_get_card_response_with_invalid_dates() {
        let mut packet = [0u8; 64];
        packet[0] = 0x17;
        packet[1] = 0x5a;
        packet[4..8].copy_from_slice(&[0x78, 0x37, 0x2a, 0x18]);
        packet[8..12].copy_from_slice(&[0xa0, 0x7a, 0x99, 0x00]);
        packet[12] = 0x20;
        packet[16] = 0x20;
        packet[20..24].copy_from_slice(&[0x01, 0x01, 0x01, 0x01]);

        let (controller, card) = get_card_response(&packet).unwrap();

        assert_eq!(controller, 405419896);
        assert_eq!(card.card, 10058400);
        assert_eq!(card.start_date, None);
        assert_eq!(card.end_date, None);
        assert_eq!(card.doors, [Permission::All; 4]);
        assert_eq!(card.pin, 0);
    }

    #[test]
    fn test_get_event_response_with_invalid_timestamp() {
        let mut packet = [0u8; 64];
        packet[0] = 0x17;
        packet[1] = 0xb0;
        packet[4..8].copy_from_slice(&[0x78, 0x37, 0x2a, 0x18]);
        packet[8..12].copy_from_slice(&[0x11, 0x27, 0x00, 0x00]);
        packet[12..16].copy_from_slice(&[0x20, 0x01, 0x01, 0x01]);
        packet[16..20].copy_from_slice(&[0xea, 0xac, 0xcd, 0xe9]);
        packet[20] = 0x20;
        packet[27] = 0x2c;

        let (controller, event) = get_event_response(&packet).unwrap();

        assert_eq!(controller, 405419896);
        assert_eq!(event.index, 10001);
        assert_eq!(event.event_type, 32);
        assert!(event.access_granted);
        assert_eq!(event.door, 1);
        assert_eq!(event.direction, 1);
        assert_eq!(event.card, 3922570474);
        assert_eq!(event.timestamp, None);
        assert_eq!(event.reason, 44);
    }

    #[test]
    fn test_get_time_profile_response_with_invalid_dates() {
        let mut packet = [0u8; 64];
        packet[0] = 0x17;
        packet[1] = 0x98;
        packet[4..8].copy_from_slice(&[0x78, 0x37, 0x2a, 0x18]);
        packet[8] = 0x1d;
        packet[9] = 0x20;
        packet[13] = 0x00;
        packet[14] = 0x20;
        packet[17..24].copy_from_slice(&[0x01, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00]);
        packet[24..28].copy_from_slice(&[0x08, 0x30, 0x11, 0x30]);
        packet[32..36].copy_from_slice(&[0x13, 0x45, 0x17, 0x00]);
        packet[36] = 0x03;

        let (controller, profile) = get_time_profile_response(&packet).unwrap();

        assert_eq!(controller, 405419896);
        assert_eq!(profile.id, 29);
        assert_eq!(profile.start_date, None);
        assert_eq!(profile.end_date, None);
        assert_eq!(
            profile.weekdays,
            Weekdays::MONDAY | Weekdays::WEDNESDAY | Weekdays::FRIDAY
        );
        assert_eq!(profile.segments[0].start, NaiveTime::from_hms_opt(8, 30, 0));
        assert_eq!(profile.segments[0].end, NaiveTime::from_hms_opt(11, 30, 0));
        assert_eq!(profile.segments[1].start, NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(profile.segments[1].end, NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(profile.segments[2].start, NaiveTime::from_hms_opt(13, 45, 0));
        assert_eq!(profile.segments[2].end, NaiveTime::from_hms_opt(17, 0, 0));
        assert_eq!(profile.linked, 3);
    }

    #[test]
    fn test_listen_event() {
        let event = listen_event(&LISTEN_EVENT).unwrap();

        assert_eq!(event.controller, 405419896);
        assert_eq!(event.system_date, NaiveDate::from_ymd_opt(2024, 2, 22));
        assert_eq!(event.system_time, NaiveTime::from_hms_opt(10, 23, 40));
        assert_eq!(event.door_open, [true, false, false, true]);
        assert_eq!(event.door_button, [true, false, true, true]);
        assert_eq!(event.relays, 0x0a);
        assert_eq!(event.inputs, 0x05);
        assert_eq!(event.system_error, 3);
        assert_eq!(event.special_info, 39);
        assert_eq!(event.sequence_no, 123);

        assert_eq!(event.event.index, 70);
        assert_eq!(event.event.event_type, 2);
        assert!(event.event.access_granted);
        assert_eq!(event.event.door, 3);
        assert_eq!(event.event.direction, 1);
        assert_eq!(event.event.card, 8165535);
        assert_eq!(
            event.event.timestamp,
            NaiveDate::from_ymd_opt(2024, 2, 22)
                .unwrap()
                .and_hms_opt(10, 23, 40)
        );
        assert_eq!(event.event.reason, 44);
    }

    #[test]
    fn test_listen_event_with_v6_62_som() {
        let mut packet = LISTEN_EVENT;
        packet[0] = 0x19;

        let event = listen_event(&packet).unwrap();

        assert_eq!(event.controller, 405419896);
        assert_eq!(event.event.index, 70);
    }

    #[test]
    fn test_listen_event_without_event() {
        let mut packet = LISTEN_EVENT;
        packet[8..12].fill(0x00);

        assert_eq!(listen_event(&packet), Err(Error::MissingEvent));
    }

    #[test]
    fn test_validate_rejects_bad_som() {
        let mut packet = GET_CONTROLLER;
        packet[0] = 0x19;

        // 0x19 is only valid for event packets
        assert_eq!(
            get_controller_response(&packet).unwrap_err(),
            Error::InvalidSom(0x19)
        );
    }

    #[test]
    fn test_validate_rejects_mismatched_function() {
        assert_eq!(
            get_time_response(&GET_CONTROLLER).unwrap_err(),
            Error::InvalidFunction {
                expected: 0x32,
                actual: 0x94
            }
        );
    }

    #[test]
    fn test_validate_rejects_short_packet() {
        assert_eq!(
            get_controller_response(&GET_CONTROLLER[..60]).unwrap_err(),
            Error::InvalidLength {
                expected: 64,
                actual: 60
            }
        );
    }

    #[test]
    fn test_get_listener_response() {
        let mut packet = [0u8; 64];
        packet[0] = 0x17;
        packet[1] = 0x92;
        packet[4..8].copy_from_slice(&[0x78, 0x37, 0x2a, 0x18]);
        packet[8..12].copy_from_slice(&[0xc0, 0xa8, 0x01, 0x64]);
        packet[12..14].copy_from_slice(&[0x61, 0xea]);
        packet[14] = 0x0f;

        let (controller, listener) = get_listener_response(&packet).unwrap();

        assert_eq!(controller, 405419896);
        assert_eq!(
            listener,
            ListenerConfig {
                address: "192.168.1.100".parse().unwrap(),
                port: 60001,
                interval: 15
            }
        );
    }

    #[test]
    fn test_get_cards_response() {
        let mut packet = [0u8; 64];
        packet[0] = 0x17;
        packet[1] = 0x58;
        packet[4..8].copy_from_slice(&[0x78, 0x37, 0x2a, 0x18]);
        packet[8..12].copy_from_slice(&[0x0d, 0x00, 0x00, 0x00]);

        assert_eq!(get_cards_response(&packet).unwrap(), (405419896, 13));
    }

    #[test]
    fn test_get_event_index_response() {
        let mut packet = [0u8; 64];
        packet[0] = 0x17;
        packet[1] = 0xb4;
        packet[4..8].copy_from_slice(&[0x78, 0x37, 0x2a, 0x18]);
        packet[8..12].copy_from_slice(&[0x11, 0x27, 0x00, 0x00]);

        assert_eq!(
            get_event_index_response(&packet).unwrap(),
            (405419896, 10001)
        );
    }

    #[test]
    fn test_get_door_response() {
        let mut packet = [0u8; 64];
        packet[0] = 0x17;
        packet[1] = 0x82;
        packet[4..8].copy_from_slice(&[0x78, 0x37, 0x2a, 0x18]);
        packet[8] = 0x03;
        packet[9] = 0x03;
        packet[10] = 0x07;

        let (controller, control) = get_door_response(&packet).unwrap();

        assert_eq!(controller, 405419896);
        assert_eq!(
            control,
            DoorControl {
                door: 3,
                mode: DoorMode::Controlled,
                delay: 7
            }
        );
    }

    #[test]
    fn test_get_antipassback_response() {
        let mut packet = [0u8; 64];
        packet[0] = 0x17;
        packet[1] = 0x86;
        packet[4..8].copy_from_slice(&[0x78, 0x37, 0x2a, 0x18]);
        packet[8] = 0x02;

        assert_eq!(
            get_antipassback_response(&packet).unwrap(),
            (405419896, AntiPassback::Readers13_24)
        );
    }

    #[test]
    fn test_get_antipassback_response_with_invalid_mode() {
        let mut packet = [0u8; 64];
        packet[0] = 0x17;
        packet[1] = 0x86;
        packet[4..8].copy_from_slice(&[0x78, 0x37, 0x2a, 0x18]);
        packet[8] = 0x05;

        assert!(get_antipassback_response(&packet).is_err());
    }

    #[test]
    fn test_ack_response() {
        let mut packet = [0u8; 64];
        packet[0] = 0x17;
        packet[1] = 0x40;
        packet[4..8].copy_from_slice(&[0x78, 0x37, 0x2a, 0x18]);
        packet[8] = 0x01;

        assert_eq!(open_door_response(&packet).unwrap(), (405419896, true));

        packet[8] = 0x00;
        assert_eq!(open_door_response(&packet).unwrap(), (405419896, false));
    }
}
