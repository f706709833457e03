//! Request packet encoders
//!
//! One encoder per request type. Encoders validate field ranges (doors,
//! time profile IDs, PINs, passcodes) before packing - the controller
//! silently misbehaves on out-of-range values rather than rejecting them.

use std::net::Ipv4Addr;

use chrono::NaiveDateTime;

use uhppote_types::{AntiPassback, Card, DoorMode, Interlock, Task, TimeProfile, Weekdays};

use crate::error::{Error, Result};
use crate::function::Function;
use crate::packet::Packet;
use crate::MAGIC;

/// Maximum keypad PIN/passcode value
pub const MAX_PIN: u32 = 999_999;

fn check_door(door: u8) -> Result<()> {
    if (1..=4).contains(&door) {
        Ok(())
    } else {
        Err(Error::ValueOutOfRange {
            field: "door",
            value: door as u32,
        })
    }
}

pub fn get_controller_request(controller: u32) -> Packet {
    Packet::new(Function::GetController, controller)
}

/// The controller does not reply to a set-ipv4 request.
pub fn set_ipv4_request(
    controller: u32,
    address: Ipv4Addr,
    netmask: Ipv4Addr,
    gateway: Ipv4Addr,
) -> Packet {
    let mut packet = Packet::new(Function::SetIPv4, controller);

    packet.put_ipv4(8, address);
    packet.put_ipv4(12, netmask);
    packet.put_ipv4(16, gateway);
    packet.put_u32(20, MAGIC);

    packet
}

pub fn get_time_request(controller: u32) -> Packet {
    Packet::new(Function::GetTime, controller)
}

pub fn set_time_request(controller: u32, datetime: NaiveDateTime) -> Result<Packet> {
    let mut packet = Packet::new(Function::SetTime, controller);

    packet.put_datetime(8, datetime, "date/time")?;

    Ok(packet)
}

pub fn get_status_request(controller: u32) -> Packet {
    Packet::new(Function::GetStatus, controller)
}

pub fn get_listener_request(controller: u32) -> Packet {
    Packet::new(Function::GetListener, controller)
}

/// An `interval` of 0 disables status auto-send.
pub fn set_listener_request(controller: u32, address: Ipv4Addr, port: u16, interval: u8) -> Packet {
    let mut packet = Packet::new(Function::SetListener, controller);

    packet.put_ipv4(8, address);
    packet.put_u16(12, port);
    packet.put_u8(14, interval);

    packet
}

pub fn get_door_request(controller: u32, door: u8) -> Result<Packet> {
    check_door(door)?;

    let mut packet = Packet::new(Function::GetDoor, controller);
    packet.put_u8(8, door);

    Ok(packet)
}

pub fn set_door_request(controller: u32, door: u8, mode: DoorMode, delay: u8) -> Result<Packet> {
    check_door(door)?;

    let mut packet = Packet::new(Function::SetDoor, controller);
    packet.put_u8(8, door);
    packet.put_u8(9, mode.into());
    packet.put_u8(10, delay);

    Ok(packet)
}

pub fn open_door_request(controller: u32, door: u8) -> Result<Packet> {
    check_door(door)?;

    let mut packet = Packet::new(Function::OpenDoor, controller);
    packet.put_u8(8, door);

    Ok(packet)
}

pub fn get_cards_request(controller: u32) -> Packet {
    Packet::new(Function::GetCards, controller)
}

pub fn get_card_request(controller: u32, card: u32) -> Packet {
    let mut packet = Packet::new(Function::GetCard, controller);
    packet.put_u32(8, card);

    packet
}

pub fn get_card_at_index_request(controller: u32, index: u32) -> Packet {
    let mut packet = Packet::new(Function::GetCardAtIndex, controller);
    packet.put_u32(8, index);

    packet
}

/// Missing start/end dates are encoded as all-zero (never valid) date
/// fields.
pub fn put_card_request(controller: u32, card: &Card) -> Result<Packet> {
    if card.pin > MAX_PIN {
        return Err(Error::ValueOutOfRange {
            field: "PIN",
            value: card.pin,
        });
    }

    let mut packet = Packet::new(Function::PutCard, controller);

    packet.put_u32(8, card.card);

    if let Some(date) = card.start_date {
        packet.put_date(12, date, "start date")?;
    }

    if let Some(date) = card.end_date {
        packet.put_date(16, date, "end date")?;
    }

    packet.put_u8(20, card.doors[0].into());
    packet.put_u8(21, card.doors[1].into());
    packet.put_u8(22, card.doors[2].into());
    packet.put_u8(23, card.doors[3].into());
    packet.put_pin(24, card.pin);

    Ok(packet)
}

pub fn delete_card_request(controller: u32, card: u32) -> Packet {
    let mut packet = Packet::new(Function::DeleteCard, controller);
    packet.put_u32(8, card);

    packet
}

pub fn delete_all_cards_request(controller: u32) -> Packet {
    let mut packet = Packet::new(Function::DeleteAllCards, controller);
    packet.put_u32(8, MAGIC);

    packet
}

pub fn get_event_request(controller: u32, index: u32) -> Packet {
    let mut packet = Packet::new(Function::GetEvent, controller);
    packet.put_u32(8, index);

    packet
}

pub fn get_event_index_request(controller: u32) -> Packet {
    Packet::new(Function::GetEventIndex, controller)
}

pub fn set_event_index_request(controller: u32, index: u32) -> Packet {
    let mut packet = Packet::new(Function::SetEventIndex, controller);
    packet.put_u32(8, index);
    packet.put_u32(12, MAGIC);

    packet
}

pub fn record_special_events_request(controller: u32, enable: bool) -> Packet {
    let mut packet = Packet::new(Function::RecordSpecialEvents, controller);
    packet.put_bool(8, enable);

    packet
}

pub fn get_time_profile_request(controller: u32, profile_id: u8) -> Packet {
    let mut packet = Packet::new(Function::GetTimeProfile, controller);
    packet.put_u8(8, profile_id);

    packet
}

/// Profile IDs 0, 1 and 255 are reserved by the firmware.
pub fn set_time_profile_request(controller: u32, profile: &TimeProfile) -> Result<Packet> {
    if !(2..=254).contains(&profile.id) {
        return Err(Error::ValueOutOfRange {
            field: "time profile ID",
            value: profile.id as u32,
        });
    }

    let mut packet = Packet::new(Function::SetTimeProfile, controller);

    packet.put_u8(8, profile.id);

    if let Some(date) = profile.start_date {
        packet.put_date(9, date, "start date")?;
    }

    if let Some(date) = profile.end_date {
        packet.put_date(13, date, "end date")?;
    }

    packet.put_bool(17, profile.weekdays.contains(Weekdays::MONDAY));
    packet.put_bool(18, profile.weekdays.contains(Weekdays::TUESDAY));
    packet.put_bool(19, profile.weekdays.contains(Weekdays::WEDNESDAY));
    packet.put_bool(20, profile.weekdays.contains(Weekdays::THURSDAY));
    packet.put_bool(21, profile.weekdays.contains(Weekdays::FRIDAY));
    packet.put_bool(22, profile.weekdays.contains(Weekdays::SATURDAY));
    packet.put_bool(23, profile.weekdays.contains(Weekdays::SUNDAY));

    for (i, segment) in profile.segments.iter().enumerate() {
        let offset = 24 + 4 * i;

        if let Some(start) = segment.start {
            packet.put_hhmm(offset, start);
        }

        if let Some(end) = segment.end {
            packet.put_hhmm(offset + 2, end);
        }
    }

    packet.put_u8(36, profile.linked);

    Ok(packet)
}

pub fn clear_time_profiles_request(controller: u32) -> Packet {
    let mut packet = Packet::new(Function::ClearTimeProfiles, controller);
    packet.put_u32(8, MAGIC);

    packet
}

pub fn add_task_request(controller: u32, task: &Task) -> Result<Packet> {
    check_door(task.door)?;

    let mut packet = Packet::new(Function::AddTask, controller);

    packet.put_date(8, task.start_date, "start date")?;
    packet.put_date(12, task.end_date, "end date")?;

    packet.put_bool(16, task.weekdays.contains(Weekdays::MONDAY));
    packet.put_bool(17, task.weekdays.contains(Weekdays::TUESDAY));
    packet.put_bool(18, task.weekdays.contains(Weekdays::WEDNESDAY));
    packet.put_bool(19, task.weekdays.contains(Weekdays::THURSDAY));
    packet.put_bool(20, task.weekdays.contains(Weekdays::FRIDAY));
    packet.put_bool(21, task.weekdays.contains(Weekdays::SATURDAY));
    packet.put_bool(22, task.weekdays.contains(Weekdays::SUNDAY));

    packet.put_hhmm(23, task.start_time);
    packet.put_u8(25, task.door);
    packet.put_u8(26, task.task_type.into());
    packet.put_u8(27, task.more_cards);

    Ok(packet)
}

pub fn refresh_tasklist_request(controller: u32) -> Packet {
    let mut packet = Packet::new(Function::RefreshTaskList, controller);
    packet.put_u32(8, MAGIC);

    packet
}

pub fn clear_tasklist_request(controller: u32) -> Packet {
    let mut packet = Packet::new(Function::ClearTaskList, controller);
    packet.put_u32(8, MAGIC);

    packet
}

/// While remote access control is enabled the host is expected to interact
/// with the controller at least once every 30 seconds, failing which the
/// controller falls back to its internal access control list.
pub fn set_pc_control_request(controller: u32, enable: bool) -> Packet {
    let mut packet = Packet::new(Function::SetPcControl, controller);

    packet.put_u32(8, MAGIC);
    packet.put_bool(12, enable);

    packet
}

pub fn set_interlock_request(controller: u32, interlock: Interlock) -> Packet {
    let mut packet = Packet::new(Function::SetInterlock, controller);
    packet.put_u8(8, interlock.into());

    packet
}

pub fn activate_keypads_request(
    controller: u32,
    reader1: bool,
    reader2: bool,
    reader3: bool,
    reader4: bool,
) -> Packet {
    let mut packet = Packet::new(Function::ActivateKeypads, controller);

    packet.put_bool(8, reader1);
    packet.put_bool(9, reader2);
    packet.put_bool(10, reader3);
    packet.put_bool(11, reader4);

    packet
}

pub fn set_door_passcodes_request(
    controller: u32,
    door: u8,
    passcodes: [u32; 4],
) -> Result<Packet> {
    check_door(door)?;

    for passcode in passcodes {
        if passcode > MAX_PIN {
            return Err(Error::ValueOutOfRange {
                field: "passcode",
                value: passcode,
            });
        }
    }

    let mut packet = Packet::new(Function::SetDoorPasscodes, controller);

    packet.put_u8(8, door);
    packet.put_u32(12, passcodes[0]);
    packet.put_u32(16, passcodes[1]);
    packet.put_u32(20, passcodes[2]);
    packet.put_u32(24, passcodes[3]);

    Ok(packet)
}

pub fn get_antipassback_request(controller: u32) -> Packet {
    Packet::new(Function::GetAntiPassback, controller)
}

pub fn set_antipassback_request(controller: u32, antipassback: AntiPassback) -> Packet {
    let mut packet = Packet::new(Function::SetAntiPassback, controller);
    packet.put_u8(8, antipassback.into());

    packet
}

/// Resets the controller configuration to the manufacturer defaults.
pub fn restore_default_parameters_request(controller: u32) -> Packet {
    let mut packet = Packet::new(Function::RestoreDefaultParameters, controller);
    packet.put_u32(8, MAGIC);

    packet
}
