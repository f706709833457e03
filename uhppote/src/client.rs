//! High-level async client

use std::net::Ipv4Addr;
use std::time::Duration;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use uhppote_core::{decode, encode};
use uhppote_transport::{broadcast_collect, exchange, send_no_reply, Config, DEFAULT_TIMEOUT};
use uhppote_types::{
    AntiPassback, Card, Controller, ControllerInfo, DoorControl, DoorMode, Event, Interlock,
    ListenerConfig, Status, TimeProfile, Task, CARD_DELETED, EVENT_OVERWRITTEN,
};

use crate::error::{Error, Result};

/// UHPPOTE access controller client
///
/// One method per controller operation. Each call is a single bounded
/// request/reply exchange - there are no retries and no connection state.
///
/// Controllers are addressed by serial number; a [`Controller`] reference
/// with an address and optional protocol selects unicast UDP or TCP instead
/// of broadcast.
///
/// # Examples
///
/// ```no_run
/// use uhppote::{Client, Config};
///
/// #[tokio::main]
/// async fn main() -> uhppote::Result<()> {
///     let client = Client::new(Config::default());
///
///     let controller = client.get_controller(405419896).await?;
///     println!("{}", controller);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    timeout: Duration,
}

impl Client {
    /// Create a client with the default 2.5s exchange timeout.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the exchange timeout. Values outside [50ms..30s] are clamped at
    /// the point of use.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The network configuration this client was constructed with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Discovers all controllers reachable by UDP broadcast.
    ///
    /// Replies that cannot be decoded are skipped, not errors - unrelated
    /// devices may answer a broadcast.
    pub async fn get_all_controllers(&self) -> Result<Vec<ControllerInfo>> {
        let request = encode::get_controller_request(0);
        let replies = broadcast_collect(&self.config, &request, self.timeout).await?;

        debug!("discovery received {} replies", replies.len());

        let mut controllers = Vec::with_capacity(replies.len());
        for reply in &replies {
            match decode::get_controller_response(reply) {
                Ok(info) => controllers.push(info),
                Err(e) => warn!("discarding undecodable discovery reply: {}", e),
            }
        }

        Ok(controllers)
    }

    /// Controller serial number, network configuration, MAC, firmware
    /// version and release date.
    pub async fn get_controller<C: Into<Controller>>(&self, controller: C) -> Result<ControllerInfo> {
        let controller = controller.into();
        let request = encode::get_controller_request(controller.id());
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        Ok(decode::get_controller_response(&reply)?)
    }

    /// Sets the controller IPv4 address, netmask and gateway. The controller
    /// does not reply to this request.
    pub async fn set_ip<C: Into<Controller>>(
        &self,
        controller: C,
        address: Ipv4Addr,
        netmask: Ipv4Addr,
        gateway: Ipv4Addr,
    ) -> Result<()> {
        let controller = controller.into();
        let request = encode::set_ipv4_request(controller.id(), address, netmask, gateway);

        send_no_reply(&self.config, &controller, &request, self.timeout).await?;

        Ok(())
    }

    /// Controller date/time. `None` if the controller reports an invalid
    /// date/time.
    pub async fn get_time<C: Into<Controller>>(&self, controller: C) -> Result<Option<NaiveDateTime>> {
        let controller = controller.into();
        let request = encode::get_time_request(controller.id());
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, datetime) = decode::get_time_response(&reply)?;

        Ok(datetime)
    }

    /// Sets the controller date/time and returns the echoed value.
    pub async fn set_time<C: Into<Controller>>(
        &self,
        controller: C,
        datetime: NaiveDateTime,
    ) -> Result<Option<NaiveDateTime>> {
        let controller = controller.into();
        let request = encode::set_time_request(controller.id(), datetime)?;
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, datetime) = decode::set_time_response(&reply)?;

        Ok(datetime)
    }

    /// Controller status snapshot, including the most recent event (if any).
    pub async fn get_status<C: Into<Controller>>(&self, controller: C) -> Result<Status> {
        let controller = controller.into();
        let request = encode::get_status_request(controller.id());
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        Ok(decode::get_status_response(&reply)?)
    }

    /// Configured event listener address, port and auto-send interval.
    pub async fn get_listener<C: Into<Controller>>(&self, controller: C) -> Result<ListenerConfig> {
        let controller = controller.into();
        let request = encode::get_listener_request(controller.id());
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, listener) = decode::get_listener_response(&reply)?;

        Ok(listener)
    }

    /// Sets the host to which the controller sends events. An `interval` of
    /// 0 disables unsolicited status packets.
    pub async fn set_listener<C: Into<Controller>>(
        &self,
        controller: C,
        address: Ipv4Addr,
        port: u16,
        interval: u8,
    ) -> Result<bool> {
        let controller = controller.into();
        let request = encode::set_listener_request(controller.id(), address, port, interval);
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::set_listener_response(&reply)?;

        Ok(ok)
    }

    /// Control mode and unlock delay for a door.
    pub async fn get_door_control<C: Into<Controller>>(
        &self,
        controller: C,
        door: u8,
    ) -> Result<DoorControl> {
        let controller = controller.into();
        let request = encode::get_door_request(controller.id(), door)?;
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, control) = decode::get_door_response(&reply)?;

        Ok(control)
    }

    /// Sets the control mode and unlock delay for a door, returning the
    /// echoed settings.
    pub async fn set_door_control<C: Into<Controller>>(
        &self,
        controller: C,
        door: u8,
        mode: DoorMode,
        delay: u8,
    ) -> Result<DoorControl> {
        let controller = controller.into();
        let request = encode::set_door_request(controller.id(), door, mode, delay)?;
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, control) = decode::set_door_response(&reply)?;

        Ok(control)
    }

    /// Remotely unlocks a door.
    pub async fn open_door<C: Into<Controller>>(&self, controller: C, door: u8) -> Result<bool> {
        let controller = controller.into();
        let request = encode::open_door_request(controller.id(), door)?;
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::open_door_response(&reply)?;

        Ok(ok)
    }

    /// Number of card records, including deleted-but-not-compacted records.
    pub async fn get_cards<C: Into<Controller>>(&self, controller: C) -> Result<u32> {
        let controller = controller.into();
        let request = encode::get_cards_request(controller.id());
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, cards) = decode::get_cards_response(&reply)?;

        Ok(cards)
    }

    /// Card access record, by card number.
    ///
    /// # Errors
    ///
    /// [`Error::CardNotFound`] if the controller has no record for the card.
    pub async fn get_card<C: Into<Controller>>(&self, controller: C, card: u32) -> Result<Card> {
        let controller = controller.into();
        let request = encode::get_card_request(controller.id(), card);
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, record) = decode::get_card_response(&reply)?;

        if record.card == 0 {
            return Err(Error::CardNotFound { card });
        }

        Ok(record)
    }

    /// Card access record, by index into the controller's card list.
    ///
    /// # Errors
    ///
    /// [`Error::CardNotFound`] if the index is out of range,
    /// [`Error::CardDeleted`] if the record at the index is a tombstone.
    pub async fn get_card_by_index<C: Into<Controller>>(
        &self,
        controller: C,
        index: u32,
    ) -> Result<Card> {
        let controller = controller.into();
        let request = encode::get_card_at_index_request(controller.id(), index);
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, record) = decode::get_card_at_index_response(&reply)?;

        if record.card == 0 {
            return Err(Error::CardNotFound { card: 0 });
        }

        if record.card == CARD_DELETED {
            return Err(Error::CardDeleted { index });
        }

        Ok(record)
    }

    /// Adds or updates a card access record.
    pub async fn put_card<C: Into<Controller>>(&self, controller: C, card: &Card) -> Result<bool> {
        let controller = controller.into();
        let request = encode::put_card_request(controller.id(), card)?;
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::put_card_response(&reply)?;

        Ok(ok)
    }

    /// Deletes a card record.
    pub async fn delete_card<C: Into<Controller>>(&self, controller: C, card: u32) -> Result<bool> {
        let controller = controller.into();
        let request = encode::delete_card_request(controller.id(), card);
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::delete_card_response(&reply)?;

        Ok(ok)
    }

    /// Deletes all card records.
    pub async fn delete_all_cards<C: Into<Controller>>(&self, controller: C) -> Result<bool> {
        let controller = controller.into();
        let request = encode::delete_all_cards_request(controller.id());
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::delete_all_cards_response(&reply)?;

        Ok(ok)
    }

    /// Event record, by index into the controller's event list.
    ///
    /// # Errors
    ///
    /// [`Error::EventOverwritten`] if the event has been overwritten by the
    /// controller's ring buffer, [`Error::EventNotFound`] if there is no
    /// event at the index.
    pub async fn get_event<C: Into<Controller>>(&self, controller: C, index: u32) -> Result<Event> {
        let controller = controller.into();
        let request = encode::get_event_request(controller.id(), index);
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, event) = decode::get_event_response(&reply)?;

        if event.event_type == EVENT_OVERWRITTEN {
            return Err(Error::EventOverwritten { index });
        }

        if event.index == 0 {
            return Err(Error::EventNotFound { index });
        }

        Ok(event)
    }

    /// The controller's downloaded-events marker.
    pub async fn get_event_index<C: Into<Controller>>(&self, controller: C) -> Result<u32> {
        let controller = controller.into();
        let request = encode::get_event_index_request(controller.id());
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, index) = decode::get_event_index_response(&reply)?;

        Ok(index)
    }

    /// Sets the controller's downloaded-events marker. The controller
    /// replies not-ok if the index is unchanged.
    pub async fn set_event_index<C: Into<Controller>>(
        &self,
        controller: C,
        index: u32,
    ) -> Result<bool> {
        let controller = controller.into();
        let request = encode::set_event_index_request(controller.id(), index);
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::set_event_index_response(&reply)?;

        Ok(ok)
    }

    /// Enables or disables events for door open/close and pushbutton
    /// presses.
    pub async fn record_special_events<C: Into<Controller>>(
        &self,
        controller: C,
        enable: bool,
    ) -> Result<bool> {
        let controller = controller.into();
        let request = encode::record_special_events_request(controller.id(), enable);
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::record_special_events_response(&reply)?;

        Ok(ok)
    }

    /// Time profile, by profile ID.
    ///
    /// # Errors
    ///
    /// [`Error::TimeProfileNotFound`] if the profile is not defined.
    pub async fn get_time_profile<C: Into<Controller>>(
        &self,
        controller: C,
        profile_id: u8,
    ) -> Result<TimeProfile> {
        let controller = controller.into();
        let request = encode::get_time_profile_request(controller.id(), profile_id);
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, profile) = decode::get_time_profile_response(&reply)?;

        if profile.id == 0 {
            return Err(Error::TimeProfileNotFound { profile_id });
        }

        Ok(profile)
    }

    /// Adds or updates a time profile.
    pub async fn set_time_profile<C: Into<Controller>>(
        &self,
        controller: C,
        profile: &TimeProfile,
    ) -> Result<bool> {
        let controller = controller.into();
        let request = encode::set_time_profile_request(controller.id(), profile)?;
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::set_time_profile_response(&reply)?;

        Ok(ok)
    }

    /// Deletes all time profiles.
    pub async fn delete_all_time_profiles<C: Into<Controller>>(&self, controller: C) -> Result<bool> {
        let controller = controller.into();
        let request = encode::clear_time_profiles_request(controller.id());
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::clear_time_profiles_response(&reply)?;

        Ok(ok)
    }

    /// Queues a scheduled task. Queued tasks only become active after
    /// [`refresh_tasklist`](Self::refresh_tasklist).
    pub async fn add_task<C: Into<Controller>>(&self, controller: C, task: &Task) -> Result<bool> {
        let controller = controller.into();
        let request = encode::add_task_request(controller.id(), task)?;
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::add_task_response(&reply)?;

        Ok(ok)
    }

    /// Activates all queued tasks.
    pub async fn refresh_tasklist<C: Into<Controller>>(&self, controller: C) -> Result<bool> {
        let controller = controller.into();
        let request = encode::refresh_tasklist_request(controller.id());
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::refresh_tasklist_response(&reply)?;

        Ok(ok)
    }

    /// Clears all active and queued tasks.
    pub async fn clear_tasklist<C: Into<Controller>>(&self, controller: C) -> Result<bool> {
        let controller = controller.into();
        let request = encode::clear_tasklist_request(controller.id());
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::clear_tasklist_response(&reply)?;

        Ok(ok)
    }

    /// Defers access control decisions to a remote host. The host is
    /// expected to interact with the controller at least once every 30
    /// seconds, failing which the controller falls back to its internal
    /// access control list.
    pub async fn set_pc_control<C: Into<Controller>>(
        &self,
        controller: C,
        enable: bool,
    ) -> Result<bool> {
        let controller = controller.into();
        let request = encode::set_pc_control_request(controller.id(), enable);
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::set_pc_control_response(&reply)?;

        Ok(ok)
    }

    /// Sets the door interlock mode.
    pub async fn set_interlock<C: Into<Controller>>(
        &self,
        controller: C,
        interlock: Interlock,
    ) -> Result<bool> {
        let controller = controller.into();
        let request = encode::set_interlock_request(controller.id(), interlock);
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::set_interlock_response(&reply)?;

        Ok(ok)
    }

    /// Enables or disables the reader access keypads.
    pub async fn activate_keypads<C: Into<Controller>>(
        &self,
        controller: C,
        reader1: bool,
        reader2: bool,
        reader3: bool,
        reader4: bool,
    ) -> Result<bool> {
        let controller = controller.into();
        let request =
            encode::activate_keypads_request(controller.id(), reader1, reader2, reader3, reader4);
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::activate_keypads_response(&reply)?;

        Ok(ok)
    }

    /// Sets up to four supervisor passcodes for a door. A passcode of 0 is
    /// 'none'.
    pub async fn set_door_passcodes<C: Into<Controller>>(
        &self,
        controller: C,
        door: u8,
        passcodes: [u32; 4],
    ) -> Result<bool> {
        let controller = controller.into();
        let request = encode::set_door_passcodes_request(controller.id(), door, passcodes)?;
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::set_door_passcodes_response(&reply)?;

        Ok(ok)
    }

    /// The controller anti-passback mode.
    pub async fn get_antipassback<C: Into<Controller>>(&self, controller: C) -> Result<AntiPassback> {
        let controller = controller.into();
        let request = encode::get_antipassback_request(controller.id());
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, antipassback) = decode::get_antipassback_response(&reply)?;

        Ok(antipassback)
    }

    /// Sets the controller anti-passback mode.
    pub async fn set_antipassback<C: Into<Controller>>(
        &self,
        controller: C,
        antipassback: AntiPassback,
    ) -> Result<bool> {
        let controller = controller.into();
        let request = encode::set_antipassback_request(controller.id(), antipassback);
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::set_antipassback_response(&reply)?;

        Ok(ok)
    }

    /// Resets the controller configuration to the manufacturer defaults.
    pub async fn restore_default_parameters<C: Into<Controller>>(
        &self,
        controller: C,
    ) -> Result<bool> {
        let controller = controller.into();
        let request = encode::restore_default_parameters_request(controller.id());
        let reply = exchange(&self.config, &controller, &request, self.timeout).await?;

        let (_, ok) = decode::restore_default_parameters_response(&reply)?;

        Ok(ok)
    }
}
