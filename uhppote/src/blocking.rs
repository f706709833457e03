//! Blocking client
//!
//! A synchronous wrapper over the async [`Client`](crate::Client) for
//! applications without an async runtime. Each client owns a current-thread
//! tokio runtime and drives the async call to completion on the calling
//! thread.

use std::net::Ipv4Addr;
use std::time::Duration;

use chrono::NaiveDateTime;
use tokio::runtime::{Builder, Runtime};

use uhppote_transport::Config;
use uhppote_types::{
    AntiPassback, Card, Controller, ControllerInfo, DoorControl, DoorMode, Event, Interlock,
    ListenerConfig, Status, TimeProfile, Task,
};

use crate::error::Result;

/// Blocking UHPPOTE access controller client
///
/// # Examples
///
/// ```no_run
/// use uhppote::blocking::Client;
/// use uhppote::Config;
///
/// fn main() -> uhppote::Result<()> {
///     let client = Client::new(Config::default())?;
///
///     let controller = client.get_controller(405419896)?;
///     println!("{}", controller);
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Client {
    inner: crate::Client,
    runtime: Runtime,
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;

        Ok(Self {
            inner: crate::Client::new(config),
            runtime,
        })
    }

    /// Set the exchange timeout. Values outside [50ms..30s] are clamped at
    /// the point of use.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.with_timeout(timeout);
        self
    }

    pub fn get_all_controllers(&self) -> Result<Vec<ControllerInfo>> {
        self.runtime.block_on(self.inner.get_all_controllers())
    }

    pub fn get_controller<C: Into<Controller>>(&self, controller: C) -> Result<ControllerInfo> {
        self.runtime.block_on(self.inner.get_controller(controller))
    }

    pub fn set_ip<C: Into<Controller>>(
        &self,
        controller: C,
        address: Ipv4Addr,
        netmask: Ipv4Addr,
        gateway: Ipv4Addr,
    ) -> Result<()> {
        self.runtime
            .block_on(self.inner.set_ip(controller, address, netmask, gateway))
    }

    pub fn get_time<C: Into<Controller>>(&self, controller: C) -> Result<Option<NaiveDateTime>> {
        self.runtime.block_on(self.inner.get_time(controller))
    }

    pub fn set_time<C: Into<Controller>>(
        &self,
        controller: C,
        datetime: NaiveDateTime,
    ) -> Result<Option<NaiveDateTime>> {
        self.runtime
            .block_on(self.inner.set_time(controller, datetime))
    }

    pub fn get_status<C: Into<Controller>>(&self, controller: C) -> Result<Status> {
        self.runtime.block_on(self.inner.get_status(controller))
    }

    pub fn get_listener<C: Into<Controller>>(&self, controller: C) -> Result<ListenerConfig> {
        self.runtime.block_on(self.inner.get_listener(controller))
    }

    pub fn set_listener<C: Into<Controller>>(
        &self,
        controller: C,
        address: Ipv4Addr,
        port: u16,
        interval: u8,
    ) -> Result<bool> {
        self.runtime
            .block_on(self.inner.set_listener(controller, address, port, interval))
    }

    pub fn get_door_control<C: Into<Controller>>(
        &self,
        controller: C,
        door: u8,
    ) -> Result<DoorControl> {
        self.runtime
            .block_on(self.inner.get_door_control(controller, door))
    }

    pub fn set_door_control<C: Into<Controller>>(
        &self,
        controller: C,
        door: u8,
        mode: DoorMode,
        delay: u8,
    ) -> Result<DoorControl> {
        self.runtime
            .block_on(self.inner.set_door_control(controller, door, mode, delay))
    }

    pub fn open_door<C: Into<Controller>>(&self, controller: C, door: u8) -> Result<bool> {
        self.runtime
            .block_on(self.inner.open_door(controller, door))
    }

    pub fn get_cards<C: Into<Controller>>(&self, controller: C) -> Result<u32> {
        self.runtime.block_on(self.inner.get_cards(controller))
    }

    pub fn get_card<C: Into<Controller>>(&self, controller: C, card: u32) -> Result<Card> {
        self.runtime.block_on(self.inner.get_card(controller, card))
    }

    pub fn get_card_by_index<C: Into<Controller>>(&self, controller: C, index: u32) -> Result<Card> {
        self.runtime
            .block_on(self.inner.get_card_by_index(controller, index))
    }

    pub fn put_card<C: Into<Controller>>(&self, controller: C, card: &Card) -> Result<bool> {
        self.runtime.block_on(self.inner.put_card(controller, card))
    }

    pub fn delete_card<C: Into<Controller>>(&self, controller: C, card: u32) -> Result<bool> {
        self.runtime
            .block_on(self.inner.delete_card(controller, card))
    }

    pub fn delete_all_cards<C: Into<Controller>>(&self, controller: C) -> Result<bool> {
        self.runtime
            .block_on(self.inner.delete_all_cards(controller))
    }

    pub fn get_event<C: Into<Controller>>(&self, controller: C, index: u32) -> Result<Event> {
        self.runtime
            .block_on(self.inner.get_event(controller, index))
    }

    pub fn get_event_index<C: Into<Controller>>(&self, controller: C) -> Result<u32> {
        self.runtime
            .block_on(self.inner.get_event_index(controller))
    }

    pub fn set_event_index<C: Into<Controller>>(&self, controller: C, index: u32) -> Result<bool> {
        self.runtime
            .block_on(self.inner.set_event_index(controller, index))
    }

    pub fn record_special_events<C: Into<Controller>>(
        &self,
        controller: C,
        enable: bool,
    ) -> Result<bool> {
        self.runtime
            .block_on(self.inner.record_special_events(controller, enable))
    }

    pub fn get_time_profile<C: Into<Controller>>(
        &self,
        controller: C,
        profile_id: u8,
    ) -> Result<TimeProfile> {
        self.runtime
            .block_on(self.inner.get_time_profile(controller, profile_id))
    }

    pub fn set_time_profile<C: Into<Controller>>(
        &self,
        controller: C,
        profile: &TimeProfile,
    ) -> Result<bool> {
        self.runtime
            .block_on(self.inner.set_time_profile(controller, profile))
    }

    pub fn delete_all_time_profiles<C: Into<Controller>>(&self, controller: C) -> Result<bool> {
        self.runtime
            .block_on(self.inner.delete_all_time_profiles(controller))
    }

    pub fn add_task<C: Into<Controller>>(&self, controller: C, task: &Task) -> Result<bool> {
        self.runtime.block_on(self.inner.add_task(controller, task))
    }

    pub fn refresh_tasklist<C: Into<Controller>>(&self, controller: C) -> Result<bool> {
        self.runtime
            .block_on(self.inner.refresh_tasklist(controller))
    }

    pub fn clear_tasklist<C: Into<Controller>>(&self, controller: C) -> Result<bool> {
        self.runtime.block_on(self.inner.clear_tasklist(controller))
    }

    pub fn set_pc_control<C: Into<Controller>>(&self, controller: C, enable: bool) -> Result<bool> {
        self.runtime
            .block_on(self.inner.set_pc_control(controller, enable))
    }

    pub fn set_interlock<C: Into<Controller>>(
        &self,
        controller: C,
        interlock: Interlock,
    ) -> Result<bool> {
        self.runtime
            .block_on(self.inner.set_interlock(controller, interlock))
    }

    pub fn activate_keypads<C: Into<Controller>>(
        &self,
        controller: C,
        reader1: bool,
        reader2: bool,
        reader3: bool,
        reader4: bool,
    ) -> Result<bool> {
        self.runtime.block_on(
            self.inner
                .activate_keypads(controller, reader1, reader2, reader3, reader4),
        )
    }

    pub fn set_door_passcodes<C: Into<Controller>>(
        &self,
        controller: C,
        door: u8,
        passcodes: [u32; 4],
    ) -> Result<bool> {
        self.runtime
            .block_on(self.inner.set_door_passcodes(controller, door, passcodes))
    }

    pub fn get_antipassback<C: Into<Controller>>(&self, controller: C) -> Result<AntiPassback> {
        self.runtime
            .block_on(self.inner.get_antipassback(controller))
    }

    pub fn set_antipassback<C: Into<Controller>>(
        &self,
        controller: C,
        antipassback: AntiPassback,
    ) -> Result<bool> {
        self.runtime
            .block_on(self.inner.set_antipassback(controller, antipassback))
    }

    pub fn restore_default_parameters<C: Into<Controller>>(&self, controller: C) -> Result<bool> {
        self.runtime
            .block_on(self.inner.restore_default_parameters(controller))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocking_client_builds_runtime() {
        let client = Client::new(Config::default()).unwrap();

        // timeout builder is chainable after construction
        let _client = client.with_timeout(Duration::from_millis(500));
    }
}
