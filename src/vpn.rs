//! Server rotation for a desktop VPN client driven purely by screen coordinates.
//!
//! There is no feedback from the client: every step is a click or scroll at a
//! configured point followed by a fixed wait. The only state is how many times
//! the rotation has run, which decides how far down the server list to scroll.

use log::info;

use crate::{
    config::VpnSettings,
    error::VpnError,
    input::Desktop,
    positioning_structs::{ScreenArea, ScreenPoint},
};

pub struct VpnChanger {
    settings: VpnSettings,
    scroll_count: u32,
}

impl VpnChanger {
    pub fn new(settings: VpnSettings) -> Self {
        Self {
            settings,
            scroll_count: 0,
        }
    }

    /// Completed rotations so far. Only ever increases.
    pub fn get_scroll_count(&self) -> u32 {
        self.scroll_count
    }

    /// Scroll steps the next rotation will issue.
    pub fn next_scroll_steps(&self) -> u32 {
        match self.settings.wrap_after {
            Some(wrap_after) if wrap_after > 0 => self.scroll_count % wrap_after + 1,
            _ => self.scroll_count.saturating_add(1),
        }
    }

    fn named_points(&self) -> [(&'static str, ScreenPoint); 4] {
        [
            ("server list", self.settings.server_list),
            ("location", self.settings.location),
            ("connect", self.settings.connect),
            ("close", self.settings.close),
        ]
    }

    /// Fails on the first configured point that the display cannot contain.
    pub fn validate_within(&self, area: ScreenArea) -> Result<(), VpnError> {
        for (name, point) in self.named_points() {
            if !area.contains(point) {
                return Err(VpnError::OffScreen { name, point, area });
            }
        }
        Ok(())
    }

    /// Opens the client, moves one entry further down the server list than
    /// last time, connects and closes the window again.
    pub fn change_vpn<D: Desktop + ?Sized>(&mut self, desktop: &mut D) -> Result<(), VpnError> {
        let settings = &self.settings;
        let timing = settings.timing;

        info!("Opening {}", settings.client_path.display());
        desktop.launch(&settings.client_path)?;
        desktop.pause(timing.launch_wait);

        info!("Opening server list at {}", settings.server_list);
        desktop.click(settings.server_list)?;
        desktop.pause(timing.server_list_wait);

        let steps = self.next_scroll_steps();
        info!("Scrolling {} step(s) of {}", steps, settings.scroll_amount);
        for _ in 0..steps {
            desktop.scroll_down(settings.scroll_amount)?;
            desktop.pause(timing.scroll_wait);
        }
        self.scroll_count = self.scroll_count.saturating_add(1);

        let settings = &self.settings;
        info!("Selecting location at {}", settings.location);
        for _ in 0..settings.location_clicks {
            desktop.click(settings.location)?;
        }
        desktop.pause(timing.select_wait);

        info!("Connecting via {}", settings.connect);
        desktop.click(settings.connect)?;
        desktop.pause(timing.connect_wait);

        info!("Closing client at {}", settings.close);
        desktop.click(settings.close)?;
        desktop.pause(timing.close_wait);

        Ok(())
    }
}
