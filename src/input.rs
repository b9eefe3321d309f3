use std::{path::Path, process::Command, thread, time::Duration};

use log::{debug, info};
use rustautogui::RustAutoGui;

use crate::{error::VpnError, positioning_structs::ScreenPoint};

/// Wheel delta of one notch on Windows.
pub const WHEEL_DELTA: u32 = 120;

/// Raw wheel units (what pyautogui's `scroll` takes) to whole notches, rounding up.
pub fn wheel_notches(amount: u32) -> u32 {
    amount.div_ceil(WHEEL_DELTA)
}

/// Everything the VPN routine does to the machine: start programs, inject
/// mouse input, wait.
pub trait Desktop {
    fn launch(&mut self, program: &Path) -> Result<(), VpnError>;
    fn click(&mut self, point: ScreenPoint) -> Result<(), VpnError>;
    fn scroll_down(&mut self, amount: u32) -> Result<(), VpnError>;
    fn pause(&mut self, duration: Duration);
}

/// Real input via rustautogui plus a detached child process for the client.
pub struct AutoGuiDesktop {
    gui: RustAutoGui,
}

impl AutoGuiDesktop {
    pub fn new() -> Result<Self, VpnError> {
        let gui = RustAutoGui::new(false)
            .map_err(|e| VpnError::Input(format!("Failed to initialize RustAutoGui: {}", e)))?;
        Ok(Self { gui })
    }
}

impl Desktop for AutoGuiDesktop {
    fn launch(&mut self, program: &Path) -> Result<(), VpnError> {
        let child = Command::new(program).spawn().map_err(|source| VpnError::Launch {
            path: program.to_path_buf(),
            source,
        })?;
        debug!("Spawned {} as pid {}", program.display(), child.id());
        Ok(())
    }

    fn click(&mut self, point: ScreenPoint) -> Result<(), VpnError> {
        self.gui
            .move_mouse_to_pos(point.get_x(), point.get_y(), 0.0)
            .map_err(|e| VpnError::Input(format!("move to {}: {}", point, e)))?;
        self.gui
            .left_click()
            .map_err(|e| VpnError::Input(format!("click at {}: {}", point, e)))
    }

    fn scroll_down(&mut self, amount: u32) -> Result<(), VpnError> {
        let notches = wheel_notches(amount);
        debug!("Scrolling {} wheel units as {} notch(es)", amount, notches);
        self.gui
            .scroll_down(notches)
            .map_err(|e| VpnError::Input(format!("scroll down {}: {}", amount, e)))
    }

    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Logs what would happen and returns straight away.
#[derive(Debug, Default)]
pub struct DryRunDesktop;

impl Desktop for DryRunDesktop {
    fn launch(&mut self, program: &Path) -> Result<(), VpnError> {
        info!("[dry-run] launch {}", program.display());
        Ok(())
    }

    fn click(&mut self, point: ScreenPoint) -> Result<(), VpnError> {
        info!("[dry-run] click {}", point);
        Ok(())
    }

    fn scroll_down(&mut self, amount: u32) -> Result<(), VpnError> {
        info!("[dry-run] scroll down {}", amount);
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        debug!("[dry-run] skip {:?} wait", duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_units_round_up_to_notches() {
        assert_eq!(wheel_notches(500), 5);
        assert_eq!(wheel_notches(480), 4);
        assert_eq!(wheel_notches(120), 1);
        assert_eq!(wheel_notches(1), 1);
        assert_eq!(wheel_notches(0), 0);
    }

    #[test]
    fn largest_configurable_amount_fits_a_wheel_delta() {
        let notches = wheel_notches(crate::config::MAX_SCROLL_AMOUNT) as i64;
        assert!(notches * WHEEL_DELTA as i64 <= i32::MAX as i64);
    }
}
