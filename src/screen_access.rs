use log::debug;
use screenshots::Screen;

use crate::{error::ExtractError, ocr, positioning_structs::ScreenArea};

fn primary_screen() -> Result<Screen, ExtractError> {
    let screens = Screen::all().map_err(|e| ExtractError::Capture(e.to_string()))?;
    return screens
        .iter()
        .find(|screen| screen.display_info.is_primary)
        .or(screens.first())
        .cloned()
        .ok_or_else(|| ExtractError::Capture("no display found".to_string()));
}

/// Bounds of the primary display in virtual desktop coordinates.
pub fn primary_area() -> Result<ScreenArea, ExtractError> {
    let display = primary_screen()?.display_info;
    return Ok(ScreenArea::new(display.x, display.y, display.width, display.height));
}

/// Grabs the whole primary display as PNG bytes.
pub fn capture_primary_png() -> Result<Vec<u8>, ExtractError> {
    let screen = primary_screen()?;
    let image = screen.capture().map_err(|e| ExtractError::Capture(e.to_string()))?;
    debug!("Captured display {} ({} bytes)", screen.display_info.id, image.buffer().len());
    return ocr::normalize_png_bytes(image.buffer());
}
