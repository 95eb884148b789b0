//! UI definitions module
//! Based on: https://github.com/lupyuen/pinetime-watchface/blob/master/src/lib.rs

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565};

use crate::{battery::BatteryInfo, clock::TimeDigits};

pub mod glyphs;
pub mod layout;
pub mod negative_watchface;
pub mod palette;

#[cfg(test)]
pub(crate) mod test_canvas;

pub use negative_watchface::ClockFaceRenderer;

/// Pixel colour of the watch display
pub type ColorMode = Rgb565;

pub trait WatchFace {
    /// Draw a complete frame for `state`
    fn draw<D>(&self, target: &mut D, state: &WatchFaceState) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>;
}

/// State for the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchFaceState {
    pub digits: TimeDigits,
    pub connected: bool,
    pub battery: BatteryInfo,
}
