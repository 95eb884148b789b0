//! Colours of the watchface

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use super::ColorMode;

/// Battery level below which the bar turns red (inclusive).
pub const LOW_BATTERY_PERCENT: u8 = 20;

/// Pebble's light grey (0xAAAAAA).
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// What the battery bar is signalling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryLevel {
    Charging,
    Low,
    Normal,
}

impl BatteryLevel {
    pub fn classify(charging: bool, percent: u8) -> Self {
        if charging {
            Self::Charging
        } else if percent <= LOW_BATTERY_PERCENT {
            Self::Low
        } else {
            Self::Normal
        }
    }
}

/// Battery bar colour for the given state.
///
/// Without colour support the bar cannot signal anything and is always white.
pub fn battery_color(charging: bool, percent: u8, supports_color: bool) -> ColorMode {
    if !supports_color {
        return Rgb565::WHITE;
    }
    match BatteryLevel::classify(charging, percent) {
        BatteryLevel::Charging => Rgb565::GREEN,
        BatteryLevel::Low => Rgb565::RED,
        BatteryLevel::Normal => LIGHT_GRAY,
    }
}

/// Colour set resolved once from the display capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub supports_color: bool,
    /// Window background between the cells
    pub window: ColorMode,
    /// Background grid squares
    pub cell: ColorMode,
    /// Digits, disconnection marker and the empty part of the battery bar
    pub ink: ColorMode,
}

impl Palette {
    pub const fn new(supports_color: bool) -> Self {
        Self {
            supports_color,
            window: Rgb565::BLACK,
            cell: if supports_color { LIGHT_GRAY } else { Rgb565::WHITE },
            ink: Rgb565::BLACK,
        }
    }

    pub fn battery(&self, charging: bool, percent: u8) -> ColorMode {
        battery_color(charging, percent, self.supports_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charging_wins_over_low() {
        assert_eq!(BatteryLevel::classify(true, 5), BatteryLevel::Charging);
        assert_eq!(battery_color(true, 5, true), Rgb565::GREEN);
    }

    #[test]
    fn low_threshold_is_inclusive() {
        assert_eq!(BatteryLevel::classify(false, 20), BatteryLevel::Low);
        assert_eq!(BatteryLevel::classify(false, 21), BatteryLevel::Normal);
        assert_eq!(battery_color(false, 15, true), Rgb565::RED);
    }

    #[test]
    fn full_battery_is_neutral() {
        assert_eq!(battery_color(false, 100, true), LIGHT_GRAY);
    }

    #[test]
    fn monochrome_is_always_white() {
        for (charging, percent) in [(true, 50), (false, 10), (false, 100)] {
            assert_eq!(battery_color(charging, percent, false), Rgb565::WHITE);
        }
        assert_eq!(Palette::new(false).cell, Rgb565::WHITE);
    }
}
