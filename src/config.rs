//! Watchface configuration
//!
//! Resolved once at startup and handed to [`crate::Watchface::new`].

/// Default haptic pulse length in milliseconds.
pub const DEFAULT_PULSE_MS: u32 = 200;

/// Default backlight level (0–7).
pub const DEFAULT_BRIGHTNESS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchfaceConfig {
    /// Whether the panel can show the battery colour signals
    pub supports_color: bool,
    /// Offset of local time from UTC in seconds
    pub utc_offset_secs: i32,
    /// Length of the connection-change vibration in milliseconds
    pub pulse_ms: u32,
    /// Backlight level (0–7) set on boot
    pub brightness: u8,
}

impl WatchfaceConfig {
    pub const DEFAULT: Self = Self {
        supports_color: true,
        utc_offset_secs: 0,
        pulse_ms: DEFAULT_PULSE_MS,
        brightness: DEFAULT_BRIGHTNESS,
    };

    pub const fn with_color(mut self, supports_color: bool) -> Self {
        self.supports_color = supports_color;
        self
    }

    pub const fn with_utc_offset(mut self, secs: i32) -> Self {
        self.utc_offset_secs = secs;
        self
    }

    pub const fn with_pulse_ms(mut self, pulse_ms: u32) -> Self {
        self.pulse_ms = pulse_ms;
        self
    }

    /// Set the boot brightness, clamped to the highest backlight level.
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = if brightness > 7 { 7 } else { brightness };
        self
    }
}

impl Default for WatchfaceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
