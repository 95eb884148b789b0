//! Battery state and charge estimation
//!
//! Conversion formulas based upon https://wiki.pine64.org/wiki/PineTime.

/// Battery state as read at redraw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryInfo {
    /// Battery percentage, nominally 0–100
    pub percent: u8,
    /// Charging state
    pub charging: bool,
}

impl BatteryInfo {
    pub const fn new(percent: u8, charging: bool) -> Self {
        Self { percent, charging }
    }
}

/// Convert a 12 bit SAADC sample of the halved battery voltage into millivolts.
pub fn millivolts_from_adc(raw_measurement: i16) -> Result<u16, Error> {
    match raw_measurement {
        0..=4095 => {
            // Use u32 during calculation to prevent overflow:
            // multiply by 2 * 1000 for mV and divide by (2 ^ 12 / 3.3V reference)
            let adc_val = raw_measurement as u32;
            Ok((adc_val * 2000 / 1241) as u16)
        }
        _ => Err(Error::InvalidMeasurement),
    }
}

/// Estimate the remaining capacity in percent from the battery voltage.
///
/// Uses fixed data points of the LiPo discharge curve and linear
/// interpolation in between.
pub fn percent_from_millivolts(voltage: u16) -> u8 {
    (match voltage {
        0..=3449 => 0,
        3450..=3699 => (voltage - 3450) / 5,
        3700..=4199 => 50 + (voltage - 3700) / 10,
        _ => 100,
    }) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    InvalidMeasurement,
}
