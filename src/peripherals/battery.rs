//! Battery gauge
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/battery.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::{gpio::Input, peripherals::P0_12, saadc::Saadc};

use negative_watchface::battery::{self, BatteryInfo, Error};

/// Battery configuration
struct BatteryConfig<'a> {
    /// ADC instance for battery voltage measurement (pin P0.31)
    adc: Saadc<'a, 1>,
    /// Charge indication pin:
    /// high = battery, low = charging
    pin_charge_indication: Input<'a, P0_12>,
}

/// Battery API
pub struct Battery {
    /// Battery configuration
    config: BatteryConfig<'static>,
}

impl Battery {
    /// Configure battery settings on boot
    pub fn init(adc: Saadc<'static, 1>, charge_pin: Input<'static, P0_12>) -> Self {
        Self {
            config: BatteryConfig {
                adc,
                pin_charge_indication: charge_pin,
            },
        }
    }

    /// Charging state of the battery
    pub fn is_charging(&self) -> bool {
        self.config.pin_charge_indication.is_low()
    }

    /// Battery capacity in percent
    pub async fn get_percent(&mut self) -> Result<u8, Error> {
        let voltage = self.get_voltage().await?;
        Ok(battery::percent_from_millivolts(voltage))
    }

    /// Fresh reading for the next frame.
    ///
    /// A failed measurement shows as an empty battery.
    pub async fn info(&mut self) -> BatteryInfo {
        let percent = match self.get_percent().await {
            Ok(percent) => percent,
            Err(e) => {
                defmt::warn!("Battery measurement failed: {}", e);
                0
            }
        };
        BatteryInfo::new(percent, self.is_charging())
    }

    /// Battery voltage in millivolts
    async fn get_voltage(&mut self) -> Result<u16, Error> {
        let mut buf = [0; 1];
        self.config.adc.sample(&mut buf).await;
        battery::millivolts_from_adc(buf[0])
    }
}
