//! Control the vibration motor
//!
//! Implementation based upon https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::{gpio::Output, peripherals::P0_16};
use embassy_time::Timer;

struct VibratorConfig<'a> {
    /// Motor enable pin (inverted)
    pin_enable: Output<'a, P0_16>,
}

pub struct Vibrator {
    /// Vibrator configuration
    config: VibratorConfig<'static>,
}

impl Vibrator {
    /// Configure vibrator on boot, motor off
    pub fn init(mut enable_pin: Output<'static, P0_16>) -> Self {
        enable_pin.set_high();
        Self {
            config: VibratorConfig {
                pin_enable: enable_pin,
            },
        }
    }

    /// Pulse the vibrator `times` times for `length_ms` each, with pauses of
    /// the same length in between.
    pub async fn pulse(&mut self, length_ms: u32, times: u8) {
        for i in 0..times {
            if i > 0 {
                Timer::after_millis(length_ms as u64).await;
            }
            self.config.pin_enable.set_low();
            Timer::after_millis(length_ms as u64).await;
            self.config.pin_enable.set_high();
        }
    }
}
