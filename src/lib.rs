//! "Negative" watchface
//!
//! A blocky digital clock drawn on an 18×21 grid of 8 px cells: four 3×5 digit
//! glyphs, a Bluetooth disconnection marker and a battery bar. The library holds
//! everything that does not touch hardware so it can be exercised on the host;
//! the PineTime firmware in `main.rs` feeds it with time, connectivity and
//! battery readings and hands it the display to draw on.

#![cfg_attr(not(test), no_std)]

mod logging;

pub mod battery;
pub mod clock;
pub mod config;
pub mod ui;
pub mod watchface;

pub use battery::BatteryInfo;
pub use clock::{ClockState, TimeDigits, WatchHost};
pub use config::WatchfaceConfig;
pub use watchface::{Lifecycle, WatchEvent, Watchface};
