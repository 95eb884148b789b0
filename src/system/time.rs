//! Wall clock for PineTime
//!
//! There is no RTC backup, so the clock starts from the time the firmware was
//! built and advances with the embassy uptime.

use chrono::{NaiveDateTime, Timelike};
use embassy_time::{Duration, Instant};

// Include current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

pub struct WallClock {
    /// UTC seconds at boot
    boot_epoch: i64,
    /// Local time offset in seconds
    utc_offset_secs: i32,
}

impl WallClock {
    pub fn new(utc_offset_secs: i32) -> Self {
        Self {
            boot_epoch: UTC_EPOCH,
            utc_offset_secs,
        }
    }

    /// Current local time
    pub fn now(&self) -> NaiveDateTime {
        let secs =
            self.boot_epoch + Instant::now().as_secs() as i64 + self.utc_offset_secs as i64;
        NaiveDateTime::from_timestamp_opt(secs, 0).unwrap_or_default()
    }

    /// Time left until the next full minute
    pub fn until_next_minute(&self) -> Duration {
        Duration::from_secs(60 - self.now().second() as u64)
    }
}
