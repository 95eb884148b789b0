//! Watchface application context
//!
//! Owns everything the event handlers and the renderer share, and tracks the
//! lifecycle the host drives it through: created and loaded at boot, active
//! while events are delivered, torn down on shutdown.

use chrono::{NaiveTime, Timelike};
use embedded_graphics::draw_target::DrawTarget;

use crate::{
    battery::BatteryInfo,
    clock::{ClockState, WatchHost},
    config::WatchfaceConfig,
    logging::{debug, info},
    ui::{palette::Palette, ClockFaceRenderer, ColorMode, WatchFace, WatchFaceState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lifecycle {
    /// State initialised, no events subscribed yet
    Loaded,
    /// Receiving minute ticks and connection changes
    Active,
    /// Shut down, no further events accepted
    TornDown,
}

/// Events delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    /// A new minute started; carries the local wall-clock time
    MinuteTick(NaiveTime),
    /// The phone connected (`true`) or disconnected (`false`)
    ConnectionChanged(bool),
}

pub struct Watchface {
    config: WatchfaceConfig,
    renderer: ClockFaceRenderer,
    clock: ClockState,
    lifecycle: Lifecycle,
}

impl Watchface {
    /// Create the watchface showing the time of `now`.
    pub fn new<T: Timelike>(config: WatchfaceConfig, now: &T) -> Self {
        debug!("Loading watchface (colour: {})", config.supports_color);
        Self {
            config,
            renderer: ClockFaceRenderer::new(Palette::new(config.supports_color)),
            clock: ClockState::new(now),
            lifecycle: Lifecycle::Loaded,
        }
    }

    pub fn config(&self) -> &WatchfaceConfig {
        &self.config
    }

    pub fn clock(&self) -> &ClockState {
        &self.clock
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Start accepting events and request the first frame.
    pub fn activate<H: WatchHost>(&mut self, host: &mut H) -> Result<(), Error> {
        match self.lifecycle {
            Lifecycle::Loaded => {
                self.lifecycle = Lifecycle::Active;
                info!("Watchface active");
                host.request_redraw();
                Ok(())
            }
            Lifecycle::Active => Err(Error::AlreadyActive),
            Lifecycle::TornDown => Err(Error::TornDown),
        }
    }

    /// Dispatch a host event to the clock state.
    ///
    /// Events outside of the active phase are rejected and leave the state
    /// untouched.
    pub fn handle<H: WatchHost>(&mut self, event: WatchEvent, host: &mut H) -> Result<(), Error> {
        match self.lifecycle {
            Lifecycle::Active => {}
            Lifecycle::Loaded => return Err(Error::NotActive),
            Lifecycle::TornDown => return Err(Error::TornDown),
        }

        match event {
            WatchEvent::MinuteTick(time) => self.clock.on_minute_tick(&time, host),
            WatchEvent::ConnectionChanged(connected) => {
                self.clock.on_connection_change(connected, host)
            }
        }
        Ok(())
    }

    /// Snapshot of what the next frame shows.
    pub fn state(&self, battery: BatteryInfo) -> WatchFaceState {
        WatchFaceState {
            digits: self.clock.digits(),
            connected: self.clock.connected(),
            battery,
        }
    }

    /// Draw a complete frame with a fresh battery reading.
    pub fn draw<D>(&self, target: &mut D, battery: BatteryInfo) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        self.renderer.draw(target, &self.state(battery))
    }

    /// Stop accepting events.
    pub fn teardown(&mut self) -> Result<(), Error> {
        if self.lifecycle == Lifecycle::TornDown {
            return Err(Error::TornDown);
        }
        self.lifecycle = Lifecycle::TornDown;
        info!("Watchface torn down");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Event arrived before activation
    NotActive,
    AlreadyActive,
    TornDown,
}
