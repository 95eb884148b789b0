//! Clock state: the displayed digits and the connection flag

use chrono::Timelike;

/// Collaborator that owns the screen and the vibration motor.
///
/// The watchface never draws or vibrates on its own; it only asks the host to
/// do so once the current event has been handled.
pub trait WatchHost {
    /// Mark the watchface as dirty so it gets redrawn.
    fn request_redraw(&mut self);

    /// Give one short haptic pulse.
    fn short_pulse(&mut self);
}

/// The four displayed digits: hour tens, hour units, minute tens, minute units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeDigits([u8; 4]);

impl TimeDigits {
    /// Split the hour and minute of `time` into decimal digits.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        let hour = time.hour() as u8;
        let minute = time.minute() as u8;
        Self([hour / 10, hour % 10, minute / 10, minute % 10])
    }

    pub fn as_array(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

/// State shared between the event handlers and the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    digits: TimeDigits,
    connected: bool,
}

impl ClockState {
    /// Start with the digits of `now`, assuming the phone is connected.
    pub fn new<T: Timelike>(now: &T) -> Self {
        Self {
            digits: TimeDigits::from_time(now),
            connected: true,
        }
    }

    pub fn digits(&self) -> TimeDigits {
        self.digits
    }

    pub fn connected(&self) -> bool {
        self.connected
    }

    /// Called once per minute with the current local time.
    pub fn on_minute_tick<T, H>(&mut self, time: &T, host: &mut H)
    where
        T: Timelike,
        H: WatchHost,
    {
        self.digits = TimeDigits::from_time(time);
        crate::logging::trace!("Minute tick {}:{}", time.hour(), time.minute());
        host.request_redraw();
    }

    /// Called whenever the phone connects or disconnects.
    pub fn on_connection_change<H: WatchHost>(&mut self, connected: bool, host: &mut H) {
        self.connected = connected;
        crate::logging::info!("Connection changed: {}", connected);
        host.request_redraw();
        host.short_pulse();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveTime;

    /// Host that counts the requests it receives.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingHost {
        pub redraws: usize,
        pub pulses: usize,
    }

    impl WatchHost for RecordingHost {
        fn request_redraw(&mut self) {
            self.redraws += 1;
        }

        fn short_pulse(&mut self) {
            self.pulses += 1;
        }
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn digits_for_every_minute_of_the_day() {
        for h in 0..24u32 {
            for m in 0..60u32 {
                let digits = TimeDigits::from_time(&time(h, m));
                let expected = [h / 10, h % 10, m / 10, m % 10].map(|d| d as u8);
                assert_eq!(digits.as_array(), &expected);
            }
        }
    }

    #[test]
    fn nine_oh_five() {
        let mut state = ClockState::new(&time(0, 0));
        let mut host = RecordingHost::default();
        state.on_minute_tick(&time(9, 5), &mut host);

        assert_eq!(state.digits().as_array(), &[0, 9, 0, 5]);
        assert_eq!(host.redraws, 1);
        assert_eq!(host.pulses, 0);
    }

    #[test]
    fn minute_tick_is_idempotent() {
        let mut state = ClockState::new(&time(0, 0));
        let mut host = RecordingHost::default();
        state.on_minute_tick(&time(23, 59), &mut host);
        let first = state.clone();
        state.on_minute_tick(&time(23, 59), &mut host);

        assert_eq!(state, first);
        assert_eq!(state.digits().as_array(), &[2, 3, 5, 9]);
    }

    #[test]
    fn seconds_are_ignored() {
        let with_seconds = NaiveTime::from_hms_opt(12, 34, 56).unwrap();
        assert_eq!(TimeDigits::from_time(&with_seconds), TimeDigits::from_time(&time(12, 34)));
    }

    #[test]
    fn disconnect_pulses_and_redraws_once() {
        let mut state = ClockState::new(&time(10, 0));
        assert!(state.connected());

        let mut host = RecordingHost::default();
        state.on_connection_change(false, &mut host);

        assert!(!state.connected());
        assert_eq!(host.redraws, 1);
        assert_eq!(host.pulses, 1);
    }

    #[test]
    fn connection_change_only_touches_the_flag() {
        let mut state = ClockState::new(&time(18, 42));
        let mut host = RecordingHost::default();
        state.on_connection_change(false, &mut host);
        state.on_connection_change(true, &mut host);

        assert_eq!(state, ClockState::new(&time(18, 42)));
        assert_eq!(host.pulses, 2);
    }
}
