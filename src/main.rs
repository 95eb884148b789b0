#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pull},
    interrupt::{self, InterruptExt, Priority},
    peripherals::SPI2,
    saadc::{self, ChannelConfig, Resolution, Saadc},
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, channel::Channel, signal::Signal};
use embassy_time::Timer;
use nrf_softdevice::Softdevice;
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use negative_watchface::{WatchEvent, WatchHost, Watchface, WatchfaceConfig};
use peripherals::{backlight::Backlight, battery::Battery, display::Display, vibrator::Vibrator};
use system::{bluetooth::Server, time::WallClock};

// Communication channels
pub(crate) static EVENTS: Channel<ThreadModeRawMutex, WatchEvent, 4> = Channel::new();
static NOTIFY: Signal<ThreadModeRawMutex, u8> = Signal::new();

static SERVER: StaticCell<Server> = StaticCell::new();

/// Host side of the watchface: remembers redraw requests until the current
/// event is handled and forwards haptic pulses to the vibration task.
#[derive(Default)]
struct FirmwareHost {
    redraw: bool,
}

impl FirmwareHost {
    fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.redraw)
    }
}

impl WatchHost for FirmwareHost {
    fn request_redraw(&mut self) {
        self.redraw = true;
    }

    fn short_pulse(&mut self) {
        NOTIFY.signal(1);
    }
}

#[embassy_executor::task]
async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}

#[embassy_executor::task]
async fn ble_task(sd: &'static Softdevice, server: &'static Server) -> ! {
    system::bluetooth::run(sd, server).await
}

/// Vibrate whenever the watchface asks for it
#[embassy_executor::task(pool_size = 1)]
async fn notify(mut vibrator: Vibrator, pulse_ms: u32) {
    loop {
        let count = NOTIFY.wait().await;
        vibrator.pulse(pulse_ms, count).await;
    }
}

/// Deliver a tick at the start of every minute.
#[embassy_executor::task(pool_size = 1)]
async fn minute_ticker(clock: WallClock) {
    loop {
        Timer::after(clock.until_next_minute()).await;
        let now = clock.now();
        EVENTS.send(WatchEvent::MinuteTick(now.time())).await;
    }
}

/// Single owner of the watchface, the display and the battery gauge.
///
/// Events are handled one at a time; a frame is drawn after each event that
/// asked for one, with a fresh battery reading.
#[embassy_executor::task(pool_size = 1)]
async fn event_loop(
    mut watchface: Watchface,
    mut display: Display<SPI2>,
    mut battery: Battery,
    backlight: Backlight<'static>,
    server: &'static Server,
) {
    defmt::debug!("Backlight at level {}", backlight.get_brightness());

    let mut host = FirmwareHost::default();
    if let Err(e) = watchface.activate(&mut host) {
        defmt::error!("Watchface activation failed: {}", e);
        return;
    }

    loop {
        if host.take_redraw() {
            let info = battery.info().await;
            defmt::debug!("Redraw, battery {}% ({})", info.percent, info.charging);
            if let Err(e) = display.draw_watchface(&watchface, info) {
                defmt::warn!("Redraw failed: {}", e);
            }
            if let Err(e) = server.bas.battery_level_set(&info.percent) {
                defmt::warn!("Battery level update failed: {:?}", e);
            }
        }

        let event = EVENTS.receive().await;
        if let Err(e) = watchface.handle(event, &mut host) {
            defmt::warn!("Dropped event: {}", e);
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let config: WatchfaceConfig = system::config::watchface_config();
    let mut p = embassy_nrf::init(system::config::nrf_config());
    defmt::info!("Initializing");

    // Priorities 0, 1 and 4 belong to the SoftDevice
    interrupt::SAADC.set_priority(Priority::P3);
    interrupt::SPIM2_SPIS2_SPI2.set_priority(Priority::P3);

    // Initialize SAADC
    let mut saadc_config = saadc::Config::default();
    // Set resolution to 12bit, necessary for correct battery status calculation
    saadc_config.resolution = Resolution::_12BIT;
    // Pin P0.31: Voltage level
    let channel_config = ChannelConfig::single_ended(&mut p.P0_31);
    let saadc = Saadc::new(p.SAADC, Irqs, saadc_config, [channel_config]);
    saadc.calibrate().await;

    // Initialize Battery
    let battery = Battery::init(saadc, Input::new(p.P0_12, Pull::None));

    // Initialize Backlight
    let backlight = unwrap!(Backlight::init(
        Output::new(p.P0_14, Level::High, OutputDrive::Standard),
        Output::new(p.P0_22, Level::High, OutputDrive::Standard),
        Output::new(p.P0_23, Level::High, OutputDrive::Standard),
        config.brightness,
    ));

    // Initialize vibration motor
    let vibrator = Vibrator::init(Output::new(p.P0_16, Level::High, OutputDrive::Standard));

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25, Level::High, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
    ));

    // Initialize Bluetooth
    let sd = Softdevice::enable(&system::bluetooth::softdevice_config());
    let server: &'static Server = SERVER.init(unwrap!(Server::new(sd)));

    // Initialize watchface
    let clock = WallClock::new(config.utc_offset_secs);
    let watchface = Watchface::new(config, &clock.now());

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(softdevice_task(sd)));
    unwrap!(spawner.spawn(ble_task(sd, server)));
    unwrap!(spawner.spawn(notify(vibrator, config.pulse_ms)));
    unwrap!(spawner.spawn(minute_ticker(clock)));
    unwrap!(spawner.spawn(event_loop(
        watchface, display, battery, backlight, server
    )));
}
