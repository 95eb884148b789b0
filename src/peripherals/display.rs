//! Display control module for PineTime

use embassy_nrf::{
    gpio::Output,
    peripherals::{P0_18, P0_25, P0_26},
    spim::{self, Spim},
};

use display_interface_spi::SPIInterface;
use embassy_time::Delay;
use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};
use mipidsi::{models::ST7789, Builder, Orientation};

use negative_watchface::{ui::layout::FACE_SIZE, BatteryInfo, Watchface};

const LCD_W: u16 = 240;
const LCD_H: u16 = 240;

/// Top left corner of the watchface on the panel, centred.
const FACE_OFFSET: Point = Point::new(
    (LCD_W as i32 - FACE_SIZE.width as i32) / 2,
    (LCD_H as i32 - FACE_SIZE.height as i32) / 2,
);

type Lcd<'a, SPI> = mipidsi::Display<
    SPIInterface<Spim<'a, SPI>, Output<'a, P0_18>, Output<'a, P0_25>>,
    ST7789,
    Output<'a, P0_26>,
>;

pub struct Display<SPI>
where
    SPI: spim::Instance,
{
    /// Display instance
    lcd: Lcd<'static, SPI>,
}

impl<SPI> Display<SPI>
where
    SPI: spim::Instance,
{
    /// Configure display settings on boot and blank the panel
    pub fn init(
        spim: Spim<'static, SPI>,
        cs_pin: Output<'static, P0_25>,
        dc_pin: Output<'static, P0_18>,
        rst_pin: Output<'static, P0_26>,
    ) -> Result<Self, Error> {
        let lcd = Builder::st7789(SPIInterface::new(spim, dc_pin, cs_pin))
            .with_display_size(LCD_W, LCD_H)
            .with_orientation(Orientation::Portrait(false))
            .init(&mut Delay, Some(rst_pin))
            .map_err(|_| Error::Init)?;

        let mut display = Self { lcd };
        display.clear(Rgb565::BLACK)?;
        Ok(display)
    }

    /// Clear the whole panel
    pub fn clear(&mut self, color: Rgb565) -> Result<(), Error> {
        self.lcd.clear(color).map_err(|_| Error::Draw)
    }

    /// Draw a full watchface frame in the centre of the panel
    pub fn draw_watchface(&mut self, face: &Watchface, battery: BatteryInfo) -> Result<(), Error> {
        let area = Rectangle::new(Point::zero(), FACE_SIZE);
        let mut translated = self.lcd.translated(FACE_OFFSET);
        let mut target = translated.clipped(&area);
        face.draw(&mut target, battery).map_err(|_| Error::Draw)
    }
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    /// Controller did not come up
    Init,
    /// SPI transfer failed
    Draw,
}
