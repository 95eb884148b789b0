//! Negative watchface
//!
//! A light grid of small squares with the time, the disconnection marker and
//! the battery bar punched into it as large dark squares.

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::Size,
    primitives::{Primitive, PrimitiveStyle, Rectangle},
    Drawable,
};

use super::{
    glyphs::Glyph,
    layout::{
        cell_rect, digit_column, Inset, BATTERY_CELL, DIGIT_ROW, DISCONNECTED_CELL, GRID_COLUMNS,
        GRID_ROWS,
    },
    palette::Palette,
    ColorMode, WatchFace, WatchFaceState,
};
use crate::{battery::BatteryInfo, clock::TimeDigits};

/// Height in pixels of the filled part of the battery bar.
///
/// Rounds down; anything above 100 % shows a full bar.
pub fn battery_fill_height(percent: u8) -> u32 {
    let side = Inset::ACTIVE.side();
    (side * percent as u32 / 100).min(side)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFaceRenderer {
    palette: Palette,
}

impl ClockFaceRenderer {
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Fill the grid with background squares.
    pub fn draw_background<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        let style = PrimitiveStyle::with_fill(self.palette.cell);
        for column in 0..GRID_COLUMNS {
            for row in 0..GRID_ROWS {
                cell_rect(column, row, Inset::ACTIVE)
                    .into_styled(style)
                    .draw(target)?;
            }
        }
        Ok(())
    }

    /// Draw the digits, the disconnection marker and the battery bar.
    pub fn draw_foreground<D>(
        &self,
        target: &mut D,
        digits: &TimeDigits,
        connected: bool,
        battery: BatteryInfo,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        let ink = PrimitiveStyle::with_fill(self.palette.ink);

        for (index, digit) in digits.iter().enumerate() {
            let Some(glyph) = Glyph::for_digit(digit) else {
                continue;
            };
            let left = digit_column(index as u8);
            for (row, column) in glyph.lit_cells() {
                cell_rect(left + column, DIGIT_ROW + row, Inset::INACTIVE)
                    .into_styled(ink)
                    .draw(target)?;
            }
        }

        if !connected {
            let (column, row) = DISCONNECTED_CELL;
            cell_rect(column, row, Inset::INACTIVE)
                .into_styled(ink)
                .draw(target)?;
        }

        self.draw_battery(target, battery)
    }

    /// Battery bar: a coloured square emptied from the top.
    fn draw_battery<D>(&self, target: &mut D, battery: BatteryInfo) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        let (column, row) = BATTERY_CELL;
        let frame = cell_rect(column, row, Inset::ACTIVE);
        let color = self.palette.battery(battery.charging, battery.percent);
        frame
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(target)?;

        let gap = frame.size.height - battery_fill_height(battery.percent);
        if gap > 0 {
            Rectangle::new(frame.top_left, Size::new(frame.size.width, gap))
                .into_styled(PrimitiveStyle::with_fill(self.palette.ink))
                .draw(target)?;
        }
        Ok(())
    }
}

impl WatchFace for ClockFaceRenderer {
    fn draw<D>(&self, target: &mut D, state: &WatchFaceState) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = ColorMode>,
    {
        target.clear(self.palette.window)?;
        self.draw_background(target)?;
        self.draw_foreground(target, &state.digits, state.connected, state.battery)
    }
}
