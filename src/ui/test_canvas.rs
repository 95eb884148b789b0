//! In-memory draw target for rendering tests

use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    Pixel,
};

use super::{layout::FACE_SIZE, ColorMode};

/// Face-sized frame buffer. Pixels never drawn stay `None`; pixels outside the
/// face are dropped like a clipped panel would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TestCanvas {
    pixels: Vec<Option<ColorMode>>,
    /// Number of pixels drawn, including overdraw
    pub writes: usize,
}

impl TestCanvas {
    pub fn new() -> Self {
        Self {
            pixels: vec![None; (FACE_SIZE.width * FACE_SIZE.height) as usize],
            writes: 0,
        }
    }

    fn index(&self, point: Point) -> Option<usize> {
        let (w, h) = (FACE_SIZE.width as i32, FACE_SIZE.height as i32);
        if point.x < 0 || point.y < 0 || point.x >= w || point.y >= h {
            return None;
        }
        Some((point.y * w + point.x) as usize)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<ColorMode> {
        self.index(Point::new(x, y)).and_then(|i| self.pixels[i])
    }

    pub fn count(&self, color: ColorMode) -> usize {
        self.pixels.iter().filter(|p| **p == Some(color)).count()
    }

    /// Frame content without the write counter
    pub fn frame(&self) -> &[Option<ColorMode>] {
        &self.pixels
    }
}

impl OriginDimensions for TestCanvas {
    fn size(&self) -> Size {
        FACE_SIZE
    }
}

impl DrawTarget for TestCanvas {
    type Color = ColorMode;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Some(i) = self.index(coord) {
                self.pixels[i] = Some(color);
                self.writes += 1;
            }
        }
        Ok(())
    }
}
