//! Grid geometry of the watchface

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

/// Edge length of one grid cell in pixels.
pub const CELL_SIZE: i32 = 8;
pub const GRID_COLUMNS: u8 = 18;
pub const GRID_ROWS: u8 = 21;

/// Size of the whole face in pixels.
pub const FACE_SIZE: Size = Size::new(
    GRID_COLUMNS as u32 * CELL_SIZE as u32,
    GRID_ROWS as u32 * CELL_SIZE as u32,
);

/// Grid row of the top of the digits.
pub const DIGIT_ROW: u8 = 15;
/// Grid cell of the disconnection marker.
pub const DISCONNECTED_CELL: (u8, u8) = (1, 1);
/// Grid cell of the battery bar.
pub const BATTERY_CELL: (u8, u8) = (16, 1);

/// Padding applied to each side of a cell when it is painted.
///
/// Positive insets leave a border around the square, negative ones make it
/// spill into the neighbouring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inset(pub i8);

impl Inset {
    /// Background cells and the battery frame
    pub const ACTIVE: Inset = Inset(1);
    /// Digit and indicator cells
    pub const INACTIVE: Inset = Inset(-2);

    /// Edge length of a square painted with this inset.
    pub const fn side(self) -> u32 {
        (CELL_SIZE - 2 * self.0 as i32) as u32
    }
}

/// Rectangle covered by the cell at `(column, row)` painted with `inset`.
pub fn cell_rect(column: u8, row: u8, inset: Inset) -> Rectangle {
    let offset = inset.0 as i32;
    Rectangle::new(
        Point::new(
            column as i32 * CELL_SIZE + offset,
            row as i32 * CELL_SIZE + offset,
        ),
        Size::new(inset.side(), inset.side()),
    )
}

/// Leftmost grid column of the digit at `index` (0–3).
///
/// Digits are four columns apart with one extra column between the hours and
/// the minutes.
pub fn digit_column(index: u8) -> u8 {
    index * 4 + 1 + index / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_is_pebble_sized() {
        assert_eq!(FACE_SIZE, Size::new(144, 168));
    }

    #[test]
    fn inset_sides() {
        assert_eq!(Inset::ACTIVE.side(), 6);
        assert_eq!(Inset::INACTIVE.side(), 12);
    }

    #[test]
    fn active_cell_stays_inside() {
        let rect = cell_rect(2, 3, Inset::ACTIVE);
        assert_eq!(rect.top_left, Point::new(17, 25));
        assert_eq!(rect.size, Size::new(6, 6));
    }

    #[test]
    fn inactive_cell_spills_over() {
        let rect = cell_rect(1, 1, Inset::INACTIVE);
        assert_eq!(rect.top_left, Point::new(6, 6));
        assert_eq!(rect.size, Size::new(12, 12));
    }

    #[test]
    fn digits_leave_a_gap_after_the_hours() {
        assert_eq!(digit_column(0), 1);
        assert_eq!(digit_column(1), 5);
        assert_eq!(digit_column(2), 10);
        assert_eq!(digit_column(3), 14);
        // Rightmost glyph column stays on the grid
        assert!(digit_column(3) + 2 < GRID_COLUMNS);
    }
}
