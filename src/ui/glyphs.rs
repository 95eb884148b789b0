//! 3×5 digit font
//!
//! Each glyph is packed into the low 15 bits of a `u16`, top row first, left
//! column first within a row.

pub const GLYPH_COLUMNS: u8 = 3;
pub const GLYPH_ROWS: u8 = 5;

#[rustfmt::skip]
const DIGITS: [u16; 10] = [
    0b111_101_101_101_111, // 0
    0b110_010_010_010_111, // 1
    0b111_001_111_100_111, // 2
    0b111_001_111_001_111, // 3
    0b101_101_111_001_001, // 4
    0b111_100_111_001_111, // 5
    0b111_100_111_101_111, // 6
    0b111_001_001_001_001, // 7
    0b111_101_111_101_111, // 8
    0b111_101_111_001_111, // 9
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph(u16);

impl Glyph {
    /// Glyph for a decimal digit, `None` above 9.
    pub fn for_digit(digit: u8) -> Option<Self> {
        DIGITS.get(digit as usize).copied().map(Self)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    pub fn is_lit(&self, row: u8, column: u8) -> bool {
        if row >= GLYPH_ROWS || column >= GLYPH_COLUMNS {
            return false;
        }
        let shift = (GLYPH_ROWS - 1 - row) * GLYPH_COLUMNS + (GLYPH_COLUMNS - 1 - column);
        (self.0 >> shift) & 1 == 1
    }

    /// Lit cells as `(row, column)` pairs, row-major.
    pub fn lit_cells(self) -> impl Iterator<Item = (u8, u8)> {
        (0..GLYPH_ROWS)
            .flat_map(|row| (0..GLYPH_COLUMNS).map(move |column| (row, column)))
            .filter(move |&(row, column)| self.is_lit(row, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(glyph: Glyph) -> [[bool; 3]; 5] {
        let mut out = [[false; 3]; 5];
        for (row, column) in glyph.lit_cells() {
            out[row as usize][column as usize] = true;
        }
        out
    }

    #[test]
    fn only_ten_digits() {
        assert!(Glyph::for_digit(9).is_some());
        assert!(Glyph::for_digit(10).is_none());
    }

    #[test]
    fn zero_is_a_ring() {
        let x = true;
        let o = false;
        assert_eq!(
            render(Glyph::for_digit(0).unwrap()),
            [[x, x, x], [x, o, x], [x, o, x], [x, o, x], [x, x, x]]
        );
    }

    #[test]
    fn four_has_open_top() {
        let x = true;
        let o = false;
        assert_eq!(
            render(Glyph::for_digit(4).unwrap()),
            [[x, o, x], [x, o, x], [x, x, x], [o, o, x], [o, o, x]]
        );
    }

    #[test]
    fn one_leans_left() {
        let glyph = Glyph::for_digit(1).unwrap();
        assert!(glyph.is_lit(0, 0));
        assert!(glyph.is_lit(0, 1));
        assert!(!glyph.is_lit(0, 2));
        assert!(!glyph.is_lit(2, 0));
        assert!(glyph.is_lit(4, 2));
    }

    #[test]
    fn lit_cells_match_bit_count() {
        for digit in 0..10 {
            let glyph = Glyph::for_digit(digit).unwrap();
            assert_eq!(glyph.lit_cells().count() as u32, glyph.bits().count_ones());
        }
    }

    #[test]
    fn out_of_grid_is_dark() {
        let eight = Glyph::for_digit(8).unwrap();
        assert!(!eight.is_lit(5, 0));
        assert!(!eight.is_lit(0, 3));
    }
}
