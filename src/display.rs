use crate::font::{self, GLYPH_ROWS, MINUS, PLUS};

pub const ROWS: usize = 8;

/// Complete contents of the 8x8 matrix, one byte per row, bit 7 leftmost.
///
/// A frame is always built from scratch and handed to the display whole.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFrame {
    rows: [u8; ROWS],
}

impl DisplayFrame {
    pub const fn blank() -> Self {
        Self { rows: [0; ROWS] }
    }

    pub const fn rows(&self) -> &[u8; ROWS] {
        &self.rows
    }

    /// Mask of row `row`; rows past the bottom read as dark.
    pub fn row(&self, row: usize) -> u8 {
        self.rows.get(row).copied().unwrap_or(0)
    }

    /// ORs `mask` into row `row`. Rows past the bottom are ignored.
    pub fn light(&mut self, row: usize, mask: u8) {
        if let Some(slot) = self.rows.get_mut(row) {
            *slot |= mask;
        }
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| *row == 0)
    }
}

/// Two decimal digits side by side: tens in the high nibble, units in the low.
///
/// Values of 100 and above keep their last two digits.
pub fn render_digits(value: u8) -> DisplayFrame {
    let value = value % 100;
    side_by_side(font::digit(value / 10), font::digit(value % 10))
}

/// A sign glyph followed by one digit, for the summer-time offset.
pub fn render_signed(offset: i8) -> DisplayFrame {
    let sign = if offset < 0 { MINUS } else { PLUS };
    let magnitude = offset.unsigned_abs();
    side_by_side(&font::FONT[sign], font::digit(magnitude))
}

fn side_by_side(left: &font::Glyph, right: &font::Glyph) -> DisplayFrame {
    let mut frame = DisplayFrame::blank();
    for r in 0..GLYPH_ROWS {
        frame.light(r, (left[r] << 4) | (right[r] & 0x0F));
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FONT;

    #[test]
    fn nibbles_carry_tens_and_units_glyphs() {
        for value in 0..100u8 {
            let frame = render_digits(value);
            let tens = &FONT[(value / 10) as usize];
            let units = &FONT[(value % 10) as usize];
            for r in 0..ROWS {
                assert_eq!(frame.row(r) >> 4, tens[r], "value {value} row {r}");
                assert_eq!(frame.row(r) & 0x0F, units[r], "value {value} row {r}");
            }
        }
    }

    #[test]
    fn single_digit_values_show_a_leading_zero() {
        let frame = render_digits(7);
        assert_eq!(frame.row(1) >> 4, FONT[0][1]);
    }

    #[test]
    fn large_values_keep_last_two_digits() {
        assert_eq!(render_digits(142), render_digits(42));
    }

    #[test]
    fn signed_offsets_use_sign_glyph_in_place_of_tens() {
        let plus = render_signed(1);
        let minus = render_signed(-1);
        for r in 0..ROWS {
            assert_eq!(plus.row(r) >> 4, FONT[PLUS][r]);
            assert_eq!(minus.row(r) >> 4, FONT[MINUS][r]);
            assert_eq!(plus.row(r) & 0x0F, FONT[1][r]);
            assert_eq!(minus.row(r) & 0x0F, FONT[1][r]);
        }
        assert_ne!(plus, minus);
    }

    #[test]
    fn light_ors_and_ignores_rows_off_the_matrix() {
        let mut frame = DisplayFrame::blank();
        frame.light(2, 0b1000_0000);
        frame.light(2, 0b0000_0001);
        frame.light(8, 0xFF);
        assert_eq!(frame.row(2), 0b1000_0001);
        assert_eq!(frame.row(8), 0);
        assert!(!frame.is_blank());
    }
}
