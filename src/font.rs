//! 3x7 glyphs packed into nibbles, one byte per row.
//!
//! Bit 2 is the leftmost lit column, bit 3 stays dark so two glyphs placed
//! side by side in one 8-pixel row keep a one-column gap.

pub const GLYPH_ROWS: usize = 8;

pub type Glyph = [u8; GLYPH_ROWS];

pub const PLUS: usize = 10;
pub const MINUS: usize = 11;

pub const FONT: [Glyph; 12] = [
    // 0
    [0b000, 0b111, 0b101, 0b101, 0b101, 0b101, 0b101, 0b111],
    // 1
    [0b000, 0b010, 0b110, 0b010, 0b010, 0b010, 0b010, 0b111],
    // 2
    [0b000, 0b111, 0b001, 0b001, 0b111, 0b100, 0b100, 0b111],
    // 3
    [0b000, 0b111, 0b001, 0b001, 0b111, 0b001, 0b001, 0b111],
    // 4
    [0b000, 0b101, 0b101, 0b101, 0b111, 0b001, 0b001, 0b001],
    // 5
    [0b000, 0b111, 0b100, 0b100, 0b111, 0b001, 0b001, 0b111],
    // 6
    [0b000, 0b111, 0b100, 0b100, 0b111, 0b101, 0b101, 0b111],
    // 7
    [0b000, 0b111, 0b001, 0b001, 0b001, 0b010, 0b010, 0b010],
    // 8
    [0b000, 0b111, 0b101, 0b101, 0b111, 0b101, 0b101, 0b111],
    // 9
    [0b000, 0b111, 0b101, 0b101, 0b111, 0b001, 0b001, 0b111],
    // +
    [0b000, 0b000, 0b000, 0b010, 0b111, 0b010, 0b000, 0b000],
    // -
    [0b000, 0b000, 0b000, 0b000, 0b111, 0b000, 0b000, 0b000],
];

/// Glyph for a decimal digit; anything above 9 uses its last digit.
pub const fn digit(value: u8) -> &'static Glyph {
    &FONT[(value % 10) as usize]
}
