//! Built-in 5x7 bitmap font for the face glyphs.
//!
//! Each glyph is seven rows; the low five bits of each row are the pixels,
//! most significant bit on the left.

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;

type Bitmap = [u8; GLYPH_HEIGHT as usize];

const F: Bitmap = [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000];
const K: Bitmap = [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001];
const L: Bitmap = [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111];
const R: Bitmap = [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001];
const T: Bitmap = [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100];
const D: Bitmap = [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110];
const BLOCK: Bitmap = [0b11111; GLYPH_HEIGHT as usize];
const EMPTY: Bitmap = [0; GLYPH_HEIGHT as usize];

/// Bitmap for `ch`. Unknown printable characters draw as a solid block.
pub fn bitmap(ch: char) -> Bitmap {
    match ch.to_ascii_uppercase() {
        'F' => F,
        'K' => K,
        'L' => L,
        'R' => R,
        'T' => T,
        'D' => D,
        c if c.is_whitespace() => EMPTY,
        _ => BLOCK,
    }
}

/// Whether pixel (`x`, `y`) of the glyph for `ch` is lit.
#[inline]
pub fn is_set(ch: char, x: u32, y: u32) -> bool {
    if x >= GLYPH_WIDTH || y >= GLYPH_HEIGHT {
        return false;
    }
    bitmap(ch)[y as usize] & (1 << (GLYPH_WIDTH - 1 - x)) != 0
}
