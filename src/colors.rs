//! Colors in ARGB8888 format.

pub const BACKGROUND: u32 = 0xFF1E1E1E;
pub const GLYPH: u32 = 0xFFE0E0E0;
