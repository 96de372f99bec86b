//! Pixel output for a character frame.
//!
//! Provides the [`Renderer`] struct which owns an ARGB8888 color buffer and
//! draws a [`FrameBufferPair`]'s character grid into it glyph by glyph, each
//! character at `(col * cell_size, row * cell_size)`.

use std::path::Path;

use super::framebuffer::{FrameBufferPair, BLANK};
use super::glyph::{self, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::colors;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = self.index(x as u32, y as u32);
            self.color_buffer[index] = color;
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[self.index(x as u32, y as u32)])
        } else {
            None
        }
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Draws one character into the cell whose top-left pixel is (`x`, `y`).
    ///
    /// The 5x7 glyph is scaled by whole pixels to fit the cell and centred in it.
    pub fn draw_glyph(&mut self, x: i32, y: i32, cell_size: u32, ch: char, color: u32) {
        let scale = (cell_size / (GLYPH_HEIGHT + 1)).max(1);
        let offset_x = (cell_size.saturating_sub(GLYPH_WIDTH * scale) / 2) as i32;
        let offset_y = (cell_size.saturating_sub(GLYPH_HEIGHT * scale) / 2) as i32;

        for gy in 0..GLYPH_HEIGHT {
            for gx in 0..GLYPH_WIDTH {
                if glyph::is_set(ch, gx, gy) {
                    self.draw_rect(
                        x + offset_x + (gx * scale) as i32,
                        y + offset_y + (gy * scale) as i32,
                        scale as i32,
                        scale as i32,
                        color,
                    );
                }
            }
        }
    }

    /// Clears the color buffer and draws every non-blank cell of `frame`.
    pub fn draw_frame(&mut self, frame: &FrameBufferPair, cell_size: u32) {
        self.clear(colors::BACKGROUND);
        for (row, chars) in frame.rows_iter().enumerate() {
            for (col, &ch) in chars.iter().enumerate() {
                if ch == BLANK {
                    continue;
                }
                let x = (col as u32 * cell_size) as i32;
                let y = (row as u32 * cell_size) as i32;
                self.draw_glyph(x, y, cell_size, ch, colors::GLYPH);
            }
        }
    }

    /// The color buffer as raw bytes, ready for an ARGB8888 texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8; the
        // byte slice covers exactly the same allocation and borrows self.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Copies the color buffer into an RGBA image.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let argb = self.color_buffer[self.index(x, y)];
            let [a, r, g, b] = argb.to_be_bytes();
            image::Rgba([r, g, b, a])
        })
    }

    /// Saves the color buffer to `path`; the format follows the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.to_image().save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_frame_paints_only_non_blank_cells() {
        let mut frame = FrameBufferPair::new(4, 4);
        frame.set(1, 2, 'T', -3);

        let mut renderer = Renderer::new(40, 40);
        renderer.draw_frame(&frame, 10);

        // 'T' top bar: glyph offset (2, 1) inside cell (col 2, row 1).
        assert_eq!(renderer.get_pixel(22, 11), Some(colors::GLYPH));
        assert_eq!(renderer.get_pixel(26, 11), Some(colors::GLYPH));
        // Stem only in the middle column.
        assert_eq!(renderer.get_pixel(24, 15), Some(colors::GLYPH));
        assert_eq!(renderer.get_pixel(22, 15), Some(colors::BACKGROUND));
        // Blank cell stays background.
        assert!((0..10).all(|y| (0..10).all(|x| renderer.get_pixel(x, y) == Some(colors::BACKGROUND))));
    }

    #[test]
    fn glyph_scales_with_cell_size() {
        let mut renderer = Renderer::new(32, 32);
        renderer.draw_glyph(0, 0, 32, 'L', colors::GLYPH);
        // scale 4: glyph 20x28 centred with offset (6, 2).
        assert_eq!(renderer.get_pixel(6, 2), Some(colors::GLYPH));
        assert_eq!(renderer.get_pixel(9, 5), Some(colors::GLYPH));
        assert_eq!(renderer.get_pixel(10, 2), Some(colors::BACKGROUND));
        assert_eq!(renderer.get_pixel(25, 29), Some(colors::GLYPH));
    }

    #[test]
    fn as_bytes_covers_whole_buffer() {
        let renderer = Renderer::new(8, 6);
        assert_eq!(renderer.as_bytes().len(), 8 * 6 * 4);
    }

    #[test]
    fn wide_buffer_indexes_row_major() {
        let mut renderer = Renderer::new(70_000, 2);
        assert_eq!(renderer.as_bytes().len(), 70_000 * 2 * 4);
        renderer.set_pixel(69_999, 1, colors::GLYPH);
        assert_eq!(renderer.get_pixel(69_999, 1), Some(colors::GLYPH));
        assert_eq!(renderer.get_pixel(69_999, 0), Some(colors::BACKGROUND));
        assert_eq!(renderer.get_pixel(70_000, 1), None);
    }

    #[test]
    fn to_image_converts_argb_to_rgba() {
        let mut renderer = Renderer::new(2, 1);
        renderer.set_pixel(1, 0, 0x80FF4020);
        let img = renderer.to_image();
        assert_eq!(img.get_pixel(1, 0).0, [0xFF, 0x40, 0x20, 0x80]);
        assert_eq!(img.dimensions(), (2, 1));
    }
}
