//! Character and depth grids for one frame.
//!
//! The character grid is what an external renderer draws; the depth grid is
//! the z-buffer used for hidden surface removal. Smaller depth values are
//! closer to the viewer and [`DEPTH_SENTINEL`] marks a cell nothing has been
//! written to yet.

use std::fmt;

/// Character of a cell nothing has been drawn into.
pub const BLANK: char = ' ';

/// Depth of an empty cell. Any real sample is closer.
pub const DEPTH_SENTINEL: i32 = i32::MAX;

/// A character grid paired with a depth grid of the same dimensions.
///
/// Both grids are stored row-major and indexed as `(row, col)`. A cell is
/// blank exactly when its depth is [`DEPTH_SENTINEL`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBufferPair {
    chars: Vec<char>,
    depth: Vec<i32>,
    cols: usize,
    rows: usize,
}

impl FrameBufferPair {
    /// Creates a cleared buffer pair of `cols` × `rows` cells.
    pub fn new(cols: usize, rows: usize) -> Self {
        let size = cols * rows;
        Self {
            chars: vec![BLANK; size],
            depth: vec![DEPTH_SENTINEL; size],
            cols,
            rows,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Resets every cell to (blank, sentinel).
    pub fn clear(&mut self) {
        self.chars.fill(BLANK);
        self.depth.fill(DEPTH_SENTINEL);
    }

    /// Whether signed grid coordinates fall inside the buffer.
    #[inline]
    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} frame",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Writes a character and its depth.
    ///
    /// No depth test happens here; callers decide whether the write wins.
    ///
    /// # Panics
    /// Panics if (`row`, `col`) is outside the buffer.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, ch: char, depth: i32) {
        let idx = self.index(row, col);
        self.chars[idx] = ch;
        self.depth[idx] = depth;
    }

    /// Stored depth at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if (`row`, `col`) is outside the buffer.
    #[inline]
    pub fn depth(&self, row: usize, col: usize) -> i32 {
        self.depth[self.index(row, col)]
    }

    /// Character at (`row`, `col`), or `None` when out of bounds.
    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        if row < self.rows && col < self.cols {
            Some(self.chars[row * self.cols + col])
        } else {
            None
        }
    }

    /// The whole character grid, row-major.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// One row of the character grid.
    pub fn row(&self, row: usize) -> &[char] {
        let start = row * self.cols;
        &self.chars[start..start + self.cols]
    }

    /// Iterates the character grid row by row.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[char]> {
        // chunks_exact panics on a zero chunk size.
        self.chars.chunks_exact(self.cols.max(1))
    }

    /// Number of non-blank cells.
    pub fn filled(&self) -> usize {
        self.chars.iter().filter(|&&c| c != BLANK).count()
    }
}

/// Renders the character grid as newline-separated rows.
impl fmt::Display for FrameBufferPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
