//! Depth-resolving point rasterizer.
//!
//! Every sample of every face is rotated, translated onto the grid and
//! depth-tested against the [`FrameBufferPair`]. Only the minimum depth per
//! cell survives, so the final grid does not depend on the order faces are
//! drawn in. On an exact depth tie the first writer keeps the cell.

use super::framebuffer::FrameBufferPair;
use crate::cube::Cube;
use crate::surface::{Surface, FACES};

/// Default distance between surface samples, in cells.
///
/// Half a cell is the largest step that still hits every cell a rotated face
/// covers.
pub const DEFAULT_SAMPLE_STEP: f32 = 0.5;

/// Per-frame counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RasterStats {
    /// Samples that won the depth test.
    pub written: usize,
    /// Samples that lost the depth test.
    pub occluded: usize,
    /// Samples that landed outside the grid.
    pub clipped: usize,
}

impl RasterStats {
    pub fn samples(&self) -> usize {
        self.written + self.occluded + self.clipped
    }
}

impl std::ops::AddAssign for RasterStats {
    fn add_assign(&mut self, rhs: Self) {
        self.written += rhs.written;
        self.occluded += rhs.occluded;
        self.clipped += rhs.clipped;
    }
}

/// Rasterizes cube faces into a frame buffer pair with a per-cell depth test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthRasterizer {
    sample_step: f32,
}

impl Default for DepthRasterizer {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_STEP)
    }
}

impl DepthRasterizer {
    pub fn new(sample_step: f32) -> Self {
        Self { sample_step }
    }

    pub fn sample_step(&self) -> f32 {
        self.sample_step
    }

    /// Draws all six faces of `cube` into `buffer`.
    ///
    /// The buffer is not cleared first, so several cubes can share a frame.
    pub fn rasterize(&self, cube: &Cube, buffer: &mut FrameBufferPair) -> RasterStats {
        let mut stats = RasterStats::default();
        for face in &FACES {
            stats += self.rasterize_surface(cube, face.surface, buffer);
        }
        stats
    }

    /// Draws a single face of `cube` into `buffer`.
    pub fn rasterize_surface(
        &self,
        cube: &Cube,
        surface: Surface,
        buffer: &mut FrameBufferPair,
    ) -> RasterStats {
        let glyph = surface.glyph();
        let mut stats = RasterStats::default();

        for p in cube.project_surface(surface, self.sample_step) {
            if !buffer.contains(p.col, p.row) {
                stats.clipped += 1;
                continue;
            }
            let (row, col) = (p.row as usize, p.col as usize);
            // Smaller depth is closer; ties keep the existing cell.
            if p.depth < buffer.depth(row, col) {
                buffer.set(row, col, glyph, p.depth);
                stats.written += 1;
            } else {
                stats.occluded += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::framebuffer::{BLANK, DEPTH_SENTINEL};
    use crate::rotation::RotationState;
    use std::collections::HashMap;

    fn render(cube: &Cube, cols: usize, rows: usize) -> FrameBufferPair {
        let mut fb = FrameBufferPair::new(cols, rows);
        DepthRasterizer::default().rasterize(cube, &mut fb);
        fb
    }

    fn cells_with(fb: &FrameBufferPair, glyph: char) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..fb.rows() {
            for col in 0..fb.cols() {
                if fb.char_at(row, col) == Some(glyph) {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    #[test]
    fn front_face_covers_centred_square() {
        // 800x800 screen, 10px cells, cube width 20, no rotation.
        let cube = Cube::new(40, 40, 20.0);
        let fb = render(&cube, 80, 80);

        let front = cells_with(&fb, 'F');
        assert_eq!(front.len(), 21 * 21);
        let rows: Vec<usize> = front.iter().map(|&(r, _)| r).collect();
        let cols: Vec<usize> = front.iter().map(|&(_, c)| c).collect();
        assert_eq!(rows.iter().min(), Some(&30));
        assert_eq!(rows.iter().max(), Some(&50));
        assert_eq!(cols.iter().min(), Some(&30));
        assert_eq!(cols.iter().max(), Some(&50));
        for (r, c) in front {
            assert_eq!(fb.depth(r, c), -11);
        }
    }

    #[test]
    fn unrotated_cube_hides_back_right_and_top() {
        let cube = Cube::new(40, 40, 20.0);
        let fb = render(&cube, 80, 80);

        assert!(cells_with(&fb, 'K').is_empty());
        assert!(cells_with(&fb, 'R').is_empty());
        assert!(cells_with(&fb, 'T').is_empty());

        // Left and bottom sit one cell outside the front square, so their
        // edges show as a single column and row next to it.
        let left = cells_with(&fb, 'L');
        assert_eq!(left.len(), 21);
        assert!(left.iter().all(|&(r, c)| c == 29 && (30..=50).contains(&r)));
        let bottom = cells_with(&fb, 'D');
        assert_eq!(bottom.len(), 21);
        assert!(bottom.iter().all(|&(r, c)| r == 29 && (30..=50).contains(&c)));

        assert_eq!(fb.filled(), 21 * 21 + 21 + 21);
    }

    #[test]
    fn stored_depth_is_minimum_of_all_samples() {
        let cube = Cube::new(30, 30, 24.0).with_rotation(RotationState::from_angles(0.7, 1.3, 0.4));
        let fb = render(&cube, 60, 60);

        let mut minimum: HashMap<(usize, usize), (i32, char)> = HashMap::new();
        for face in &FACES {
            for p in cube.project_surface(face.surface, DEFAULT_SAMPLE_STEP) {
                if !fb.contains(p.col, p.row) {
                    continue;
                }
                let key = (p.row as usize, p.col as usize);
                let entry = minimum.entry(key).or_insert((p.depth, face.glyph));
                // Strict comparison mirrors first-writer-wins.
                if p.depth < entry.0 {
                    *entry = (p.depth, face.glyph);
                }
            }
        }

        assert!(!minimum.is_empty());
        for row in 0..fb.rows() {
            for col in 0..fb.cols() {
                match minimum.get(&(row, col)) {
                    Some(&(depth, glyph)) => {
                        assert_eq!(fb.depth(row, col), depth);
                        assert_eq!(fb.char_at(row, col), Some(glyph));
                    }
                    None => {
                        assert_eq!(fb.depth(row, col), DEPTH_SENTINEL);
                        assert_eq!(fb.char_at(row, col), Some(BLANK));
                    }
                }
            }
        }
    }

    #[test]
    fn depths_do_not_depend_on_face_order() {
        let cube = Cube::new(25, 25, 18.0).with_rotation(RotationState::from_angles(2.1, 0.3, 5.0));
        let rasterizer = DepthRasterizer::default();

        let mut forward = FrameBufferPair::new(50, 50);
        let mut reverse = FrameBufferPair::new(50, 50);
        for surface in Surface::ALL {
            rasterizer.rasterize_surface(&cube, surface, &mut forward);
        }
        for surface in Surface::ALL.iter().rev() {
            rasterizer.rasterize_surface(&cube, *surface, &mut reverse);
        }

        for row in 0..50 {
            for col in 0..50 {
                assert_eq!(forward.depth(row, col), reverse.depth(row, col));
            }
        }
    }

    #[test]
    fn equal_depth_keeps_first_writer() {
        let mut fb = FrameBufferPair::new(80, 80);
        fb.set(40, 40, '#', -11);
        let cube = Cube::new(40, 40, 20.0);
        DepthRasterizer::default().rasterize_surface(&cube, Surface::Front, &mut fb);
        assert_eq!(fb.char_at(40, 40), Some('#'));
        assert_eq!(fb.char_at(40, 41), Some('F'));
    }

    #[test]
    fn off_grid_samples_are_dropped() {
        // Anchored at the corner, most of every face lands off-grid.
        let cube = Cube::new(0, 0, 20.0).with_rotation(RotationState::from_angles(0.5, 0.5, 0.5));
        let mut fb = FrameBufferPair::new(16, 12);
        let stats = DepthRasterizer::default().rasterize(&cube, &mut fb);

        assert!(stats.clipped > 0);
        assert!(stats.written > 0);
        assert_eq!(stats.samples(), 6 * 40 * 40);
        assert_eq!(fb.chars().len(), 16 * 12);
    }

    #[test]
    fn cube_entirely_off_grid_writes_nothing() {
        let cube = Cube::new(-100, 500, 20.0);
        let mut fb = FrameBufferPair::new(20, 20);
        let stats = DepthRasterizer::default().rasterize(&cube, &mut fb);
        assert_eq!(stats.written, 0);
        assert_eq!(stats.clipped, stats.samples());
        assert_eq!(fb.filled(), 0);
    }

    #[test]
    fn blank_cells_keep_sentinel_depth() {
        let cube = Cube::new(20, 20, 12.0).with_rotation(RotationState::from_angles(0.9, 0.2, 1.7));
        let fb = render(&cube, 40, 40);
        for row in 0..40 {
            for col in 0..40 {
                let blank = fb.char_at(row, col) == Some(BLANK);
                assert_eq!(blank, fb.depth(row, col) == DEPTH_SENTINEL);
            }
        }
    }

    #[test]
    fn two_cubes_share_a_frame() {
        let left = Cube::new(15, 20, 10.0);
        let right = Cube::new(45, 20, 10.0).with_rotation(RotationState::from_angles(0.0, 0.6, 0.0));
        let mut fb = FrameBufferPair::new(60, 40);
        let rasterizer = DepthRasterizer::default();
        rasterizer.rasterize(&left, &mut fb);
        let before = fb.filled();
        rasterizer.rasterize(&right, &mut fb);

        assert!(fb.filled() > before);
        assert_eq!(fb.char_at(20, 15), Some('F'));
        // The left cube is untouched by the right cube's rotation.
        assert_eq!(left.rotation().y(), 0.0);
    }
}
