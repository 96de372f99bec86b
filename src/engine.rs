//! Frame driver.
//!
//! The [`Engine`] struct owns one cube, its animator, the rasterizer and the
//! frame buffer pair, and runs the per-frame sequence: clear the buffers,
//! advance the rotation, rasterize all six faces. Whatever draws the result
//! reads it through [`Engine::frame`] between calls to [`Engine::step`].

use crate::config::{Config, ConfigError};
use crate::cube::Cube;
use crate::render::{DepthRasterizer, FrameBufferPair, RasterStats, DEFAULT_SAMPLE_STEP};
use crate::rotation::Animator;

/// How often frame statistics are logged at debug level.
const STATS_LOG_INTERVAL: u64 = 120;

pub struct Engine {
    cube: Cube,
    animator: Animator,
    rasterizer: DepthRasterizer,
    frame: FrameBufferPair,
    frame_count: u64,
    last_stats: RasterStats,
}

impl Engine {
    /// Builds an engine from a validated copy of `config`, with the cube
    /// centred on the character grid.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let (cols, rows) = config.grid_size();

        if config.sample_step > DEFAULT_SAMPLE_STEP {
            log::warn!(
                "sample step {} is larger than half a cell; rotated faces may show holes",
                config.sample_step
            );
        }
        log::info!(
            "grid {cols}x{rows} cells ({}x{} px, {} px/cell), cube width {}",
            config.screen_width,
            config.screen_height,
            config.cell_size,
            config.cube_width
        );

        Ok(Self {
            cube: Cube::new((cols / 2) as i32, (rows / 2) as i32, config.cube_width),
            animator: Animator::new(config.rotation_delta),
            rasterizer: DepthRasterizer::new(config.sample_step),
            frame: FrameBufferPair::new(cols, rows),
            frame_count: 0,
            last_stats: RasterStats::default(),
        })
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn cube_mut(&mut self) -> &mut Cube {
        &mut self.cube
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &FrameBufferPair {
        &self.frame
    }

    /// Frames stepped so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn last_stats(&self) -> RasterStats {
        self.last_stats
    }

    /// Redraws the current rotation without advancing it.
    pub fn render(&mut self) -> RasterStats {
        self.frame.clear();
        self.last_stats = self.rasterizer.rasterize(&self.cube, &mut self.frame);
        self.last_stats
    }

    /// Runs one frame: clear, advance the rotation, rasterize.
    pub fn step(&mut self) -> RasterStats {
        self.frame.clear();
        self.animator.step(&mut self.cube);
        self.last_stats = self.rasterizer.rasterize(&self.cube, &mut self.frame);
        self.frame_count += 1;

        log::trace!("frame {}: {:?}", self.frame_count, self.last_stats);
        if self.frame_count % STATS_LOG_INTERVAL == 0 {
            let angles = self.cube.rotation().angles();
            log::debug!(
                "frame {}: {} cells filled, {} written / {} occluded / {} clipped, angles ({:.3}, {:.3}, {:.3})",
                self.frame_count,
                self.frame.filled(),
                self.last_stats.written,
                self.last_stats.occluded,
                self.last_stats.clipped,
                angles.x,
                angles.y,
                angles.z
            );
        }
        self.last_stats
    }
}
