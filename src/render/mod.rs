//! Frame storage, rasterization and pixel output.
//!
//! - [`FrameBufferPair`]: character grid plus depth grid for one frame
//! - [`DepthRasterizer`]: depth-tested point rasterization of cube faces
//! - [`Renderer`]: draws a character grid into an ARGB8888 pixel buffer

pub mod framebuffer;
pub mod glyph;
pub mod rasterizer;
pub mod renderer;

pub use framebuffer::{FrameBufferPair, BLANK, DEPTH_SENTINEL};
pub use rasterizer::{DepthRasterizer, RasterStats, DEFAULT_SAMPLE_STEP};
pub use renderer::Renderer;
