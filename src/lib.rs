//! A software rasterizer that spins a cube on a character grid.
//!
//! Each frame the cube's six faces are sampled in object space, rotated about
//! X, Y and Z, snapped to grid cells and depth-tested into a
//! [`FrameBufferPair`](render::FrameBufferPair). The character grid is the
//! output; SDL2 is used only by the optional window front-end.
//!
//! # Quick Start
//!
//! ```ignore
//! use glyphcube::prelude::*;
//!
//! let mut engine = Engine::new(&Config::default())?;
//! engine.step();
//! print!("{}", engine.frame());
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod cube;
pub mod engine;
pub mod math;
pub mod render;
pub mod rotation;
pub mod rotator;
pub mod surface;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use config::{Command, Config, ConfigError};
pub use cube::Cube;
pub use engine::Engine;
pub use surface::Surface;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use glyphcube::prelude::*;
/// ```
pub mod prelude {
    // Configuration
    pub use crate::config::{Command, Config, ConfigError};

    // Engine
    pub use crate::engine::Engine;

    // Geometry
    pub use crate::cube::{Cube, ScreenPoint};
    pub use crate::rotation::{Animator, RotationState};
    pub use crate::rotator::CellPoint;
    pub use crate::surface::Surface;

    // Math
    pub use crate::math::vec3::Vec3;

    // Rendering
    pub use crate::render::{DepthRasterizer, FrameBufferPair, RasterStats, Renderer};

    // Window
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
