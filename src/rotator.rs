//! Three-axis rotation of object-space points.
//!
//! Rotations compose in a fixed order: X first, then Y, then Z. Each step is a
//! plain 2D rotation of the two coordinates orthogonal to its axis. Precision
//! is kept in `f32` through the whole composition and the result is rounded to
//! whole cells exactly once at the end.

use crate::math::vec3::Vec3;

/// A rotated point snapped to the character grid.
///
/// `x` and `y` are cell offsets from the cube anchor; `z` is the depth used by
/// the depth buffer (smaller is closer to the viewer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellPoint {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CellPoint {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Rotates `point` by `angles` (radians about X, Y, Z) without rounding.
#[inline]
pub fn rotate_exact(point: Vec3, angles: Vec3) -> Vec3 {
    point
        .rotate_x(angles.x)
        .rotate_y(angles.y)
        .rotate_z(angles.z)
}

/// Rotates `point` by `angles` and rounds the result to the nearest cell.
///
/// Halfway values round away from zero.
#[inline]
pub fn rotate(point: Vec3, angles: Vec3) -> CellPoint {
    let r = rotate_exact(point, angles);
    CellPoint {
        x: r.x.round() as i32,
        y: r.y.round() as i32,
        z: r.z.round() as i32,
    }
}
