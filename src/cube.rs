//! The rotating cube.

use crate::math::vec3::Vec3;
use crate::rotation::RotationState;
use crate::rotator::{self, CellPoint};
use crate::surface::Surface;

/// A point projected onto the character grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenPoint {
    pub col: i32,
    pub row: i32,
    pub depth: i32,
}

/// A cube anchored at a grid cell, with its own rotation and edge length.
///
/// Cubes share nothing, so any number of them can be drawn into the same
/// frame independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    anchor_col: i32,
    anchor_row: i32,
    rotation: RotationState,
    width: f32,
}

impl Cube {
    /// Creates an unrotated cube centred on grid cell (`col`, `row`).
    pub fn new(col: i32, row: i32, width: f32) -> Self {
        Self {
            anchor_col: col,
            anchor_row: row,
            rotation: RotationState::new(),
            width,
        }
    }

    pub fn with_rotation(mut self, rotation: RotationState) -> Self {
        self.rotation = rotation;
        self
    }

    /// Grid cell the cube's origin projects onto, as (col, row).
    pub fn anchor(&self) -> (i32, i32) {
        (self.anchor_col, self.anchor_row)
    }

    pub fn set_anchor(&mut self, col: i32, row: i32) {
        self.anchor_col = col;
        self.anchor_row = row;
    }

    /// Edge length in world units (one unit per character cell).
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    /// Adds the deltas (radians) to the cube's angles.
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.rotation.advance(dx, dy, dz);
    }

    /// Rotates an object-space point and snaps it to the grid, without
    /// translating by the anchor.
    pub fn rotate_point(&self, point: Vec3) -> CellPoint {
        rotator::rotate(point, self.rotation.angles())
    }

    /// Rotates an object-space point and translates it onto the grid.
    pub fn project(&self, point: Vec3) -> ScreenPoint {
        let p = self.rotate_point(point);
        ScreenPoint {
            col: self.anchor_col + p.x,
            row: self.anchor_row + p.y,
            depth: p.z,
        }
    }

    /// Projected sample points of one face, in sampling order.
    pub fn project_surface(
        &self,
        surface: Surface,
        step: f32,
    ) -> impl Iterator<Item = ScreenPoint> + '_ {
        surface
            .samples(self.width, step)
            .map(move |p| self.project(p))
    }
}
