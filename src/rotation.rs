//! Cumulative rotation state and the per-frame animator.
//!
//! [`RotationState`] stores the three Euler angles of a cube (radians about X,
//! Y and Z), always reduced into `[0, 2π)`. [`Animator`] holds the per-axis
//! angle deltas and applies them once per frame.

use std::f32::consts::TAU;

use crate::cube::Cube;
use crate::math::vec3::Vec3;

/// Euler angles in radians, each kept in `[0, 2π)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    angles: Vec3,
}

/// Reduces `angle` into `[0, 2π)`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can return exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state from arbitrary angles, wrapping each into range.
    pub fn from_angles(x: f32, y: f32, z: f32) -> Self {
        Self {
            angles: Vec3::new(wrap_angle(x), wrap_angle(y), wrap_angle(z)),
        }
    }

    /// Get the angles (radians about X, Y, Z).
    pub fn angles(&self) -> Vec3 {
        self.angles
    }

    pub fn x(&self) -> f32 {
        self.angles.x
    }

    pub fn y(&self) -> f32 {
        self.angles.y
    }

    pub fn z(&self) -> f32 {
        self.angles.z
    }

    /// Adds the deltas to the angles and wraps each into `[0, 2π)`.
    pub fn advance(&mut self, dx: f32, dy: f32, dz: f32) -> &mut Self {
        self.angles = Vec3::new(
            wrap_angle(self.angles.x + dx),
            wrap_angle(self.angles.y + dy),
            wrap_angle(self.angles.z + dz),
        );
        self
    }
}

/// Applies a constant rotation delta to a cube every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animator {
    delta: Vec3,
}

impl Animator {
    pub fn new(delta: Vec3) -> Self {
        Self { delta }
    }

    /// Per-frame deltas in radians.
    pub fn delta(&self) -> Vec3 {
        self.delta
    }

    /// Advances `cube` by one frame.
    pub fn step(&self, cube: &mut Cube) {
        cube.rotate(self.delta.x, self.delta.y, self.delta.z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Distance between two angles measured around the circle.
    fn circular_distance(a: f32, b: f32) -> f32 {
        let d = wrap_angle(a - b);
        d.min(TAU - d)
    }

    #[test]
    fn new_state_starts_unrotated() {
        let r = RotationState::default();
        assert_eq!(r, RotationState::new());
        assert_eq!(r.angles(), Vec3::ZERO);
    }

    #[test]
    fn advance_accumulates() {
        let mut r = RotationState::new();
        r.advance(0.1, 0.2, 0.3).advance(0.1, 0.2, 0.3);
        assert_relative_eq!(r.x(), 0.2, epsilon = 1e-6);
        assert_relative_eq!(r.y(), 0.4, epsilon = 1e-6);
        assert_relative_eq!(r.z(), 0.6, epsilon = 1e-6);
    }

    #[test]
    fn angles_stay_in_range() {
        let mut r = RotationState::new();
        for _ in 0..1000 {
            r.advance(0.37, -0.53, 1.9);
            for a in [r.x(), r.y(), r.z()] {
                assert!((0.0..TAU).contains(&a), "angle {a} out of range");
            }
        }
    }

    #[test]
    fn negative_delta_wraps_to_top_of_range() {
        let mut r = RotationState::new();
        r.advance(-0.5, 0.0, 0.0);
        assert_relative_eq!(r.x(), TAU - 0.5, epsilon = 1e-6);
    }

    #[test]
    fn wrap_angle_never_returns_tau() {
        assert!(wrap_angle(-1e-9) < TAU);
        assert_eq!(wrap_angle(TAU), 0.0);
    }

    #[test]
    fn from_angles_wraps() {
        let r = RotationState::from_angles(TAU + 1.0, -1.0, 2.0 * TAU);
        assert_relative_eq!(r.x(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(r.y(), TAU - 1.0, epsilon = 1e-5);
        assert_relative_eq!(r.z(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn periodicity_returns_near_start() {
        let delta = TAU / 100.0;
        let mut r = RotationState::from_angles(1.25, 0.0, 0.0);
        let start = r.x();
        for _ in 0..100 {
            r.advance(delta, 0.0, 0.0);
        }
        assert!(circular_distance(r.x(), start) < 1e-3);
    }

    #[test]
    fn accumulation_of_628_hundredths_is_near_zero() {
        let mut r = RotationState::new();
        for _ in 0..628 {
            r.advance(0.01, 0.0, 0.0);
        }
        assert!(circular_distance(r.x(), 0.0) < 0.01);
        assert_eq!(r.y(), 0.0);
        assert_eq!(r.z(), 0.0);
    }

    #[test]
    fn animator_steps_cube() {
        let mut cube = Cube::new(40, 40, 20.0);
        let animator = Animator::new(Vec3::new(0.03, 0.0, 0.0));
        animator.step(&mut cube);
        animator.step(&mut cube);
        assert_relative_eq!(cube.rotation().x(), 0.06, epsilon = 1e-6);
        assert_eq!(cube.rotation().y(), 0.0);
    }
}
