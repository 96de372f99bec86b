//! The six faces of a cube and the sampling of their surface points.
//!
//! Every face is described by a row of [`FACES`]: the axis it is fixed on, the
//! sign of that fixed coordinate, the two axes it sweeps and its glyph. One
//! sampling routine ([`SurfaceSamples`]) walks any face from that description.
//!
//! With `h = width / 2` the fixed coordinate is `sign * h - 1`, so the
//! negative faces sit at `-(h + 1)` and the positive faces at `h - 1`.

use crate::math::vec3::{Axis, Vec3};

/// One face of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

/// Static description of how a face is laid out in object space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceDescriptor {
    pub surface: Surface,
    /// Axis held constant across the face.
    pub fixed_axis: Axis,
    /// `-1.0` for the face on the negative side of `fixed_axis`, `1.0` otherwise.
    pub sign: f32,
    /// Outer and inner sweep axes.
    pub sweep: (Axis, Axis),
    pub glyph: char,
}

/// Face table in rasterization order.
pub static FACES: [FaceDescriptor; 6] = [
    FaceDescriptor {
        surface: Surface::Front,
        fixed_axis: Axis::Z,
        sign: -1.0,
        sweep: (Axis::X, Axis::Y),
        glyph: 'F',
    },
    FaceDescriptor {
        surface: Surface::Back,
        fixed_axis: Axis::Z,
        sign: 1.0,
        sweep: (Axis::X, Axis::Y),
        glyph: 'K',
    },
    FaceDescriptor {
        surface: Surface::Left,
        fixed_axis: Axis::X,
        sign: -1.0,
        sweep: (Axis::Z, Axis::Y),
        glyph: 'L',
    },
    FaceDescriptor {
        surface: Surface::Right,
        fixed_axis: Axis::X,
        sign: 1.0,
        sweep: (Axis::Z, Axis::Y),
        glyph: 'R',
    },
    FaceDescriptor {
        surface: Surface::Top,
        fixed_axis: Axis::Y,
        sign: 1.0,
        sweep: (Axis::X, Axis::Z),
        glyph: 'T',
    },
    FaceDescriptor {
        surface: Surface::Bottom,
        fixed_axis: Axis::Y,
        sign: -1.0,
        sweep: (Axis::X, Axis::Z),
        glyph: 'D',
    },
];

impl Surface {
    pub const ALL: [Surface; 6] = [
        Surface::Front,
        Surface::Back,
        Surface::Left,
        Surface::Right,
        Surface::Top,
        Surface::Bottom,
    ];

    pub fn descriptor(self) -> &'static FaceDescriptor {
        &FACES[self as usize]
    }

    /// The character this face is drawn with.
    pub fn glyph(self) -> char {
        self.descriptor().glyph
    }

    /// Maps a glyph back to its face.
    pub fn from_glyph(glyph: char) -> Option<Surface> {
        FACES.iter().find(|f| f.glyph == glyph).map(|f| f.surface)
    }

    /// Object-space coordinate this face is pinned to for a cube of `width`.
    pub fn fixed_coordinate(self, width: f32) -> f32 {
        self.descriptor().sign * (width / 2.0) - 1.0
    }

    /// Lazily enumerates the face's object-space sample points.
    ///
    /// The two sweep axes run over `[-width / 2, width / 2)` in increments of
    /// `step`. The iterator is `Clone`; calling this again restarts the walk.
    pub fn samples(self, width: f32, step: f32) -> SurfaceSamples {
        SurfaceSamples::new(self.descriptor(), width, step)
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Surface::Front => write!(f, "Front"),
            Surface::Back => write!(f, "Back"),
            Surface::Left => write!(f, "Left"),
            Surface::Right => write!(f, "Right"),
            Surface::Top => write!(f, "Top"),
            Surface::Bottom => write!(f, "Bottom"),
        }
    }
}

/// Number of sweep positions in `[-half, half)` at `step`.
fn steps_across(half: f32, step: f32) -> usize {
    if step.is_nan() || half.is_nan() || step <= 0.0 || half <= 0.0 {
        return 0;
    }
    // Positions come from an integer index, so the count is exact.
    let mut n = ((2.0 * half) / step).ceil() as usize;
    while n > 0 && -half + (n - 1) as f32 * step >= half {
        n -= 1;
    }
    n
}

/// Iterator over the sample points of one face.
#[derive(Clone, Debug)]
pub struct SurfaceSamples {
    face: &'static FaceDescriptor,
    fixed: f32,
    half: f32,
    step: f32,
    count: usize,
    outer: usize,
    inner: usize,
}

impl SurfaceSamples {
    fn new(face: &'static FaceDescriptor, width: f32, step: f32) -> Self {
        let half = width / 2.0;
        Self {
            face,
            fixed: face.sign * half - 1.0,
            half,
            step,
            count: steps_across(half, step),
            outer: 0,
            inner: 0,
        }
    }

    pub fn surface(&self) -> Surface {
        self.face.surface
    }

    fn sweep_value(&self, index: usize) -> f32 {
        -self.half + index as f32 * self.step
    }
}

impl Iterator for SurfaceSamples {
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        if self.outer >= self.count {
            return None;
        }
        let (outer_axis, inner_axis) = self.face.sweep;
        let point = Vec3::ZERO
            .with(self.face.fixed_axis, self.fixed)
            .with(outer_axis, self.sweep_value(self.outer))
            .with(inner_axis, self.sweep_value(self.inner));

        self.inner += 1;
        if self.inner == self.count {
            self.inner = 0;
            self.outer += 1;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.outer >= self.count {
            0
        } else {
            (self.count - self.outer) * self.count - self.inner
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SurfaceSamples {}
