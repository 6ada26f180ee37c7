//! The 323+ family and its truncated-tetrahedron wrapper.

use nalgebra::Vector3;

use super::{OutOfRange, ParamRange, TruncationFamily};

/// 14 planes: two interleaved tetrahedral corner sets (types 2 and 0) plus
/// the 6 axis planes (type 1).
const PLANES: [[f64; 3]; 14] = [
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

const PLANE_TYPES: [usize; 14] = [2, 2, 2, 2, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1];

/// The 323+ family.
///
/// Parameters: `a ∈ [1, 3]`, `c ∈ [1, 3]`; `b` is pinned to 1. Covers the
/// tetrahedron-to-octahedron truncation series (tetrahedron at `(1, 3)`,
/// octahedron at `(1, 1)`).
#[derive(Clone, Copy, Debug, Default)]
pub struct Family323Plus;

impl Family323Plus {
    pub const A: ParamRange = ParamRange::new(1.0, 3.0);
    pub const C: ParamRange = ParamRange::new(1.0, 3.0);
    pub const B_FIXED: f64 = 1.0;

    pub fn validate(&self, a: f64, c: f64) -> Result<(), OutOfRange> {
        Self::A.check("a", a)?;
        Self::C.check("c", c)
    }

    /// Vertex set for `(a, c)`.
    pub fn build(&self, a: f64, c: f64) -> Result<Vec<Vector3<f64>>, OutOfRange> {
        self.validate(a, c)?;
        Ok(self.make_vertices(&[a, Self::B_FIXED, c]))
    }
}

impl TruncationFamily for Family323Plus {
    fn planes(&self) -> Vec<[f64; 3]> {
        PLANES.to_vec()
    }

    fn plane_types(&self) -> Vec<usize> {
        PLANE_TYPES.to_vec()
    }
}

/// Truncated tetrahedra as a one-parameter slice of [`Family323Plus`].
///
/// `truncation ∈ [0, 1]` interpolates linearly via `a = 1`,
/// `c = 3 − 2·truncation`: 0 is the untruncated tetrahedron, 1 the fully
/// truncated (rectified) one, i.e. the octahedron.
#[derive(Clone, Copy, Debug, Default)]
pub struct TruncatedTetrahedron;

impl TruncatedTetrahedron {
    pub const TRUNCATION: ParamRange = ParamRange::new(0.0, 1.0);

    /// Vertex set for the given truncation fraction.
    pub fn build(&self, truncation: f64) -> Result<Vec<Vector3<f64>>, OutOfRange> {
        Self::TRUNCATION.check("truncation", truncation)?;
        let c = 3.0 - 2.0 * truncation;
        Family323Plus.build(1.0, c)
    }
}

impl TruncationFamily for TruncatedTetrahedron {
    fn planes(&self) -> Vec<[f64; 3]> {
        Family323Plus.planes()
    }

    fn plane_types(&self) -> Vec<usize> {
        Family323Plus.plane_types()
    }
}
