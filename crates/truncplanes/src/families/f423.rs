//! The 423 family (octahedral symmetry).

use nalgebra::Vector3;

use super::{OutOfRange, ParamRange, TruncationFamily};

/// 26 planes: 8 corner directions (type 2), 12 edge directions (type 1),
/// 6 axis directions (type 0).
const PLANES: [[f64; 3]; 26] = [
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [-1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
    [0.0, -1.0, 1.0],
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

const PLANE_TYPES: [usize; 26] = [
    2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0,
];

/// The 423 family.
///
/// Parameters: `a ∈ [1, 2]`, `c ∈ [2, 3]`; `b` is pinned to 2. Covers the
/// cube/octahedron truncation series (cube at `(1, 3)`, rhombic dodecahedron
/// at `(2, 3)`).
#[derive(Clone, Copy, Debug, Default)]
pub struct Family423;

impl Family423 {
    pub const A: ParamRange = ParamRange::new(1.0, 2.0);
    pub const C: ParamRange = ParamRange::new(2.0, 3.0);
    pub const B_FIXED: f64 = 2.0;

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

impl TruncationFamily for Family423 {
    fn planes(&self) -> Vec<[f64; 3]> {
        PLANES.to_vec()
    }

    fn plane_types(&self) -> Vec<usize> {
        PLANE_TYPES.to_vec()
    }
}
