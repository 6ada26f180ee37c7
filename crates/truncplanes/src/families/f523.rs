//! The 523 family (icosahedral symmetry).
//!
//! Normals are built from the golden ratio S = (1 + √5)/2 and its inverse
//! s = 1/S, so the table is computed rather than a literal const.

use nalgebra::Vector3;

use super::{OutOfRange, ParamRange, TruncationFamily};

/// Golden ratio S.
#[inline]
fn golden() -> f64 {
    (1.0 + 5.0_f64.sqrt()) / 2.0
}

/// The 523 family.
///
/// Parameters: `a ∈ [1, s√5]`, `c ∈ [S², 3]`, where `S` is the golden ratio
/// and `s = 1/S`; `b` is pinned to 2. Covers the icosahedral truncation
/// series (dodecahedral facets type 0, axis planes type 1 together with a
/// 24-plane shell, icosahedral corner planes type 2).
#[derive(Clone, Copy, Debug, Default)]
pub struct Family523;

impl Family523 {
    pub const B_FIXED: f64 = 2.0;

    /// `a ∈ [1, s√5]`.
    pub fn a_range() -> ParamRange {
        let s = 1.0 / golden();
        ParamRange::new(1.0, s * 5.0_f64.sqrt())
    }

    /// `c ∈ [S², 3]`.
    pub fn c_range() -> ParamRange {
        let cap = golden();
        ParamRange::new(cap * cap, 3.0)
    }

    pub fn validate(&self, a: f64, c: f64) -> Result<(), OutOfRange> {
        Self::a_range().check("a", a)?;
        Self::c_range().check("c", c)
    }

    /// Vertex set for `(a, c)`.
    pub fn build(&self, a: f64, c: f64) -> Result<Vec<Vector3<f64>>, OutOfRange> {
        self.validate(a, c)?;
        Ok(self.make_vertices(&[a, Self::B_FIXED, c]))
    }
}

impl TruncationFamily for Family523 {
    fn planes(&self) -> Vec<[f64; 3]> {
        let cap = golden();
        let s = 1.0 / cap;
        let c2 = cap * cap;
        vec![
            // 12 dodecahedral directions (type 0)
            [1.0, 0.0, s],
            [-1.0, 0.0, -s],
            [-1.0, 0.0, s],
            [1.0, 0.0, -s],
            [0.0, -s, -1.0],
            [0.0, s, 1.0],
            [0.0, s, -1.0],
            [0.0, -s, 1.0],
            [-s, -1.0, 0.0],
            [s, 1.0, 0.0],
            [s, -1.0, 0.0],
            [-s, 1.0, 0.0],
            // 6 axis directions, scaled by 2 (type 1)
            [-2.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [0.0, -2.0, 0.0],
            [0.0, 2.0, 0.0],
            [0.0, 0.0, -2.0],
            [0.0, 0.0, 2.0],
            // 8 corner directions (type 2)
            [cap, cap, cap],
            [-cap, cap, cap],
            [cap, -cap, cap],
            [cap, cap, -cap],
            [cap, -cap, -cap],
            [-cap, -cap, cap],
            [-cap, cap, -cap],
            [-cap, -cap, -cap],
            // 12 icosahedral directions (type 2)
            [1.0, 0.0, c2],
            [-1.0, 0.0, -c2],
            [-1.0, 0.0, c2],
            [1.0, 0.0, -c2],
            [0.0, -c2, -1.0],
            [0.0, c2, 1.0],
            [0.0, -c2, 1.0],
            [0.0, c2, -1.0],
            [-c2, -1.0, 0.0],
            [c2, 1.0, 0.0],
            [c2, -1.0, 0.0],
            [-c2, 1.0, 0.0],
            // 24 rhombicosidodecahedral directions (type 1)
            [cap, -1.0, -s],
            [-cap, 1.0, -s],
            [-cap, -1.0, s],
            [cap, 1.0, s],
            [cap, -1.0, s],
            [cap, 1.0, -s],
            [-cap, 1.0, s],
            [-cap, -1.0, -s],
            [s, cap, 1.0],
            [s, -cap, -1.0],
            [-s, -cap, 1.0],
            [-s, cap, -1.0],
            [-s, -cap, -1.0],
            [s, -cap, 1.0],
            [-s, cap, 1.0],
            [s, cap, -1.0],
            [1.0, -s, -cap],
            [-1.0, s, -cap],
            [-1.0, -s, cap],
            [1.0, s, cap],
            [1.0, s, -cap],
            [-1.0, s, cap],
            [1.0, -s, cap],
            [-1.0, -s, -cap],
        ]
    }

    fn plane_types(&self) -> Vec<usize> {
        let mut t = Vec::with_capacity(62);
        t.extend(std::iter::repeat(0).take(12));
        t.extend(std::iter::repeat(1).take(6));
        t.extend(std::iter::repeat(2).take(20));
        t.extend(std::iter::repeat(1).take(24));
        t
    }
}
