//! Core 3D type: the closed half-space.

use nalgebra::Vector3;

/// Closed half-space `n · x <= c` in R^3.
///
/// Invariants:
/// - `n` is not normalized; `c` is any finite real.
/// - Membership checks take an explicit slack `eps`.
#[derive(Clone, Copy, Debug)]
pub struct Hs3 {
    pub n: Vector3<f64>,
    pub c: f64,
}

impl Hs3 {
    #[inline]
    pub fn new(n: Vector3<f64>, c: f64) -> Self {
        Self { n, c }
    }

    #[inline]
    pub fn satisfies_eps(&self, p: Vector3<f64>, eps: f64) -> bool {
        self.n.dot(&p) <= self.c + eps
    }
}
