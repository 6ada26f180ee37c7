//! Truncation-plane shape families: fixed plane tables plus parameter bounds.
//!
//! Purpose
//! - Describe one symmetry class per family: a table of outward plane normals,
//!   a parallel table assigning each plane a distance type (0 ↔ a, 1 ↔ b,
//!   2 ↔ c), and the closed intervals the distance parameters may take.
//!   Plane tables follow the truncation-plane construction of Chen, Klotsa &
//!   Engel (2014).
//!
//! Why this design
//! - Families are zero-sized types implementing [`TruncationFamily`]; the
//!   tables are plain consts (or computed once per call where golden-ratio
//!   arithmetic is involved), with no shared mutable state.
//! - `build` validates eagerly and then delegates to the enumerator, so
//!   [`OutOfRange`] is raised before any linear algebra runs. The enumerator
//!   itself never errors; empty or degenerate regions for in-bounds
//!   parameters would pass through silently, which is why each family's
//!   advertised intervals are part of its definition.

use std::fmt;

use nalgebra::Vector3;

use crate::geom3::{truncation_vertices, EnumCfg};

mod f323;
mod f423;
mod f523;

pub use f323::{Family323Plus, TruncatedTetrahedron};
pub use f423::Family423;
pub use f523::Family523;

/// Closed parameter interval `[lo, hi]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub lo: f64,
    pub hi: f64,
}

impl ParamRange {
    #[inline]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Closed-interval membership; false for NaN.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Accept `value` or report which parameter violated which interval.
    pub fn check(&self, param: &'static str, value: f64) -> Result<(), OutOfRange> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(OutOfRange {
                param,
                value,
                range: *self,
            })
        }
    }
}

/// A supplied parameter violates its family's documented interval.
///
/// The only user-facing error in this crate; always recoverable by supplying
/// in-bounds parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct OutOfRange {
    pub param: &'static str,
    pub value: f64,
    pub range: ParamRange,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parameter `{}` = {} outside [{}, {}]",
            self.param, self.value, self.range.lo, self.range.hi
        )
    }
}

impl std::error::Error for OutOfRange {}

/// A family of shapes cut from a symmetric truncation-plane arrangement.
///
/// Implementors supply the two defining tables; `make_vertices` is the shared
/// enumeration path. Tables must be constant per family and parallel
/// (`planes().len() == plane_types().len()`), with every distance type used
/// by at least 3 planes.
pub trait TruncationFamily {
    /// Outward plane normals, shape (P, 3).
    fn planes(&self) -> Vec<[f64; 3]>;

    /// Distance type per plane; values index into the `dists` argument of
    /// [`TruncationFamily::make_vertices`] (0 ↔ a, 1 ↔ b, 2 ↔ c).
    fn plane_types(&self) -> Vec<usize>;

    /// Vertex set for one distance per type, with default tolerances.
    ///
    /// Does not validate `dists`; the concrete families' `build` methods do
    /// that against their documented intervals.
    fn make_vertices(&self, dists: &[f64]) -> Vec<Vector3<f64>> {
        truncation_vertices(
            &self.planes(),
            &self.plane_types(),
            dists,
            EnumCfg::default(),
        )
    }
}
