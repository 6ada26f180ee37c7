//! Vertex generation for truncation-plane shape families.
//!
//! A family of convex polyhedra is described by a fixed, symmetric set of
//! outward plane normals, each assigned one of a small number of distance
//! "types". Picking one scalar distance per type selects a member of the
//! family; its vertex set is the set of extreme points of the half-space
//! intersection `⋂ {x : n·x <= d_type}`.
//!
//! - `geom3` holds the enumerator: 3-plane subset enumeration, determinant
//!   gating, feasibility filtering, rounding-keyed dedup.
//! - `families` holds the plane tables and parameter bounds for the concrete
//!   symmetry classes (323+, 423, 523, truncated tetrahedra).
//! - `sweep` draws reproducible random parameter tuples for sweep runs.
//!
//! Downstream consumers hand the resulting vertex array to a convex-hull /
//! polyhedron constructor; faces, normals, and moments are out of scope here.

pub mod api;
pub mod families;
pub mod geom3;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports; `Vec3` matches the notation used in docs.
pub use geom3::{truncation_vertices, EnumCfg, Hs3};
pub use nalgebra::Vector3 as Vec3;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::families::{
        Family323Plus, Family423, Family523, OutOfRange, ParamRange, TruncatedTetrahedron,
        TruncationFamily,
    };
    pub use crate::geom3::{truncation_vertices, EnumCfg, Hs3};
    pub use crate::sweep::{draw_params, ReplayToken};
    pub use nalgebra::Vector3 as Vec3;
}
