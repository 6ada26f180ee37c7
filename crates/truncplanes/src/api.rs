//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a stable public API. It is a convenience surface for
//!   project-internal code and experiments; breaking changes are expected.
//! - Prefer these re-exports for clarity and consistency across callers.

// 3D half-space intersection enumerator
pub use crate::geom3::{truncation_vertices, EnumCfg, Hs3};
// Plane-family descriptors and concrete families
pub use crate::families::{
    Family323Plus, Family423, Family523, OutOfRange, ParamRange, TruncatedTetrahedron,
    TruncationFamily,
};
// Reproducible parameter sweeps
pub use crate::sweep::{draw_params, ReplayToken};
