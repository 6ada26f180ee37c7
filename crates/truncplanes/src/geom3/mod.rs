//! 3D half-space intersection vertex enumeration (explicit, simple algorithm).
//!
//! Purpose
//! - Compute the extreme points of `⋂_p {x : n_p·x <= d_type(p)}` for a fixed
//!   plane arrangement and one distance per plane type. Plane counts are small
//!   (tens), so the O(P^3) triple enumeration is cheap and easy to audit.
//!
//! Why this design
//! - Keep the combinatorial search explicit (nested index loops + 3×3 solves)
//!   rather than batched; filtering and dedup semantics stay obvious.
//! - Degenerate triples, infeasible candidates, and empty results are normal
//!   outcomes of the search and are filtered silently; parameter validation
//!   upstream (see `crate::families`) owns rejection of bad inputs.
//!
//! Assumptions and conventions
//! - Half-spaces use `n·x <= c`; normals are not normalized (tables carry the
//!   caller's scaling).
//! - Degeneracy is decided by `|det| <= eps_det` *before* any solve; candidate
//!   feasibility uses `<= c + eps_feas`; dedup keys round coordinates at
//!   `eps_dedup`. Defaults for all three live in `EnumCfg`.

mod cfg;
mod enumerate;
mod types;
mod util;

pub use cfg::EnumCfg;
pub use enumerate::truncation_vertices;
pub use types::Hs3;

// Internal stages, exposed for invariant tests elsewhere in the crate.
pub(crate) use enumerate::{dedup_first_occurrence, feasible_candidates, resolve_halfspaces};

#[cfg(test)]
mod tests;
