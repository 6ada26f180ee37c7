//! Vertex enumeration by combinatorial intersection of plane triples.

use std::collections::HashSet;

use nalgebra::{Matrix3, Vector3};

use super::cfg::EnumCfg;
use super::types::Hs3;
use super::util::quantize3;

/// Extreme points of `⋂_p {x : n_p·x <= dists[types[p]]}`.
///
/// `planes` are the outward normals (rows), `types` maps each plane to an
/// index into `dists`. Enumerates all C(P,3) plane triples, solves the
/// non-degenerate ones, keeps candidates feasible against the full family,
/// and dedups by rounded coordinates. Returned coordinates are the original
/// solved values, never the rounded keys; order follows the (deterministic)
/// triple enumeration and is not part of the contract.
///
/// Empty and lower-dimensional results pass through silently; rejecting
/// parameter values known to produce them is the caller's job.
pub fn truncation_vertices(
    planes: &[[f64; 3]],
    types: &[usize],
    dists: &[f64],
    cfg: EnumCfg,
) -> Vec<Vector3<f64>> {
    let hs = resolve_halfspaces(planes, types, dists);
    let candidates = feasible_candidates(&hs, cfg);
    dedup_first_occurrence(candidates, cfg.eps_dedup)
}

/// Bind each plane's runtime distance: `c_p = dists[types[p]]`.
pub(crate) fn resolve_halfspaces(planes: &[[f64; 3]], types: &[usize], dists: &[f64]) -> Vec<Hs3> {
    debug_assert_eq!(planes.len(), types.len());
    debug_assert!(types.iter().all(|&t| t < dists.len()));
    planes
        .iter()
        .zip(types)
        .map(|(row, &t)| Hs3::new(Vector3::new(row[0], row[1], row[2]), dists[t]))
        .collect()
}

/// Accepted candidates in triple enumeration order, before dedup.
///
/// A triple contributes iff its normal matrix clears the determinant gate
/// (checked before the solve) and the intersection point satisfies every
/// half-space within `eps_feas`.
pub(crate) fn feasible_candidates(hs: &[Hs3], cfg: EnumCfg) -> Vec<Vector3<f64>> {
    let mut out = Vec::new();
    if hs.len() < 3 {
        return out;
    }
    for i in 0..hs.len() {
        for j in i + 1..hs.len() {
            for k in j + 1..hs.len() {
                let a = Matrix3::from_rows(&[
                    hs[i].n.transpose(),
                    hs[j].n.transpose(),
                    hs[k].n.transpose(),
                ]);
                if a.determinant().abs() <= cfg.eps_det {
                    continue;
                }
                let Some(inv) = a.try_inverse() else {
                    continue;
                };
                let x = inv * Vector3::new(hs[i].c, hs[j].c, hs[k].c);
                if hs.iter().all(|h| h.satisfies_eps(x, cfg.eps_feas)) {
                    out.push(x);
                }
            }
        }
    }
    out
}

/// Keep one representative per quantized coordinate key, first occurrence
/// wins. The kept point is the unrounded original; rounding only forms the
/// key, so downstream consumers see full-precision coordinates.
pub(crate) fn dedup_first_occurrence(
    candidates: Vec<Vector3<f64>>,
    tol: f64,
) -> Vec<Vector3<f64>> {
    let mut seen: HashSet<(i64, i64, i64)> = HashSet::with_capacity(candidates.len());
    let mut out = Vec::new();
    for x in candidates {
        if seen.insert(quantize3(x, tol)) {
            out.push(x);
        }
    }
    out
}
