use nalgebra::Vector3;

use super::{
    dedup_first_occurrence, feasible_candidates, resolve_halfspaces, truncation_vertices, EnumCfg,
};

const AXIS_PLANES: [[f64; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

const CORNER_PLANES: [[f64; 3]; 8] = [
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
];

fn sorted(mut verts: Vec<Vector3<f64>>) -> Vec<Vector3<f64>> {
    verts.sort_by(|a, b| {
        a.as_slice()
            .partial_cmp(b.as_slice())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    verts
}

fn assert_same_set(got: Vec<Vector3<f64>>, want: Vec<Vector3<f64>>) {
    assert_eq!(got.len(), want.len(), "vertex counts differ");
    let got = sorted(got);
    let want = sorted(want);
    for (g, w) in got.iter().zip(&want) {
        assert!((g - w).norm() < 1e-9, "vertex mismatch: {g:?} vs {w:?}");
    }
}

#[test]
fn cube_from_axis_planes() {
    let types = [0usize; 6];
    let verts = truncation_vertices(&AXIS_PLANES, &types, &[1.0], EnumCfg::default());
    let mut want = Vec::new();
    for &x in &[-1.0, 1.0] {
        for &y in &[-1.0, 1.0] {
            for &z in &[-1.0, 1.0] {
                want.push(Vector3::new(x, y, z));
            }
        }
    }
    assert_same_set(verts, want);
}

#[test]
fn octahedron_merges_duplicate_triples() {
    // Each octahedron vertex lies on 4 of the 8 corner planes, so it is
    // produced by C(4,3) = 4 triples and must be merged down to one.
    let types = [0usize; 8];
    let hs = resolve_halfspaces(&CORNER_PLANES, &types, &[1.0]);
    let cfg = EnumCfg::default();
    let candidates = feasible_candidates(&hs, cfg);
    assert_eq!(candidates.len(), 24);
    let verts = dedup_first_occurrence(candidates, cfg.eps_dedup);
    let want = vec![
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(-1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(0.0, 0.0, -1.0),
    ];
    assert_same_set(verts, want);
}

#[test]
fn fewer_than_three_planes_yield_nothing() {
    let verts = truncation_vertices(
        &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        &[0, 0],
        &[1.0],
        EnumCfg::default(),
    );
    assert!(verts.is_empty());
}

#[test]
fn parallel_triples_are_gated_before_the_solve() {
    // x <= 1, -x <= 1, y <= 1: the only triple is singular, so no candidate.
    let planes = [[1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let verts = truncation_vertices(&planes, &[0, 0, 0], &[1.0], EnumCfg::default());
    assert!(verts.is_empty());
}

#[test]
fn unbounded_corner_passes_through_silently() {
    // Three planes meeting in one corner: the region is unbounded, but the
    // enumerator still reports the single intersection point without error.
    let planes = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
    let verts = truncation_vertices(&planes, &[0, 0, 0], &[1.0], EnumCfg::default());
    assert_same_set(verts, vec![Vector3::new(1.0, 1.0, 1.0)]);
}

#[test]
fn det_tolerance_is_configurable() {
    let cfg = EnumCfg {
        eps_det: 10.0,
        ..EnumCfg::default()
    };
    let types = [0usize; 6];
    // All axis triples have |det| = 1 <= 10, so everything is degenerate.
    let verts = truncation_vertices(&AXIS_PLANES, &types, &[1.0], cfg);
    assert!(verts.is_empty());
}

#[test]
fn dedup_keeps_first_occurrence_unrounded() {
    let first = Vector3::new(0.1234567, 0.0, 0.0);
    let near = Vector3::new(0.12345672, 0.0, 0.0);
    let far = Vector3::new(0.2, 0.0, 0.0);
    let out = dedup_first_occurrence(vec![first, near, far], 1e-6);
    assert_eq!(out.len(), 2);
    // Exact (bitwise) first occurrence, not the rounded key.
    assert_eq!(out[0], first);
    assert_eq!(out[1], far);
}

#[test]
fn per_type_distances_are_bound_by_index() {
    // Axis planes split across two types with different distances: a box
    // [-2,2] x [-1,1] x [-1,1].
    let types = [0usize, 0, 1, 1, 1, 1];
    let verts = truncation_vertices(&AXIS_PLANES, &types, &[2.0, 1.0], EnumCfg::default());
    assert_eq!(verts.len(), 8);
    for v in &verts {
        assert!((v.x.abs() - 2.0).abs() < 1e-9);
        assert!((v.y.abs() - 1.0).abs() < 1e-9);
        assert!((v.z.abs() - 1.0).abs() < 1e-9);
    }
}
