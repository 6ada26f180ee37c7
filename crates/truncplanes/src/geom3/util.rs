//! Quantization helper for vertex dedup.

use nalgebra::Vector3;

/// Integer dedup key: coordinates rounded at resolution `tol`.
///
/// With `tol = 1e-6` this is exactly "round to six decimal digits".
pub(crate) fn quantize3(v: Vector3<f64>, tol: f64) -> (i64, i64, i64) {
    let s = 1.0 / tol;
    (
        (v.x * s).round() as i64,
        (v.y * s).round() as i64,
        (v.z * s).round() as i64,
    )
}
