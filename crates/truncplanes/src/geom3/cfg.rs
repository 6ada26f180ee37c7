//! Tolerance configuration for the vertex enumerator.
//!
//! Policy
//! - Defaults are locked to the values known shape outputs were produced
//!   with; changing them changes which near-degenerate triples survive and
//!   which near-duplicate vertices merge. Adjust only for plane tables whose
//!   scale differs substantially from O(1).

/// Enumerator tolerances.
#[derive(Clone, Copy, Debug)]
pub struct EnumCfg {
    /// Degeneracy gate: a plane triple with `|det| <= eps_det` is skipped
    /// before any solve is attempted.
    pub eps_det: f64,
    /// Feasibility slack: a candidate passes plane `p` if `n_p·x <= c_p + eps_feas`.
    pub eps_feas: f64,
    /// Dedup quantization step. `1e-6` keys vertices by their coordinates
    /// rounded to six decimal digits.
    pub eps_dedup: f64,
}

impl Default for EnumCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-6,
            eps_feas: 1e-6,
            eps_dedup: 1e-6,
        }
    }
}
