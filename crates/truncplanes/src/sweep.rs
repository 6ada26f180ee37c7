//! Reproducible random parameter draws for family sweeps.
//!
//! Purpose
//! - Sweep experiments iterate a family over many parameter tuples. Draws are
//!   keyed by a replay token `(seed, index)` so any single tuple can be
//!   regenerated without replaying the whole stream.
//!
//! Model
//! - One uniform draw per [`ParamRange`], closed intervals, mixed into a
//!   single `StdRng` per token.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::families::ParamRange;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// One uniform draw per range, in order. Values land inside the closed
/// intervals, so they always pass the corresponding family validation.
pub fn draw_params(ranges: &[ParamRange], tok: ReplayToken) -> Vec<f64> {
    let mut rng = tok.to_std_rng();
    ranges.iter().map(|r| rng.gen_range(r.lo..=r.hi)).collect()
}

#[cfg(test)]
mod tests {
    use super::{draw_params, ReplayToken};
    use crate::families::{Family323Plus, Family523, ParamRange};

    #[test]
    fn draws_replay_exactly() {
        let ranges = [Family323Plus::A, Family323Plus::C];
        let tok = ReplayToken { seed: 7, index: 42 };
        let p1 = draw_params(&ranges, tok);
        let p2 = draw_params(&ranges, tok);
        assert_eq!(p1, p2);
        // Different index, different tuple (overwhelmingly likely).
        let p3 = draw_params(&ranges, ReplayToken { seed: 7, index: 43 });
        assert_ne!(p1, p3);
    }

    #[test]
    fn draws_stay_in_range_and_build() {
        for index in 0..16 {
            let ranges = [Family523::a_range(), Family523::c_range()];
            let p = draw_params(&ranges, ReplayToken { seed: 11, index });
            assert!(ranges[0].contains(p[0]) && ranges[1].contains(p[1]));
            let verts = Family523.build(p[0], p[1]).unwrap();
            assert!(verts.len() >= 4);
        }
    }

    #[test]
    fn degenerate_range_draws_the_endpoint() {
        let r = ParamRange::new(2.0, 2.0);
        let p = draw_params(&[r], ReplayToken { seed: 1, index: 1 });
        assert_eq!(p, vec![2.0]);
    }
}
