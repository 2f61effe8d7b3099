//! Random 2D points (seeded draws + replay tokens).
//!
//! Purpose
//! - Provide small, deterministic point and direction draws for tests and
//!   benchmarks. Determinism uses a replay token `(seed, index)` mixed into
//!   a single RNG, so draw `i` of a run can be reproduced in isolation.
//!
//! Code cross-refs: `types::Point2`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point2;

/// Axis-aligned sampling box.
#[derive(Clone, Copy, Debug)]
pub struct Bounds2 {
    pub min: Point2,
    pub max: Point2,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            min: Point2::new(-1.0, -1.0),
            max: Point2::new(1.0, 1.0),
        }
    }
}

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

/// Draw a uniform point in `bounds`.
///
/// Coordinates interpolate `min + u * (max - min)` with `u ∈ [0, 1)`, so a
/// degenerate box (min == max) collapses to that point instead of erroring.
pub fn draw_point(bounds: Bounds2, tok: ReplayToken) -> Point2 {
    let mut rng = tok.to_std_rng();
    let ux: f32 = rng.gen();
    let uy: f32 = rng.gen();
    Point2::new(
        bounds.min.x + ux * (bounds.max.x - bounds.min.x),
        bounds.min.y + uy * (bounds.max.y - bounds.min.y),
    )
}

/// Draw a unit direction via a uniform angle in `[0, 2π)`.
pub fn draw_dir(tok: ReplayToken) -> Point2 {
    let mut rng = tok.to_std_rng();
    let theta = rng.gen::<f32>() * std::f32::consts::TAU;
    Point2::from_angle(theta)
}
