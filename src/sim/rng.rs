//! Stateless deterministic RNG
//!
//! The seed lives in `State` and is threaded through every transition. These
//! functions never hold state of their own, so the same seed always produces
//! the same value on every platform.

/// LCG multiplier (Numerical Recipes)
const LCG_A: u32 = 1_664_525;
/// LCG increment
const LCG_C: u32 = 1_013_904_223;

/// Advance a seed by one linear-congruential step (modulus 2^32)
#[inline]
pub fn hash(seed: u32) -> u32 {
    seed.wrapping_mul(LCG_A).wrapping_add(LCG_C)
}

/// Map a seed onto [-1, 1]
#[inline]
pub fn scale(seed: u32) -> f64 {
    seed as f64 / u32::MAX as f64 * 2.0 - 1.0
}

/// Draw a value in [min, max] from the successor of `seed`
pub fn random_in_range(min: f32, max: f32, seed: u32) -> f32 {
    let unit = (scale(hash(seed)) + 1.0) / 2.0;
    (min as f64 + unit * (max as f64 - min as f64)) as f32
}
