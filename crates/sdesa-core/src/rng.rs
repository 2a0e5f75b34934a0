//! Deterministic RNG streams for duration samplers.
//!
//! # Determinism strategy
//!
//! There is no process-wide generator.  Each sampler owns its own
//! `SmallRng`, seeded by:
//!
//!   seed = global_seed XOR (stream * MIXING_CONSTANT)
//!
//! where `stream` is usually the activity's id.  The mixing constant is the
//! 64-bit fractional part of the golden ratio, which spreads consecutive
//! stream numbers uniformly across the seed space.  This means:
//!
//! - Samplers never share RNG state, so the draws of one activity do not
//!   depend on how often another activity was sampled.
//! - Adding an activity to a model does not disturb the streams of the
//!   existing ones.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::ActivityId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// One independent, reproducible random stream.
///
/// Handed to a duration sampler (or a router) at model construction; the
/// engine itself never touches randomness.
#[derive(Clone, Debug)]
pub struct SamplerRng(SmallRng);

impl SamplerRng {
    /// Seed stream number `stream` from the run's global seed.
    pub fn new(global_seed: u64, stream: u64) -> Self {
        let seed = global_seed ^ stream.wrapping_mul(MIXING_CONSTANT);
        SamplerRng(SmallRng::seed_from_u64(seed))
    }

    /// The stream conventionally used by `activity`'s duration sampler.
    pub fn for_activity(global_seed: u64, activity: ActivityId) -> Self {
        Self::new(global_seed, activity.0 as u64)
    }

    /// Expose the inner `SmallRng` for use with `rand` / `rand_distr`
    /// distribution types (`rng.inner().sample(dist)`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
