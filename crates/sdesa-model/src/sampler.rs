//! Duration samplers: the capability an activity uses to draw how long one
//! service takes.
//!
//! The engine calls [`Sampler::sample`] exactly once per service start and
//! treats the result as opaque.  Randomness is the sampler's own business:
//! distribution-backed samplers own a [`SamplerRng`] stream, so no global
//! generator exists anywhere in the kernel.

use rand::Rng;
use rand_distr::{Beta, Distribution, Exp, Normal, Triangular, Uniform};
use sdesa_core::SamplerRng;

use crate::{ModelError, ModelResult};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Produces one activity duration per call.
///
/// # Contract
///
/// - Durations should be finite and non-negative.  Anything else aborts the
///   run with a malformed-duration error; values are never clamped.
/// - Must be deterministic given its own state (seeded RNG, call count).
/// - Must not block or perform I/O.
pub trait Sampler: Send {
    fn sample(&mut self) -> f64;
}

// ── Fixed ─────────────────────────────────────────────────────────────────────

/// Always returns the same duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fixed(pub f64);

impl Sampler for Fixed {
    #[inline]
    fn sample(&mut self) -> f64 {
        self.0
    }
}

// ── FnSampler ─────────────────────────────────────────────────────────────────

/// Adapts any `FnMut() -> f64` closure.
///
/// ```rust
/// use sdesa_model::{FnSampler, Sampler};
///
/// let mut script = vec![3.0, 1.0, 2.0].into_iter();
/// let mut s = FnSampler(move || script.next().unwrap_or(0.0));
/// assert_eq!(s.sample(), 3.0);
/// ```
pub struct FnSampler<F>(pub F);

impl<F: FnMut() -> f64 + Send> Sampler for FnSampler<F> {
    #[inline]
    fn sample(&mut self) -> f64 {
        (self.0)()
    }
}

// ── Distributed ───────────────────────────────────────────────────────────────

/// Draws from a `rand_distr` distribution using its own RNG stream.
pub struct Distributed<D> {
    dist: D,
    rng:  SamplerRng,
}

impl<D: Distribution<f64>> Distributed<D> {
    pub fn new(dist: D, rng: SamplerRng) -> Self {
        Self { dist, rng }
    }
}

impl<D: Distribution<f64> + Send> Sampler for Distributed<D> {
    #[inline]
    fn sample(&mut self) -> f64 {
        self.rng.inner().sample(&self.dist)
    }
}

impl Distributed<Uniform<f64>> {
    /// Uniform on `[min, max)`.
    pub fn uniform(min: f64, max: f64, rng: SamplerRng) -> ModelResult<Self> {
        // `Uniform::new` panics on an empty or non-finite range.
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(ModelError::Distribution(format!(
                "uniform range [{min}, {max}) is empty or non-finite"
            )));
        }
        Ok(Self::new(Uniform::new(min, max), rng))
    }
}

impl Distributed<Triangular<f64>> {
    /// Triangular with lower bound `min`, peak `mode`, upper bound `max`.
    pub fn triangular(min: f64, mode: f64, max: f64, rng: SamplerRng) -> ModelResult<Self> {
        let dist = Triangular::new(min, max, mode)
            .map_err(|e| ModelError::Distribution(format!("triangular({min}, {mode}, {max}): {e}")))?;
        Ok(Self::new(dist, rng))
    }
}

impl Distributed<Normal<f64>> {
    /// Normal with the given mean and standard deviation.  Can draw negative
    /// values; pick parameters accordingly.
    pub fn normal(mean: f64, std_dev: f64, rng: SamplerRng) -> ModelResult<Self> {
        let dist = Normal::new(mean, std_dev)
            .map_err(|e| ModelError::Distribution(format!("normal({mean}, {std_dev}): {e}")))?;
        Ok(Self::new(dist, rng))
    }
}

impl Distributed<Exp<f64>> {
    /// Exponential with rate `lambda` (mean `1 / lambda`).
    pub fn exponential(lambda: f64, rng: SamplerRng) -> ModelResult<Self> {
        let dist = Exp::new(lambda)
            .map_err(|e| ModelError::Distribution(format!("exponential({lambda}): {e}")))?;
        Ok(Self::new(dist, rng))
    }
}

impl Distributed<ScaledBeta> {
    /// Beta(`alpha`, `beta`) rescaled from `[0, 1]` onto `[min, max]`.
    pub fn scaled_beta(
        alpha: f64,
        beta:  f64,
        min:   f64,
        max:   f64,
        rng:   SamplerRng,
    ) -> ModelResult<Self> {
        Ok(Self::new(ScaledBeta::new(alpha, beta, min, max)?, rng))
    }
}

/// A Beta distribution stretched onto `[min, max]` (PERT-style durations).
#[derive(Clone, Debug)]
pub struct ScaledBeta {
    beta: Beta<f64>,
    min:  f64,
    span: f64,
}

impl ScaledBeta {
    pub fn new(alpha: f64, beta: f64, min: f64, max: f64) -> ModelResult<Self> {
        if !(min.is_finite() && max.is_finite() && min <= max) {
            return Err(ModelError::Distribution(format!(
                "beta range [{min}, {max}] is inverted or non-finite"
            )));
        }
        let b = Beta::new(alpha, beta)
            .map_err(|e| ModelError::Distribution(format!("beta({alpha}, {beta}): {e}")))?;
        Ok(Self { beta: b, min, span: max - min })
    }
}

impl Distribution<f64> for ScaledBeta {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.min + self.span * self.beta.sample(rng)
    }
}
