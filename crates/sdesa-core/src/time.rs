//! Simulation time model.
//!
//! # Design
//!
//! Time is continuous: activity durations come from arbitrary probability
//! distributions, so `SimTime` wraps an `f64`.  Construction is checked
//! (every `SimTime` is finite and non-negative), which lets the type carry a
//! total order (`Ord`) and be used as a `BTreeMap` key by the event calendar.
//!
//! The clock never ticks on its own.  It jumps straight to the time of the
//! next processed event via [`SimClock::advance_to`], and refuses to move
//! backwards.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{CoreError, CoreResult};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation time (or a non-negative span of it).
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct SimTime(f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Wrap `value`, rejecting NaN, infinities, and negative numbers.
    pub fn new(value: f64) -> CoreResult<SimTime> {
        if value.is_finite() && value >= 0.0 {
            // `+ 0.0` folds -0.0 into 0.0 so `Eq` and `Hash` agree.
            Ok(SimTime(value + 0.0))
        } else {
            Err(CoreError::InvalidTime(value))
        }
    }

    /// The raw value.
    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// The time `duration` units after `self`.
    ///
    /// Fails if `duration` is negative or non-finite, or if the sum overflows
    /// to infinity.
    pub fn after(self, duration: f64) -> CoreResult<SimTime> {
        if !(duration.is_finite() && duration >= 0.0) {
            return Err(CoreError::InvalidTime(duration));
        }
        SimTime::new(self.0 + duration)
    }

    /// Time elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for SimTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl TryFrom<f64> for SimTime {
    type Error = CoreError;
    fn try_from(value: f64) -> CoreResult<SimTime> {
        SimTime::new(value)
    }
}

impl From<SimTime> for f64 {
    fn from(t: SimTime) -> f64 {
        t.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The current simulation time.
///
/// Only moves forward, and only to instants the engine has something to do
/// at.  `SimClock` is cheap to copy and holds no heap data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    now: SimTime,
}

impl SimClock {
    /// A clock at t = 0.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Jump to `to`.  Staying put (`to == now`) is allowed; going back is not.
    pub fn advance_to(&mut self, to: SimTime) -> CoreResult<()> {
        if to < self.now {
            return Err(CoreError::ClockBackwards { now: self.now, requested: to });
        }
        self.now = to;
        Ok(())
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clock@{}", self.now)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically built in code or loaded from a JSON/TOML file by the
/// application crate and handed to the engine builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Run horizon.  `None` runs until the system completes or drains.
    pub duration: Option<f64>,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// A configuration with no time bound.
    pub fn unbounded(seed: u64) -> Self {
        Self { duration: None, seed }
    }

    /// A configuration that stops at `duration`.
    pub fn bounded(duration: f64, seed: u64) -> Self {
        Self { duration: Some(duration), seed }
    }

    /// The validated run horizon.
    pub fn run_limit(&self) -> CoreResult<Option<SimTime>> {
        match self.duration {
            None => Ok(None),
            Some(d) => SimTime::new(d)
                .map(Some)
                .map_err(|_| CoreError::Config(format!("run duration {d} must be finite and >= 0"))),
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::unbounded(0)
    }
}
