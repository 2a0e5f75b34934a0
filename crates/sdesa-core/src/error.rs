//! Error type for the core primitives.
//!
//! Sub-crates define their own error enums and wrap the lower-level ones via
//! `From` impls where an error can cross a crate boundary.

use thiserror::Error;

use crate::SimTime;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// Simulation times must be finite and non-negative.
    #[error("invalid simulation time {0}: must be finite and >= 0")]
    InvalidTime(f64),

    #[error("clock cannot move backwards from {now} to {requested}")]
    ClockBackwards { now: SimTime, requested: SimTime },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sdesa-core`.
pub type CoreResult<T> = Result<T, CoreError>;
