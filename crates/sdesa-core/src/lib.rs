//! `sdesa-core`: foundational types for the SDESA simulation kernel.
//!
//! This crate is a dependency of every other `sdesa-*` crate.  It has no
//! `sdesa-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`ids`]     | `FlowId`, `ResourceId`, `ActivityId`, `ResourceTypeId`     |
//! | [`time`]    | `SimTime`, `SimClock`, `SimConfig`                         |
//! | [`attrs`]   | `AttrValue`, `Attributes` (caller-defined entity fields)   |
//! | [`rng`]     | `SamplerRng` (one independent stream per sampler)          |
//! | [`error`]   | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all plain-data types.    |

pub mod attrs;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use attrs::{AttrValue, Attributes};
pub use error::{CoreError, CoreResult};
pub use ids::{ActivityId, FlowId, ResourceId, ResourceTypeId};
pub use rng::SamplerRng;
pub use time::{SimClock, SimConfig, SimTime};
