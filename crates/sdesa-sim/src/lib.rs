//! `sdesa-sim`: the engine loop of the SDESA kernel.
//!
//! # Two-phase loop
//!
//! ```text
//! scan at t = 0
//! loop:
//!   t ← min(next wake-up, next end-service event)
//!   none pending      → halt: Completed (nobody waiting) or Drained
//!   t > run limit     → halt: Cutoff (clock set to the limit)
//!   ① Advance : clock jumps straight to t.
//!   ② Wake    : apply every wake-up queued for t (availability toggles,
//!                future arrivals, future ready times).
//!   ③ End     : pop ONE end-service event (ties by ascending FlowId):
//!                  release / dispose held resources
//!                  generate new resources
//!                  record the observation
//!                  spawn successor flow entities via the Router
//!   ④ Scan    : every waiting, arrived entity in (priority desc,
//!                arrival asc, FlowId asc) order tries to acquire its
//!                activity's resources all-or-nothing; on success its
//!                duration is sampled and its end-service event scheduled.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`calendar`] | `EventCalendar`: end-service events keyed by (t, id) |
//! | [`wake`]     | `WakeQueue`, `Wake`: non-service instants            |
//! | [`observer`] | `SimObserver` hooks, `NoopObserver`                   |
//! | [`outcome`]  | `Observation`, `RunOutcome`, `InProgress`, `RunReport`|
//! | [`builder`]  | `EngineBuilder`: validation and initial population   |
//! | [`engine`]   | `Engine`: the loop itself                            |
//! | [`error`]    | `SimError`, `SimResult<T>`                            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sdesa_core::SimConfig;
//! use sdesa_sim::{EngineBuilder, NoopObserver};
//!
//! let mut engine = EngineBuilder::new(SimConfig::bounded(480.0, 42), model).build()?;
//! let report = engine.run(&mut NoopObserver)?;
//! println!("{:?} at {}", report.outcome.status, report.outcome.final_clock);
//! ```

pub mod builder;
pub mod calendar;
pub mod engine;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod wake;


pub use builder::EngineBuilder;
pub use calendar::{EndService, EventCalendar};
pub use engine::Engine;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use outcome::{InProgress, Observation, RunOutcome, RunReport, RunStatus};
pub use wake::{Wake, WakeQueue};
