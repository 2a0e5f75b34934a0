//! `sdesa-entity`: arena storage for the two kinds of entity the engine
//! mutates.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`flow`]     | `FlowEntity`, `FlowState`, `FlowRegistry`                   |
//! | [`resource`] | `ResourceEntity`, `ResourcePool` (atomic multi-acquire)     |
//! | [`error`]    | `EntityError`, `EntityResult<T>`                            |
//!
//! Both stores are dense id-indexed tables.  Cross-references (which flow
//! holds which resource) are stored as ids and resolved through the owning
//! store, never as pointers.
//!
//! Every mutation that would break a store invariant (releasing a resource
//! nobody holds, starting a flow that is already in service) returns an
//! [`EntityError`].  Callers treat these as fatal defects, not as conditions
//! to retry.

pub mod error;
pub mod flow;
pub mod resource;


pub use error::{EntityError, EntityResult};
pub use flow::{FlowEntity, FlowRegistry, FlowState};
pub use resource::{ResourceEntity, ResourcePool};
