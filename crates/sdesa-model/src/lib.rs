//! `sdesa-model`: the read-only inputs a simulation run consumes.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`types`]    | `ResourceTypes`: declared resource type names               |
//! | [`activity`] | `ActivityDef` (builder), `Activity` (resolved definition)    |
//! | [`graph`]    | `ActivityGraph`: activities + their duration samplers       |
//! | [`sampler`]  | `Sampler` trait, `Fixed`, `FnSampler`, `Distributed<D>`      |
//! | [`router`]   | `Router` trait, `AllSuccessors`                              |
//! | [`model`]    | `Model`, `InitialFlow`, `InitialResource`, validation        |
//! | [`error`]    | `ModelError`, `ModelResult<T>`                               |
//!
//! # Building a model
//!
//! ```rust
//! use sdesa_model::{ActivityDef, Fixed, InitialFlow, InitialResource, Model};
//!
//! let mut model = Model::new("one-loader");
//! let loader = model.types.declare("loader").unwrap();
//!
//! // Declare first so activities can reference each other in a cycle.
//! let load = model.graph.declare("load").unwrap();
//! let haul = model.graph.declare("haul").unwrap();
//!
//! model.graph.define(load, ActivityDef::new(Fixed(5.0))
//!     .requires([loader])
//!     .releases([loader])
//!     .successors([haul])).unwrap();
//! model.graph.define(haul, ActivityDef::new(Fixed(20.0)).successors([load])).unwrap();
//!
//! model.add_resource(InitialResource::new("loader_1", loader));
//! model.add_flow(InitialFlow::new("truck_0", load));
//! model.validate().unwrap();
//! ```

pub mod activity;
pub mod error;
pub mod graph;
pub mod model;
pub mod router;
pub mod sampler;
pub mod types;

#[cfg(test)]
mod tests;

pub use activity::{Activity, ActivityDef};
pub use error::{ModelError, ModelResult};
pub use graph::ActivityGraph;
pub use model::{InitialFlow, InitialResource, Model};
pub use router::{AllSuccessors, Router};
pub use sampler::{Distributed, Fixed, FnSampler, Sampler, ScaledBeta};
pub use types::ResourceTypes;

#[cfg(feature = "fx-hash")]
pub(crate) type NameMap<V> = rustc_hash::FxHashMap<String, V>;

#[cfg(not(feature = "fx-hash"))]
pub(crate) type NameMap<V> = std::collections::HashMap<String, V>;
