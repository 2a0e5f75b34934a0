//! `Model`: the complete input to a run: resource types, the activity
//! graph, and the initial flow and resource entities.

use sdesa_core::{ActivityId, AttrValue, Attributes, ResourceTypeId, SimTime};

use crate::{ActivityGraph, ModelError, ModelResult, ResourceTypes};

// ── Initial entities ──────────────────────────────────────────────────────────

/// A flow entity present when the run starts.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialFlow {
    pub label:      String,
    pub activity:   ActivityId,
    /// When the entity becomes eligible.  Defaults to t = 0.
    pub arrival:    SimTime,
    pub attributes: Attributes,
}

impl InitialFlow {
    pub fn new(label: impl Into<String>, activity: ActivityId) -> Self {
        Self {
            label: label.into(),
            activity,
            arrival: SimTime::ZERO,
            attributes: Attributes::new(),
        }
    }

    pub fn arriving_at(mut self, arrival: SimTime) -> Self {
        self.arrival = arrival;
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(key, value);
        self
    }
}

/// A resource entity present when the run starts.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialResource {
    pub label:      String,
    pub kind:       ResourceTypeId,
    /// Earliest acquisition time.  Defaults to t = 0.
    pub ready_time: SimTime,
    pub available:  bool,
    pub disposable: bool,
    pub attributes: Attributes,
}

impl InitialResource {
    /// An available, reusable resource ready at t = 0.
    pub fn new(label: impl Into<String>, kind: ResourceTypeId) -> Self {
        Self {
            label: label.into(),
            kind,
            ready_time: SimTime::ZERO,
            available: true,
            disposable: false,
            attributes: Attributes::new(),
        }
    }

    pub fn ready_at(mut self, ready_time: SimTime) -> Self {
        self.ready_time = ready_time;
        self
    }

    /// Consumed by the first activity that holds it.
    pub fn disposable(mut self) -> Self {
        self.disposable = true;
        self
    }

    /// Starts out of service.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(key, value);
        self
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

/// Everything the engine needs to start a run.
///
/// Fields are public so a model can be assembled incrementally; call
/// [`validate`](Self::validate) (the engine builder does) before running.
#[derive(Debug, Default)]
pub struct Model {
    pub name:      String,
    pub types:     ResourceTypes,
    pub graph:     ActivityGraph,
    pub flows:     Vec<InitialFlow>,
    pub resources: Vec<InitialResource>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn add_flow(&mut self, flow: InitialFlow) {
        self.flows.push(flow);
    }

    pub fn add_resource(&mut self, resource: InitialResource) {
        self.resources.push(resource);
    }

    /// Check the whole model: the graph (see [`ActivityGraph::validate`]),
    /// that every initial flow starts at a defined activity, and that every
    /// initial resource has a declared type.
    pub fn validate(&self) -> ModelResult<()> {
        self.graph.validate(&self.types)?;

        for flow in &self.flows {
            if self.graph.get(flow.activity).is_none() {
                return Err(ModelError::UnknownStartActivity {
                    flow:     flow.label.clone(),
                    activity: flow.activity,
                });
            }
        }

        for resource in &self.resources {
            if !self.types.contains(resource.kind) {
                return Err(ModelError::UnknownResourceType {
                    resource: resource.label.clone(),
                    kind:     resource.kind,
                });
            }
        }
        Ok(())
    }
}
