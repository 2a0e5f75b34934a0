//! Flow entities and the registry that tracks them.
//!
//! A flow entity is created when it becomes eligible for an activity (at
//! t = 0 for the model's initial entities, or when a predecessor activity
//! completes) and leaves active tracking when that activity completes.
//! Routing through several activities therefore produces a chain of flow
//! entities linked by `parent`, one per activity visited.
//!
//! # States
//!
//! ```text
//! Waiting ──begin_service──▶ InService ──complete──▶ Completed
//! ```
//!
//! `service_start` is `None` exactly while the entity is `Waiting`.

use std::collections::BTreeSet;

use sdesa_core::{ActivityId, Attributes, FlowId, ResourceId, SimTime};

use crate::{EntityError, EntityResult};

/// Externally observable lifecycle state of a flow entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowState {
    /// Eligible (or about to be) but holding no resources.
    Waiting,
    /// Resources acquired, end-of-service pending.
    InService,
    /// Activity finished; no longer actively tracked.
    Completed,
}

/// One unit moving through the activity graph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowEntity {
    pub id: FlowId,
    /// Caller-facing name, e.g. `"truck_0"` or `"truck_0_haul"`.
    pub label: String,
    /// The activity this entity is queued for / being served by.
    pub activity: ActivityId,
    /// When the entity became eligible to start `activity`.
    pub arrival: SimTime,
    /// Set at begin-service; never earlier than `arrival`.
    pub service_start: Option<SimTime>,
    /// Resource instances acquired at begin-service, in requirement order.
    pub held: Vec<ResourceId>,
    /// The entity whose completion spawned this one.
    pub parent: Option<FlowId>,
    pub attributes: Attributes,
    pub state: FlowState,
}

impl FlowEntity {
    /// `true` while no service has begun.
    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.state == FlowState::Waiting
    }

    #[inline]
    pub fn is_in_service(&self) -> bool {
        self.state == FlowState::InService
    }

    /// Time spent queued before service began, if it has.
    pub fn waiting_time(&self) -> Option<f64> {
        self.service_start.map(|s| s.since(self.arrival))
    }
}

/// Arena of every flow entity ever created in a run, plus ordered indices of
/// the ones still active.
///
/// `FlowId`s are dense and allocated in creation order; completed entities
/// keep their slot so ids are never reused and observation records can
/// always be resolved back to a label.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowRegistry {
    entities:   Vec<FlowEntity>,
    waiting:    BTreeSet<FlowId>,
    in_service: BTreeSet<FlowId>,
}

impl FlowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a waiting entity for `activity`, eligible from `arrival`.
    pub fn admit(
        &mut self,
        label:      impl Into<String>,
        activity:   ActivityId,
        arrival:    SimTime,
        parent:     Option<FlowId>,
        attributes: Attributes,
    ) -> EntityResult<FlowId> {
        let id = FlowId::try_from(self.entities.len())
            .ok()
            .filter(|id| *id != FlowId::INVALID)
            .ok_or(EntityError::CapacityExceeded("flow entities"))?;

        self.entities.push(FlowEntity {
            id,
            label: label.into(),
            activity,
            arrival,
            service_start: None,
            held: Vec::new(),
            parent,
            attributes,
            state: FlowState::Waiting,
        });
        self.waiting.insert(id);
        Ok(id)
    }

    /// Record the start of service at `at` with the acquired `held` resources.
    pub fn begin_service(
        &mut self,
        id:   FlowId,
        at:   SimTime,
        held: Vec<ResourceId>,
    ) -> EntityResult<()> {
        let entity = self
            .entities
            .get_mut(id.index())
            .ok_or(EntityError::UnknownFlow(id))?;
        if entity.state != FlowState::Waiting {
            return Err(EntityError::FlowNotWaiting(id));
        }
        if at < entity.arrival {
            return Err(EntityError::StartBeforeArrival {
                flow:    id,
                start:   at,
                arrival: entity.arrival,
            });
        }
        entity.service_start = Some(at);
        entity.held = held;
        entity.state = FlowState::InService;
        self.waiting.remove(&id);
        self.in_service.insert(id);
        Ok(())
    }

    /// Mark an in-service entity completed and drop it from active tracking.
    ///
    /// Returns a copy of the entity as it stood at completion (with its held
    /// resource list) so the caller can release resources and spawn
    /// successors without holding a borrow on the registry.
    pub fn complete(&mut self, id: FlowId) -> EntityResult<FlowEntity> {
        let entity = self
            .entities
            .get_mut(id.index())
            .ok_or(EntityError::UnknownFlow(id))?;
        if entity.state != FlowState::InService {
            return Err(EntityError::FlowNotInService(id));
        }
        entity.state = FlowState::Completed;
        self.in_service.remove(&id);
        Ok(entity.clone())
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn get(&self, id: FlowId) -> Option<&FlowEntity> {
        self.entities.get(id.index())
    }

    /// Waiting entity ids in ascending id order.
    pub fn waiting(&self) -> impl Iterator<Item = FlowId> + '_ {
        self.waiting.iter().copied()
    }

    /// In-service entity ids in ascending id order.
    pub fn in_service(&self) -> impl Iterator<Item = FlowId> + '_ {
        self.in_service.iter().copied()
    }

    /// All active (waiting or in-service) entities in ascending id order.
    pub fn active(&self) -> impl Iterator<Item = &FlowEntity> + '_ {
        self.entities.iter().filter(|e| e.state != FlowState::Completed)
    }

    /// Every entity ever created, completed ones included.
    pub fn all(&self) -> &[FlowEntity] {
        &self.entities
    }

    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    pub fn in_service_count(&self) -> usize {
        self.in_service.len()
    }

    /// Number of entities still being tracked.
    pub fn active_count(&self) -> usize {
        self.waiting.len() + self.in_service.len()
    }

    /// Number of entities ever created.
    pub fn created_count(&self) -> usize {
        self.entities.len()
    }
}
