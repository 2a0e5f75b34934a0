//! Resource entities and the pool that owns them.
//!
//! # Acquirability
//!
//! A resource can be acquired at time `now` iff
//!
//! ```text
//! available && holder.is_none() && ready_time <= now
//! ```
//!
//! `available` is the in-service flag a model toggles for maintenance-style
//! downtime; `holder` is set while a flow entity is using the resource.
//!
//! # Selection
//!
//! Among acquirable instances of a type the pool picks the one with the
//! smallest `ready_time`, breaking ties by ascending `ResourceId`.  Selection
//! is therefore a pure function of pool state, which keeps runs replayable.

use sdesa_core::{Attributes, FlowId, ResourceId, ResourceTypeId, SimTime};

use crate::{EntityError, EntityResult};

/// A reusable or consumable unit an activity needs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceEntity {
    pub id: ResourceId,
    pub label: String,
    pub kind: ResourceTypeId,
    /// Earliest time the resource may next be acquired.
    pub ready_time: SimTime,
    /// In-service flag.  `false` takes the resource out of contention
    /// without removing it.
    pub available: bool,
    /// Single-use: removed from the pool instead of being released.
    pub disposable: bool,
    /// The flow entity currently using this resource.
    pub holder: Option<FlowId>,
    pub attributes: Attributes,
}

impl ResourceEntity {
    #[inline]
    pub fn is_acquirable(&self, now: SimTime) -> bool {
        self.available && self.holder.is_none() && self.ready_time <= now
    }
}

/// Arena of resource entities with a per-type index.
///
/// Disposed resources leave an empty slot behind; ids are never reused.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePool {
    slots:   Vec<Option<ResourceEntity>>,
    /// Live resource ids per `ResourceTypeId`, ascending.
    by_type: Vec<Vec<ResourceId>>,
}

impl ResourcePool {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Creation ──────────────────────────────────────────────────────────

    /// Add a resource to the pool.
    pub fn insert(
        &mut self,
        label:      impl Into<String>,
        kind:       ResourceTypeId,
        ready_time: SimTime,
        available:  bool,
        disposable: bool,
        attributes: Attributes,
    ) -> EntityResult<ResourceId> {
        let id = ResourceId::try_from(self.slots.len())
            .ok()
            .filter(|id| *id != ResourceId::INVALID)
            .ok_or(EntityError::CapacityExceeded("resource entities"))?;

        self.slots.push(Some(ResourceEntity {
            id,
            label: label.into(),
            kind,
            ready_time,
            available,
            disposable,
            holder: None,
            attributes,
        }));
        if self.by_type.len() <= kind.index() {
            self.by_type.resize_with(kind.index() + 1, Vec::new);
        }
        // Ids are allocated ascending, so pushing keeps each list sorted.
        self.by_type[kind.index()].push(id);
        Ok(id)
    }

    /// Materialize a new resource of `kind`, acquirable from `at`.
    ///
    /// Generated resources are single-use tokens: they are disposed, not
    /// released, when an activity that holds them completes.
    pub fn generate(
        &mut self,
        kind:  ResourceTypeId,
        label: impl Into<String>,
        at:    SimTime,
    ) -> EntityResult<ResourceId> {
        self.insert(label, kind, at, true, true, Attributes::new())
    }

    // ── Acquisition ───────────────────────────────────────────────────────

    /// Reserve one acquirable instance per entry of `kinds` for `holder`.
    ///
    /// All-or-nothing: if any required unit has no acquirable candidate the
    /// pool is left untouched and `None` is returned.  Repeated kinds in
    /// `kinds` reserve distinct instances.  The returned ids are in the same
    /// order as `kinds`; an empty `kinds` always succeeds.
    pub fn try_acquire_all(
        &mut self,
        kinds:  &[ResourceTypeId],
        holder: FlowId,
        now:    SimTime,
    ) -> Option<Vec<ResourceId>> {
        let mut chosen: Vec<ResourceId> = Vec::with_capacity(kinds.len());

        for &kind in kinds {
            let best = self
                .by_type
                .get(kind.index())?
                .iter()
                .filter(|id| !chosen.contains(id))
                .filter_map(|&id| self.slots[id.index()].as_ref())
                .filter(|r| r.is_acquirable(now))
                .min_by(|a, b| a.ready_time.cmp(&b.ready_time).then(a.id.cmp(&b.id)))?;
            chosen.push(best.id);
        }

        // Selection succeeded for every unit; commit in one pass.
        for id in &chosen {
            if let Some(r) = self.slots[id.index()].as_mut() {
                r.holder = Some(holder);
            }
        }
        Some(chosen)
    }

    /// Return a held resource to the pool, acquirable again from `at`.
    ///
    /// The `available` flag is left as-is: a resource taken out of service
    /// while held stays out of service after release.
    pub fn release(&mut self, id: ResourceId, holder: FlowId, at: SimTime) -> EntityResult<()> {
        let r = self.held_by_mut(id, holder)?;
        r.holder = None;
        r.ready_time = at;
        Ok(())
    }

    /// Permanently remove a resource held by `holder` (consumed by use).
    pub fn dispose(&mut self, id: ResourceId, holder: FlowId) -> EntityResult<ResourceEntity> {
        self.held_by_mut(id, holder)?;
        self.remove(id)
    }

    /// Undo a reservation made by [`try_acquire_all`](Self::try_acquire_all)
    /// whose service never started.  Ready times are left untouched.
    pub fn abandon(&mut self, ids: &[ResourceId], holder: FlowId) -> EntityResult<()> {
        for &id in ids {
            self.held_by_mut(id, holder)?.holder = None;
        }
        Ok(())
    }

    /// Toggle the in-service flag.  Returns the previous value.
    pub fn set_available(&mut self, id: ResourceId, available: bool) -> EntityResult<bool> {
        let r = self
            .slots
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(EntityError::UnknownResource(id))?;
        Ok(std::mem::replace(&mut r.available, available))
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn get(&self, id: ResourceId) -> Option<&ResourceEntity> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Live (not disposed) resources in ascending id order.
    pub fn live(&self) -> impl Iterator<Item = &ResourceEntity> + '_ {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Number of live resources.
    pub fn len(&self) -> usize {
        self.by_type.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of resources ever created, disposed ones included.
    pub fn created_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of live resources of `kind`, held or not.
    pub fn count_of(&self, kind: ResourceTypeId) -> usize {
        self.by_type.get(kind.index()).map_or(0, Vec::len)
    }

    /// Number of resources of `kind` acquirable at `now`.
    pub fn acquirable_count(&self, kind: ResourceTypeId, now: SimTime) -> usize {
        self.by_type.get(kind.index()).map_or(0, |ids| {
            ids.iter()
                .filter_map(|id| self.get(*id))
                .filter(|r| r.is_acquirable(now))
                .count()
        })
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn held_by_mut(&mut self, id: ResourceId, holder: FlowId) -> EntityResult<&mut ResourceEntity> {
        let r = self
            .slots
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(EntityError::UnknownResource(id))?;
        let current = r.holder;
        match current {
            None => Err(EntityError::NotHeld(id)),
            Some(h) if h != holder => Err(EntityError::HeldByOther {
                resource: id,
                holder:   h,
                expected: holder,
            }),
            Some(_) => Ok(r),
        }
    }

    fn remove(&mut self, id: ResourceId) -> EntityResult<ResourceEntity> {
        let r = self
            .slots
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(EntityError::UnknownResource(id))?;
        if let Some(ids) = self.by_type.get_mut(r.kind.index()) {
            ids.retain(|&x| x != id);
        }
        Ok(r)
    }
}
