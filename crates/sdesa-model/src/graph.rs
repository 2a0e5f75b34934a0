//! The activity graph: every activity definition plus its duration sampler.

use sdesa_core::ActivityId;

use crate::{Activity, ActivityDef, ModelError, ModelResult, NameMap, ResourceTypes, Sampler};

/// One graph node.  `None` between `declare` and `define`.
struct Slot {
    name:    String,
    defined: Option<(Activity, Box<dyn Sampler>)>,
}

/// Activities indexed by [`ActivityId`].
///
/// Activities are declared (name → id) before being defined so that cyclic
/// routes (load → haul → dump → return → load) can reference ids that are
/// not yet defined.  [`validate`](Self::validate) checks that every declared
/// activity was defined and that every reference resolves.
///
/// The graph is read-only during a run except for its samplers, which each
/// advance their own RNG stream when drawn.
#[derive(Default)]
pub struct ActivityGraph {
    slots:   Vec<Slot>,
    by_name: NameMap<ActivityId>,
}

impl ActivityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an activity named `name` and return its id.
    ///
    /// Declaring the same name twice returns the existing id.
    pub fn declare(&mut self, name: impl Into<String>) -> ModelResult<ActivityId> {
        let name = name.into();
        if let Some(&id) = self.by_name.get(&name) {
            return Ok(id);
        }
        let id = ActivityId::try_from(self.slots.len())
            .ok()
            .filter(|id| *id != ActivityId::INVALID)
            .ok_or(ModelError::CapacityExceeded("activities"))?;
        self.by_name.insert(name.clone(), id);
        self.slots.push(Slot { name, defined: None });
        Ok(id)
    }

    /// Attach a definition to a declared activity.
    pub fn define(&mut self, id: ActivityId, def: ActivityDef) -> ModelResult<()> {
        let slot = self
            .slots
            .get_mut(id.index())
            .ok_or(ModelError::UnknownActivity(id))?;
        if slot.defined.is_some() {
            return Err(ModelError::AlreadyDefined(slot.name.clone()));
        }
        let activity = Activity {
            id,
            name:       slot.name.clone(),
            priority:   def.priority,
            required:   def.required,
            released:   def.released,
            generated:  def.generated,
            successors: def.successors,
        };
        slot.defined = Some((activity, def.sampler));
        Ok(())
    }

    /// `declare` + `define` in one step.
    pub fn add(&mut self, name: impl Into<String>, def: ActivityDef) -> ModelResult<ActivityId> {
        let id = self.declare(name)?;
        self.define(id, def)?;
        Ok(id)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// The definition of `id`, or `None` if undeclared or still undefined.
    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.slots
            .get(id.index())
            .and_then(|s| s.defined.as_ref())
            .map(|(a, _)| a)
    }

    pub fn lookup(&self, name: &str) -> Option<ActivityId> {
        self.by_name.get(name).copied()
    }

    /// Name of a declared activity.
    pub fn name(&self, id: ActivityId) -> Option<&str> {
        self.slots.get(id.index()).map(|s| s.name.as_str())
    }

    pub fn contains(&self, id: ActivityId) -> bool {
        id.index() < self.slots.len()
    }

    /// Number of declared activities.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Defined activities in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.slots
            .iter()
            .filter_map(|s| s.defined.as_ref().map(|(a, _)| a))
    }

    /// Draw one duration for `id`.  `None` if `id` is not defined.
    ///
    /// The value is returned unchecked; callers decide what a negative or
    /// non-finite draw means.
    pub fn sample_duration(&mut self, id: ActivityId) -> Option<f64> {
        self.slots
            .get_mut(id.index())
            .and_then(|s| s.defined.as_mut())
            .map(|(_, sampler)| sampler.sample())
    }

    // ── Validation ────────────────────────────────────────────────────────

    /// Check that every activity is defined and every successor / resource
    /// type reference resolves against this graph and `types`.
    pub fn validate(&self, types: &ResourceTypes) -> ModelResult<()> {
        for slot in &self.slots {
            let (activity, _) = slot
                .defined
                .as_ref()
                .ok_or_else(|| ModelError::UndefinedActivity(slot.name.clone()))?;

            for &successor in &activity.successors {
                if !self.contains(successor) {
                    return Err(ModelError::UndeclaredSuccessor {
                        activity: activity.name.clone(),
                        successor,
                    });
                }
            }

            let referenced = activity
                .required
                .iter()
                .chain(&activity.released)
                .chain(&activity.generated);
            for &kind in referenced {
                if !types.contains(kind) {
                    return Err(ModelError::UndeclaredResourceType {
                        activity: activity.name.clone(),
                        kind,
                    });
                }
            }

            // Released must be a sub-multiset of required.
            for &kind in &activity.released {
                let released = activity.released.iter().filter(|&&k| k == kind).count();
                let required = activity.required.iter().filter(|&&k| k == kind).count();
                if released > required {
                    return Err(ModelError::ReleasedNotRequired {
                        activity: activity.name.clone(),
                        kind:     types.name(kind).unwrap_or("?").to_owned(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ActivityGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityGraph")
            .field("activities", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
