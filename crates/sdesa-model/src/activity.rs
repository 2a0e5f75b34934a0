//! Activity definitions.
//!
//! An activity is a node in the process graph.  For one flow entity it
//! needs a multiset of resource types to start, hands some of them back on
//! completion, may materialize new resources, and then routes the entity on
//! to its successors.
//!
//! Resource requirements name *types*, never instances; which instance is
//! used is decided by the pool at begin-service.

use sdesa_core::{ActivityId, ResourceTypeId};

use crate::Sampler;

// ── Activity ──────────────────────────────────────────────────────────────────

/// An immutable, resolved activity definition as stored in the graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    /// Higher is served first when several waiting entities compete.
    pub priority: i32,
    /// One unit per entry; repeated types require several instances.
    pub required: Vec<ResourceTypeId>,
    /// Types returned to the pool at completion (a sub-multiset of `required`).
    /// Reusable instances go back at completion whether listed or not;
    /// disposable ones are removed either way.
    pub released: Vec<ResourceTypeId>,
    /// New resources materialized at completion, one per entry.
    pub generated: Vec<ResourceTypeId>,
    pub successors: Vec<ActivityId>,
}

impl Activity {
    /// `true` if starting this activity never contends for resources.
    pub fn is_unconstrained(&self) -> bool {
        self.required.is_empty()
    }

    /// `true` if completing this activity ends the entity's route (unless a
    /// router says otherwise, it spawns nothing).
    pub fn is_terminal(&self) -> bool {
        self.successors.is_empty()
    }
}

// ── ActivityDef ───────────────────────────────────────────────────────────────

/// Fluent definition of an activity, consumed by
/// [`ActivityGraph::define`][crate::ActivityGraph::define].
///
/// ```rust
/// use sdesa_core::{ActivityId, ResourceTypeId};
/// use sdesa_model::{ActivityDef, Fixed};
///
/// let spotter = ResourceTypeId(1);
/// let def = ActivityDef::new(Fixed(5.0))
///     .requires([spotter])
///     .releases([spotter])
///     .successor(ActivityId(3))
///     .priority(2);
/// ```
pub struct ActivityDef {
    pub(crate) sampler:    Box<dyn Sampler>,
    pub(crate) priority:   i32,
    pub(crate) required:   Vec<ResourceTypeId>,
    pub(crate) released:   Vec<ResourceTypeId>,
    pub(crate) generated:  Vec<ResourceTypeId>,
    pub(crate) successors: Vec<ActivityId>,
}

impl ActivityDef {
    /// Start a definition whose durations are drawn from `sampler`.
    pub fn new(sampler: impl Sampler + 'static) -> Self {
        Self {
            sampler:    Box::new(sampler),
            priority:   0,
            required:   Vec::new(),
            released:   Vec::new(),
            generated:  Vec::new(),
            successors: Vec::new(),
        }
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn requires(mut self, kinds: impl IntoIterator<Item = ResourceTypeId>) -> Self {
        self.required.extend(kinds);
        self
    }

    pub fn releases(mut self, kinds: impl IntoIterator<Item = ResourceTypeId>) -> Self {
        self.released.extend(kinds);
        self
    }

    pub fn generates(mut self, kinds: impl IntoIterator<Item = ResourceTypeId>) -> Self {
        self.generated.extend(kinds);
        self
    }

    pub fn successors(mut self, next: impl IntoIterator<Item = ActivityId>) -> Self {
        self.successors.extend(next);
        self
    }

    pub fn successor(mut self, next: ActivityId) -> Self {
        self.successors.push(next);
        self
    }
}
