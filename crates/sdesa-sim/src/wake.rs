//! `WakeQueue`: instants the clock must stop at that are not end-service
//! events.
//!
//! The clock only ever lands on times where something happens.  Apart from
//! service completions, three things can make a waiting entity startable:
//! the entity's own (future) arrival, a resource's (future) ready time, and a
//! scheduled availability toggle.  The builder and
//! [`Engine::schedule_availability`][crate::Engine::schedule_availability]
//! register those instants here; the engine drains them before any
//! end-service event at the same time.

use std::collections::BTreeMap;

use sdesa_core::{FlowId, ResourceId, SimTime};

/// Why the clock must stop at a given instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Wake {
    /// A flow entity becomes eligible.
    Arrival(FlowId),
    /// A resource's ready time is reached.
    Ready(ResourceId),
    /// Put a resource in or out of service.
    Toggle { resource: ResourceId, available: bool },
}

#[derive(Clone, Debug, Default)]
pub struct WakeQueue {
    inner: BTreeMap<SimTime, Vec<Wake>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl WakeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `wake` at `time`.  Entries at the same instant are applied in
    /// insertion order.
    pub fn push(&mut self, time: SimTime, wake: Wake) {
        self.inner.entry(time).or_default().push(wake);
        self.total += 1;
    }

    /// Remove and return everything queued for exactly `time`.
    ///
    /// Returns `None` if nothing is queued then (the common case).
    pub fn drain_at(&mut self, time: SimTime) -> Option<Vec<Wake>> {
        let wakes = self.inner.remove(&time)?;
        self.total -= wakes.len();
        Some(wakes)
    }

    /// The earliest instant with at least one entry.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
