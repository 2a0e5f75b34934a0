//! `EventCalendar`: pending end-service events.
//!
//! Keyed by `(SimTime, FlowId)`, so popping the first key yields the earliest
//! event with ties broken by ascending flow id.  A flow entity is in service
//! at most once at a time, so keys never collide.

use std::collections::BTreeMap;

use sdesa_core::{ActivityId, FlowId, SimTime};

/// One scheduled end-service event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EndService {
    pub time:     SimTime,
    pub flow:     FlowId,
    pub activity: ActivityId,
}

#[derive(Clone, Debug, Default)]
pub struct EventCalendar {
    inner: BTreeMap<(SimTime, FlowId), ActivityId>,
}

impl EventCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `flow` to finish `activity` at `time`.
    ///
    /// Returns `false` (and leaves the calendar unchanged) if `flow` already
    /// has an event at `time`.
    pub fn schedule(&mut self, time: SimTime, flow: FlowId, activity: ActivityId) -> bool {
        match self.inner.entry((time, flow)) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(v) => {
                v.insert(activity);
                true
            }
        }
    }

    /// Remove and return the earliest event.
    pub fn pop_next(&mut self) -> Option<EndService> {
        self.inner
            .pop_first()
            .map(|((time, flow), activity)| EndService { time, flow, activity })
    }

    /// Time of the earliest event, if any.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.inner.keys().next().map(|&(t, _)| t)
    }

    /// Pending events in processing order.
    pub fn iter(&self) -> impl Iterator<Item = EndService> + '_ {
        self.inner
            .iter()
            .map(|(&(time, flow), &activity)| EndService { time, flow, activity })
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
