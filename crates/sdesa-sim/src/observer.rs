//! Observer hooks: the engine's only outward channel besides the report.
//!
//! The engine never logs.  Anything that wants to watch a run (a tracing
//! bridge, a recorder, a progress bar) implements [`SimObserver`] and is
//! passed to [`Engine::run`][crate::Engine::run].

use sdesa_core::{ActivityId, FlowId, ResourceId, SimTime};

use crate::{Observation, RunOutcome};

/// Callbacks invoked by the engine at key points of the loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: completion counter
///
/// ```rust,ignore
/// struct Counter(usize);
///
/// impl SimObserver for Counter {
///     fn on_service_end(&mut self, _obs: &Observation) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first scan.
    fn on_run_start(&mut self, _start: SimTime, _limit: Option<SimTime>) {}

    /// Called whenever the clock moves forward.
    fn on_clock_advance(&mut self, _from: SimTime, _to: SimTime) {}

    /// Called when a flow entity acquires its resources and begins service.
    fn on_service_start(
        &mut self,
        _time:      SimTime,
        _flow:      FlowId,
        _activity:  ActivityId,
        _resources: &[ResourceId],
    ) {}

    /// Called once per completed service, after resources are handed back.
    fn on_service_end(&mut self, _observation: &Observation) {}

    /// Called when a resource's in-service flag actually changes.
    fn on_resource_toggle(&mut self, _time: SimTime, _resource: ResourceId, _available: bool) {}

    /// Called once when the run halts.
    fn on_run_end(&mut self, _outcome: &RunOutcome) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<T: SimObserver + ?Sized> SimObserver for &mut T {
    fn on_run_start(&mut self, start: SimTime, limit: Option<SimTime>) {
        (**self).on_run_start(start, limit);
    }

    fn on_clock_advance(&mut self, from: SimTime, to: SimTime) {
        (**self).on_clock_advance(from, to);
    }

    fn on_service_start(
        &mut self,
        time:      SimTime,
        flow:      FlowId,
        activity:  ActivityId,
        resources: &[ResourceId],
    ) {
        (**self).on_service_start(time, flow, activity, resources);
    }

    fn on_service_end(&mut self, observation: &Observation) {
        (**self).on_service_end(observation);
    }

    fn on_resource_toggle(&mut self, time: SimTime, resource: ResourceId, available: bool) {
        (**self).on_resource_toggle(time, resource, available);
    }

    fn on_run_end(&mut self, outcome: &RunOutcome) {
        (**self).on_run_end(outcome);
    }
}

/// Run two observers side by side; `A` always sees each hook first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_run_start(&mut self, start: SimTime, limit: Option<SimTime>) {
        self.0.on_run_start(start, limit);
        self.1.on_run_start(start, limit);
    }

    fn on_clock_advance(&mut self, from: SimTime, to: SimTime) {
        self.0.on_clock_advance(from, to);
        self.1.on_clock_advance(from, to);
    }

    fn on_service_start(
        &mut self,
        time:      SimTime,
        flow:      FlowId,
        activity:  ActivityId,
        resources: &[ResourceId],
    ) {
        self.0.on_service_start(time, flow, activity, resources);
        self.1.on_service_start(time, flow, activity, resources);
    }

    fn on_service_end(&mut self, observation: &Observation) {
        self.0.on_service_end(observation);
        self.1.on_service_end(observation);
    }

    fn on_resource_toggle(&mut self, time: SimTime, resource: ResourceId, available: bool) {
        self.0.on_resource_toggle(time, resource, available);
        self.1.on_resource_toggle(time, resource, available);
    }

    fn on_run_end(&mut self, outcome: &RunOutcome) {
        self.0.on_run_end(outcome);
        self.1.on_run_end(outcome);
    }
}
