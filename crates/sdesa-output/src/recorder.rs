//! `ObservationRecorder`: keeps its own copy of the observation log.

use sdesa_core::{ActivityId, FlowId, ResourceId, SimTime};
use sdesa_sim::{Observation, RunOutcome, SimObserver};

/// Collects every [`Observation`] plus a few run-level counters.
///
/// Useful alongside a streaming writer, or in tests, when the caller wants
/// the log without holding on to the `RunReport`.
#[derive(Debug, Default)]
pub struct ObservationRecorder {
    pub observations: Vec<Observation>,
    pub starts:       u64,
    pub toggles:      u64,
    pub outcome:      Option<RunOutcome>,
}

impl ObservationRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observations for one activity, in log order.
    pub fn for_activity(&self, activity: ActivityId) -> impl Iterator<Item = &Observation> + '_ {
        self.observations.iter().filter(move |o| o.activity == activity)
    }

    /// Observations of one flow entity, in log order.
    pub fn for_flow(&self, flow: FlowId) -> impl Iterator<Item = &Observation> + '_ {
        self.observations.iter().filter(move |o| o.flow == flow)
    }
}

impl SimObserver for ObservationRecorder {
    fn on_service_start(&mut self, _: SimTime, _: FlowId, _: ActivityId, _: &[ResourceId]) {
        self.starts += 1;
    }

    fn on_service_end(&mut self, observation: &Observation) {
        self.observations.push(observation.clone());
    }

    fn on_resource_toggle(&mut self, _: SimTime, _: ResourceId, _: bool) {
        self.toggles += 1;
    }

    fn on_run_end(&mut self, outcome: &RunOutcome) {
        self.outcome = Some(*outcome);
    }
}
