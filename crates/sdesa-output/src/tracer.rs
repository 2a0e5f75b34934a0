//! `TracingObserver`: forwards engine hooks to the `tracing` crate.
//!
//! Levels: `info` at run start and end, `debug` per service start and end,
//! `trace` per clock advance and resource toggle.  Install any subscriber
//! (e.g. `tracing-subscriber` with `RUST_LOG=sdesa=debug`) to see them.

use sdesa_core::{ActivityId, FlowId, ResourceId, SimTime};
use sdesa_sim::{Observation, RunOutcome, SimObserver};
use tracing::{debug, info, trace};

#[derive(Debug, Default)]
pub struct TracingObserver {
    completed: u64,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SimObserver for TracingObserver {
    fn on_run_start(&mut self, start: SimTime, limit: Option<SimTime>) {
        info!(target: "sdesa", start = start.as_f64(), limit = ?limit.map(SimTime::as_f64), "run started");
    }

    fn on_clock_advance(&mut self, from: SimTime, to: SimTime) {
        trace!(target: "sdesa", from = from.as_f64(), to = to.as_f64(), "clock advanced");
    }

    fn on_service_start(
        &mut self,
        time:      SimTime,
        flow:      FlowId,
        activity:  ActivityId,
        resources: &[ResourceId],
    ) {
        debug!(
            target: "sdesa",
            t = time.as_f64(),
            flow = flow.0,
            activity = activity.0,
            resources = ?resources.iter().map(|r| r.0).collect::<Vec<_>>(),
            "service started"
        );
    }

    fn on_service_end(&mut self, o: &Observation) {
        self.completed += 1;
        debug!(
            target: "sdesa",
            t = o.service_end.as_f64(),
            flow = o.flow.0,
            activity = o.activity.0,
            waited = o.waiting_time(),
            served = o.service_time(),
            "service ended"
        );
    }

    fn on_resource_toggle(&mut self, time: SimTime, resource: ResourceId, available: bool) {
        trace!(target: "sdesa", t = time.as_f64(), resource = resource.0, available, "resource toggled");
    }

    fn on_run_end(&mut self, outcome: &RunOutcome) {
        info!(
            target: "sdesa",
            status = ?outcome.status,
            final_clock = outcome.final_clock.as_f64(),
            completed = self.completed,
            "run ended"
        );
    }
}
