//! Plain data row types written by output backends.

use sdesa_sim::Observation;

/// One completed service.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRow {
    pub activity_id:   u16,
    pub flow_id:       u32,
    pub arrival:       f64,
    pub service_start: f64,
    pub service_end:   f64,
    pub waiting_time:  f64,
    pub service_time:  f64,
    /// Held resource ids joined with `;`.
    pub resources:     String,
}

impl From<&Observation> for ObservationRow {
    fn from(o: &Observation) -> Self {
        Self {
            activity_id:   o.activity.0,
            flow_id:       o.flow.0,
            arrival:       o.arrival.as_f64(),
            service_start: o.service_start.as_f64(),
            service_end:   o.service_end.as_f64(),
            waiting_time:  o.waiting_time(),
            service_time:  o.service_time(),
            resources:     o
                .resources_held
                .iter()
                .map(|r| r.0.to_string())
                .collect::<Vec<_>>()
                .join(";"),
        }
    }
}

/// Busy time and utilization of one resource over a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRow {
    pub resource_id: u32,
    pub label:       String,
    pub kind:        String,
    pub uses:        u64,
    pub busy_time:   f64,
    pub utilization: f64,
    /// `false` once the resource has been disposed.
    pub live:        bool,
}
