//! What a run produces: the observation log, the halt reason, and final
//! snapshots of the registry and pool.

use sdesa_core::{ActivityId, FlowId, ResourceId, SimTime};
use sdesa_entity::{FlowEntity, ResourceEntity};

// ── Observation ───────────────────────────────────────────────────────────────

/// One completed service.  The log is append-only and ordered by
/// `service_end` (ties by ascending flow id).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    pub activity:       ActivityId,
    pub flow:           FlowId,
    pub arrival:        SimTime,
    pub service_start:  SimTime,
    pub service_end:    SimTime,
    /// Every instance held over `[service_start, service_end)`.
    pub resources_held: Vec<ResourceId>,
}

impl Observation {
    #[inline]
    pub fn waiting_time(&self) -> f64 {
        self.service_start - self.arrival
    }

    #[inline]
    pub fn service_time(&self) -> f64 {
        self.service_end - self.service_start
    }
}

// ── RunOutcome ────────────────────────────────────────────────────────────────

/// Why the run stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunStatus {
    /// No flow entity is left waiting or in service.
    Completed,
    /// Nothing is pending, yet entities are still waiting: every one of them
    /// is permanently blocked.
    Drained,
    /// The next pending instant lies beyond the run limit.
    Cutoff,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOutcome {
    pub status:      RunStatus,
    pub final_clock: SimTime,
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool {
        self.status == RunStatus::Completed
    }

    pub fn is_drained(&self) -> bool {
        self.status == RunStatus::Drained
    }

    pub fn is_cutoff(&self) -> bool {
        self.status == RunStatus::Cutoff
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// A service that had started but not finished when the run halted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InProgress {
    pub flow:          FlowId,
    pub activity:      ActivityId,
    pub arrival:       SimTime,
    pub service_start: SimTime,
    /// When the service would have ended.
    pub due:           SimTime,
    pub held:          Vec<ResourceId>,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    pub outcome:        RunOutcome,
    pub observations:   Vec<Observation>,
    pub in_progress:    Vec<InProgress>,
    /// Active (waiting or in-service) flow entities at the halt.
    pub flows:          Vec<FlowEntity>,
    /// Live resource entities at the halt.
    pub resources:      Vec<ResourceEntity>,
    /// Disposable resources removed during the run, in disposal order.
    pub disposed:       Vec<ResourceEntity>,
    /// Activity names indexed by `ActivityId`.
    pub activity_names: Vec<String>,
    /// Resource type names indexed by `ResourceTypeId`.
    pub type_names:     Vec<String>,
}

impl RunReport {
    pub fn activity_name(&self, id: ActivityId) -> &str {
        self.activity_names.get(id.index()).map_or("?", String::as_str)
    }
}
