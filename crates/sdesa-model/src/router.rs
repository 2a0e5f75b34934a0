//! Routing decisions: which successors a completed flow entity moves on to.

use sdesa_core::ActivityId;
use sdesa_entity::FlowEntity;

use crate::Activity;

/// Decides where a flow entity goes when `completed` finishes.
///
/// The engine spawns one new flow entity per returned id, in the returned
/// order.  Every id must be one of `completed.successors`; returning anything
/// else aborts the run.  An empty result ends the entity's route.
///
/// # Example: send every third truck to the wash bay
///
/// ```rust,ignore
/// struct EveryThird { count: u64, wash: ActivityId }
///
/// impl Router for EveryThird {
///     fn route(&mut self, completed: &Activity, _flow: &FlowEntity) -> Vec<ActivityId> {
///         self.count += 1;
///         if self.count % 3 == 0 { vec![self.wash] } else { completed.successors.clone() }
///     }
/// }
/// ```
pub trait Router: Send {
    fn route(&mut self, completed: &Activity, flow: &FlowEntity) -> Vec<ActivityId>;
}

/// Spawns every successor: the default routing.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllSuccessors;

impl Router for AllSuccessors {
    #[inline]
    fn route(&mut self, completed: &Activity, _flow: &FlowEntity) -> Vec<ActivityId> {
        completed.successors.clone()
    }
}
