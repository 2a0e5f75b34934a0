use sdesa_core::{FlowId, ResourceId, SimTime};
use thiserror::Error;

/// Store invariant violations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EntityError {
    #[error("{0} not found")]
    UnknownFlow(FlowId),

    #[error("{0} not found (never created or already disposed)")]
    UnknownResource(ResourceId),

    #[error("{0} is not waiting to begin service")]
    FlowNotWaiting(FlowId),

    #[error("{0} is not in service")]
    FlowNotInService(FlowId),

    #[error("{flow} cannot start at {start}, before its arrival at {arrival}")]
    StartBeforeArrival {
        flow:    FlowId,
        start:   SimTime,
        arrival: SimTime,
    },

    #[error("{0} is not held by any flow entity")]
    NotHeld(ResourceId),

    #[error("{resource} is held by {holder}, not {expected}")]
    HeldByOther {
        resource: ResourceId,
        holder:   FlowId,
        expected: FlowId,
    },

    #[error("too many {0}: id space exhausted")]
    CapacityExceeded(&'static str),
}

pub type EntityResult<T> = Result<T, EntityError>;
