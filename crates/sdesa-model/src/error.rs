use sdesa_core::{ActivityId, ResourceTypeId};
use thiserror::Error;

/// Errors in a model definition.  All of them are detectable before a run
/// starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("activity {activity:?} names undeclared successor {successor}")]
    UndeclaredSuccessor {
        activity:  String,
        successor: ActivityId,
    },

    #[error("activity {activity:?} references undeclared resource type {kind}")]
    UndeclaredResourceType {
        activity: String,
        kind:     ResourceTypeId,
    },

    #[error("activity {activity:?} releases {kind:?} more times than it requires it")]
    ReleasedNotRequired { activity: String, kind: String },

    #[error("activity {0:?} was declared but never defined")]
    UndefinedActivity(String),

    #[error("activity {0:?} is already defined")]
    AlreadyDefined(String),

    #[error("{0} is not a declared activity")]
    UnknownActivity(ActivityId),

    #[error("flow entity {flow:?} starts at undeclared activity {activity}")]
    UnknownStartActivity { flow: String, activity: ActivityId },

    #[error("resource {resource:?} has undeclared type {kind}")]
    UnknownResourceType { resource: String, kind: ResourceTypeId },

    #[error("too many {0}: id space exhausted")]
    CapacityExceeded(&'static str),

    #[error("invalid distribution parameters: {0}")]
    Distribution(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
