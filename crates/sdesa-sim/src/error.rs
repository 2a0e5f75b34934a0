use sdesa_core::{ActivityId, CoreError, FlowId};
use sdesa_entity::EntityError;
use sdesa_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// The model failed validation.  Raised by the builder before any state
    /// is created.
    #[error("invalid model: {0}")]
    InvalidModel(#[from] ModelError),

    /// The duration sampler returned a negative or non-finite value.
    #[error("activity {activity} sampled malformed duration {value} for {flow}")]
    MalformedDuration {
        activity: ActivityId,
        flow:     FlowId,
        value:    f64,
    },

    /// The router chose an activity that is not a successor of the one
    /// just completed.
    #[error("router sent {flow} from {activity} to non-successor {chosen}")]
    InvalidRoute {
        activity: ActivityId,
        chosen:   ActivityId,
        flow:     FlowId,
    },

    /// A pool or registry operation failed mid-run.  Always a defect.
    #[error("internal invariant violated: {0}")]
    Invariant(#[from] EntityError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("engine has already run; build a new one for another run")]
    AlreadyRun,
}

pub type SimResult<T> = Result<T, SimError>;
