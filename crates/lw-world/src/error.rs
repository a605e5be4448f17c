//! World construction error type.

use lw_core::CoreError;
use thiserror::Error;

/// Fatal errors raised while building a [`World`][crate::World].
///
/// None of these are recoverable by the simulator: the caller must fix the
/// input and load again.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("unknown airport {0:?}")]
    UnknownAirport(String),

    #[error("box {0:?} is unknown or already assigned")]
    BoxAlreadyAssigned(String),

    #[error("airplane {0:?} is unknown or already assigned")]
    AirplaneAlreadyAssigned(String),

    #[error("entity name {0:?} is used more than once")]
    DuplicateName(String),

    #[error("link {from:?} -> {to:?} must have a positive weight")]
    InvalidWeight { from: String, to: String },

    #[error("malformed goal clause {0:?}: expected \"obj1, obj2 in location\"")]
    GoalSyntax(String),

    #[error("goal not plausible: {object:?} is required in both {first:?} and {second:?}")]
    GoalNotPlausible {
        object: String,
        first:  String,
        second: String,
    },

    #[error(transparent)]
    Capacity(#[from] CoreError),

    #[error("configuration parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
