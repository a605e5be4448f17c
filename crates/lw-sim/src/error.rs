use lw_core::CoreError;
use lw_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("capacity violated during action: {0}")]
    Capacity(#[from] CoreError),

    #[error("no link from {from:?} to {to:?}")]
    NoLink { from: String, to: String },

    #[error("world error: {0}")]
    World(#[from] WorldError),
}

pub type SimResult<T> = Result<T, SimError>;
