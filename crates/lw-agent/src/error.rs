use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("{method} takes {expected} arguments, got {got}")]
    Arity {
        method:   &'static str,
        expected: usize,
        got:      usize,
    },
}

pub type ActionResult<T> = Result<T, ActionError>;
