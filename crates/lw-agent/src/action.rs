//! Actions an agent can ask the simulator to perform.

use std::fmt;

use crate::{ActionError, ActionResult};

/// One step of an agent's plan.
///
/// Produced by [`Agent::solve`][crate::Agent::solve] and applied by the
/// simulator in the order returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Put `cargo` aboard `airplane`; both must be at the same airport.
    Load { cargo: String, airplane: String },

    /// Take `cargo` off `airplane` onto the ground of its airport.
    Unload { cargo: String, airplane: String },

    /// Fly `airplane` from `from` to the neighboring airport `to`.
    Move { airplane: String, from: String, to: String },

    /// Any other method name.  The simulator ignores these.
    Other { method: String, args: Vec<String> },
}

impl Action {
    pub fn load(cargo: impl Into<String>, airplane: impl Into<String>) -> Self {
        Action::Load { cargo: cargo.into(), airplane: airplane.into() }
    }

    pub fn unload(cargo: impl Into<String>, airplane: impl Into<String>) -> Self {
        Action::Unload { cargo: cargo.into(), airplane: airplane.into() }
    }

    pub fn fly(
        airplane: impl Into<String>,
        from:     impl Into<String>,
        to:       impl Into<String>,
    ) -> Self {
        Action::Move { airplane: airplane.into(), from: from.into(), to: to.into() }
    }

    /// Build an action from a `(method, args…)` call.
    ///
    /// `load`, `unload` and `move` must receive exactly their argument count;
    /// any other method name becomes [`Action::Other`].
    pub fn from_call<S: AsRef<str>>(method: &str, args: &[S]) -> ActionResult<Self> {
        let arg = |i: usize| args[i].as_ref().to_owned();
        let arity = |method: &'static str, expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(ActionError::Arity { method, expected, got: args.len() })
            }
        };

        match method {
            "load" => {
                arity("load", 2)?;
                Ok(Action::load(arg(0), arg(1)))
            }
            "unload" => {
                arity("unload", 2)?;
                Ok(Action::unload(arg(0), arg(1)))
            }
            "move" => {
                arity("move", 3)?;
                Ok(Action::fly(arg(0), arg(1), arg(2)))
            }
            other => Ok(Action::Other {
                method: other.to_owned(),
                args:   args.iter().map(|a| a.as_ref().to_owned()).collect(),
            }),
        }
    }

    /// The method name this action was (or would be) called by.
    pub fn method(&self) -> &str {
        match self {
            Action::Load { .. }          => "load",
            Action::Unload { .. }        => "unload",
            Action::Move { .. }          => "move",
            Action::Other { method, .. } => method,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Load { cargo, airplane } | Action::Unload { cargo, airplane } => {
                write!(f, "{}({cargo}, {airplane})", self.method())
            }
            Action::Move { airplane, from, to } => write!(f, "move({airplane}, {from}, {to})"),
            Action::Other { method, args } => write!(f, "{method}({})", args.join(", ")),
        }
    }
}
