//! `lw-agent` — what a decision-maker must implement.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`action`]   | `Action` enum (`Load`, `Unload`, `Move`, `Other`)           |
//! | [`tally`]    | `Tally`, the running score and move counter                 |
//! | [`model`]    | `Agent` trait                                               |
//! | [`scripted`] | `ScriptedAgent`, replays a fixed action list once           |
//! | [`noop`]     | `NoopAgent`, never acts                                     |
//! | [`error`]    | `ActionError`, `ActionResult<T>`                            |
//!
//! # Decision cycle
//!
//! The simulator hands the agent an owned `StatusSnapshot` and `GoalView`,
//! receives a `Vec<Action>`, and applies the actions in order.  The agent's
//! [`Tally`] is updated by the simulator as each action resolves.

pub mod action;
pub mod error;
pub mod model;
pub mod noop;
pub mod scripted;
pub mod tally;


pub use action::Action;
pub use error::{ActionError, ActionResult};
pub use model::Agent;
pub use noop::NoopAgent;
pub use scripted::ScriptedAgent;
pub use tally::Tally;
