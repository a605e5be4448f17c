//! `lw-sim` — applies agent actions to a world and keeps score.
//!
//! # Decision cycle
//!
//! ```text
//! Simulation::execute():
//!   ① Snapshot   World::status() and World::goal_view() (owned copies).
//!   ② Solve      Agent::solve(status, goal) → Vec<Action>.
//!   ③ Apply      in the order returned:
//!                   Load / Unload / Move → ActionEngine, tally updated
//!                   Other                → ignored
//! ```
//!
//! One call is one cycle.  Callers that want more cycles call `execute`
//! again, typically until [`Simulation::check_goal`] holds.
//!
//! # Outcomes
//!
//! | Situation                                     | Score            | Moves |
//! |-----------------------------------------------|------------------|-------|
//! | success                                       | +reward          | +1    |
//! | a named box/airplane/airport does not exist   | penalty (-100)   | 0     |
//! | entities exist but the action is inapplicable | 0                | 0     |
//! | airplane full, or no link between airports    | fatal `SimError` |       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lw_agent::{Action, ScriptedAgent};
//! use lw_sim::{SimBuilder, NoopObserver};
//!
//! let agent = ScriptedAgent::new(vec![Action::load("Box_1", "Airplane_1")]);
//! let mut sim = SimBuilder::load(Path::new("world.json"), agent)?.build();
//! sim.execute()?;
//! println!("{}", sim.score());
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod rules;
pub mod sim;


pub use builder::SimBuilder;
pub use engine::{ActionEngine, ActionOutcome};
pub use error::{SimError, SimResult};
pub use observer::{CycleReport, NoopObserver, SimObserver};
pub use rules::ScoreRules;
pub use sim::Simulation;
