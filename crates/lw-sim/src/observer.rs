//! Observer trait for progress reporting and action auditing.

use lw_agent::{Action, Tally};
use lw_world::StatusSnapshot;

use crate::ActionOutcome;

/// Per-cycle summary returned by [`Simulation::execute`][crate::Simulation::execute].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// 1-based index of the cycle.
    pub cycle:        u64,
    pub applied:      usize,
    pub penalized:    usize,
    pub ignored:      usize,
    pub unrecognized: usize,
    /// Tally after the last action of the cycle.
    pub tally:        Tally,
    /// Whether the goal held once the cycle finished.
    pub goal_reached: bool,
}

impl CycleReport {
    pub(crate) fn count(&mut self, outcome: ActionOutcome) {
        match outcome {
            ActionOutcome::Applied { .. }   => self.applied += 1,
            ActionOutcome::Penalized { .. } => self.penalized += 1,
            ActionOutcome::Ignored          => self.ignored += 1,
            ActionOutcome::Unrecognized     => self.unrecognized += 1,
        }
    }

    /// Total number of actions the agent returned.
    pub fn actions(&self) -> usize {
        self.applied + self.penalized + self.ignored + self.unrecognized
    }
}

/// Callbacks invoked by [`Simulation::execute_with`][crate::Simulation::execute_with].
///
/// All methods default to no-ops.  Since penalties and no-ops are otherwise
/// visible only through the tally, `on_action` is the place to audit them.
///
/// # Example: outcome printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_action(&mut self, action: &Action, outcome: ActionOutcome, tally: &Tally) {
///         println!("{action}: {outcome:?} -> {tally}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after the snapshot is taken, before the agent solves.
    fn on_cycle_start(&mut self, _cycle: u64, _status: &StatusSnapshot) {}

    /// Called once per action, after it resolved.
    fn on_action(&mut self, _action: &Action, _outcome: ActionOutcome, _tally: &Tally) {}

    /// Called after every action of the cycle was applied.
    fn on_cycle_end(&mut self, _report: &CycleReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
