//! An agent that never acts.

use lw_world::{GoalView, StatusSnapshot};

use crate::{Action, Agent, Tally};

/// An [`Agent`] whose plan is always empty.  Useful as a placeholder in tests.
#[derive(Debug, Default)]
pub struct NoopAgent {
    tally: Tally,
}

impl Agent for NoopAgent {
    fn solve(&mut self, _status: StatusSnapshot, _goal: GoalView) -> Vec<Action> {
        vec![]
    }

    fn tally(&self) -> &Tally {
        &self.tally
    }

    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }
}
