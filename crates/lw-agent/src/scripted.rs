//! An agent that replays a fixed list of actions.

use lw_world::{GoalView, StatusSnapshot};

use crate::{Action, ActionResult, Agent, Tally};

/// Returns its whole script on the first cycle and nothing afterwards.
///
/// The last status and goal it was shown are kept for inspection.
#[derive(Debug, Default)]
pub struct ScriptedAgent {
    script:    Vec<Action>,
    tally:     Tally,
    last_seen: Option<(StatusSnapshot, GoalView)>,
}

impl ScriptedAgent {
    pub fn new(script: Vec<Action>) -> Self {
        Self { script, ..Self::default() }
    }

    /// Build the script from `(method, args)` calls.
    pub fn from_calls<'a, I>(calls: I) -> ActionResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let script = calls
            .into_iter()
            .map(|(method, args)| Action::from_call(method, args))
            .collect::<ActionResult<_>>()?;
        Ok(Self::new(script))
    }

    /// Actions not yet handed out.
    pub fn remaining(&self) -> &[Action] {
        &self.script
    }

    pub fn last_status(&self) -> Option<&StatusSnapshot> {
        self.last_seen.as_ref().map(|(status, _)| status)
    }

    pub fn last_goal(&self) -> Option<&GoalView> {
        self.last_seen.as_ref().map(|(_, goal)| goal)
    }
}

impl Agent for ScriptedAgent {
    fn solve(&mut self, status: StatusSnapshot, goal: GoalView) -> Vec<Action> {
        self.last_seen = Some((status, goal));
        std::mem::take(&mut self.script)
    }

    fn tally(&self) -> &Tally {
        &self.tally
    }

    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }
}
