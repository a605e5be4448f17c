//! The `Simulation` struct and its decision cycle.

use lw_agent::{Action, Agent, Tally};
use lw_world::{GoalView, StatusSnapshot, World};
use tracing::info;

use crate::{ActionEngine, ActionOutcome, CycleReport, NoopObserver, SimObserver, SimResult};

/// A world, the agent acting on it, and the engine applying its actions.
///
/// The simulation owns the world exclusively, so actions are always applied
/// one at a time.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation<A: Agent> {
    pub(crate) world:  World,
    pub(crate) agent:  A,
    pub(crate) engine: ActionEngine,
    pub(crate) cycles: u64,
}

impl<A: Agent> Simulation<A> {
    // ── Decision cycle ────────────────────────────────────────────────────

    /// Run one decision cycle.
    pub fn execute(&mut self) -> SimResult<CycleReport> {
        self.execute_with(&mut NoopObserver)
    }

    /// Run one decision cycle, reporting to `observer`.
    ///
    /// A fatal error stops the cycle; actions applied before it stay applied.
    pub fn execute_with<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<CycleReport> {
        self.cycles += 1;
        let cycle = self.cycles;

        let status = self.world.status();
        observer.on_cycle_start(cycle, &status);
        let actions = self.agent.solve(status, self.world.goal_view());

        let mut report = CycleReport { cycle, ..CycleReport::default() };
        for action in &actions {
            let outcome = self.apply(action)?;
            report.count(outcome);
            observer.on_action(action, outcome, self.agent.tally());
        }

        report.tally = *self.agent.tally();
        report.goal_reached = self.world.check_goal();
        info!(
            cycle,
            actions      = report.actions(),
            applied      = report.applied,
            penalized    = report.penalized,
            score        = report.tally.score,
            moves        = report.tally.moves,
            goal_reached = report.goal_reached,
            "cycle finished"
        );
        observer.on_cycle_end(&report);
        Ok(report)
    }

    /// Apply a single action outside a decision cycle.
    pub fn apply(&mut self, action: &Action) -> SimResult<ActionOutcome> {
        self.engine.apply(&mut self.world, self.agent.tally_mut(), action)
    }

    // ── Actions ───────────────────────────────────────────────────────────

    pub fn load(&mut self, cargo: &str, airplane: &str) -> SimResult<ActionOutcome> {
        self.engine.load(&mut self.world, self.agent.tally_mut(), cargo, airplane)
    }

    pub fn unload(&mut self, cargo: &str, airplane: &str) -> SimResult<ActionOutcome> {
        self.engine.unload(&mut self.world, self.agent.tally_mut(), cargo, airplane)
    }

    pub fn move_airplane(&mut self, airplane: &str, from: &str, to: &str) -> SimResult<ActionOutcome> {
        self.engine
            .move_airplane(&mut self.world, self.agent.tally_mut(), airplane, from, to)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` when every goal clause holds.
    pub fn check_goal(&self) -> bool {
        self.world.check_goal()
    }

    pub fn status(&self) -> StatusSnapshot {
        self.world.status()
    }

    pub fn goal(&self) -> GoalView {
        self.world.goal_view()
    }

    pub fn tally(&self) -> &Tally {
        self.agent.tally()
    }

    /// `"Score of {score} in {moves} moves!"`.
    pub fn score(&self) -> String {
        self.agent.score_report()
    }

    /// Number of decision cycles started so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    pub fn agent_mut(&mut self) -> &mut A {
        &mut self.agent
    }

    pub fn engine(&self) -> &ActionEngine {
        &self.engine
    }

    /// Give back the world and agent.
    pub fn into_parts(self) -> (World, A) {
        (self.world, self.agent)
    }
}
