//! The action state machine.
//!
//! Every action resolves to exactly one [`ActionOutcome`]:
//!
//! - **Penalized**: a named entity is unknown to the world.  Score changes
//!   by the penalty; nothing else happens.
//! - **Ignored**: every name is known but the action does not apply right
//!   now (box elsewhere, airplane not at `from`, airplane unplaced).
//! - **Applied**: state changed, reward credited, one move counted.
//!
//! Capacity violations and moves across missing links are errors; both are
//! detected before any state changes.

use lw_agent::{Action, Tally};
use lw_world::World;
use tracing::{debug, trace, warn};

use crate::{ScoreRules, SimError, SimResult};

/// How a single action resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied { score_delta: i64 },
    Penalized { score_delta: i64 },
    Ignored,
    /// Not a `load`/`unload`/`move`; skipped.
    Unrecognized,
}

impl ActionOutcome {
    /// Score change this outcome caused.
    pub fn score_delta(self) -> i64 {
        match self {
            ActionOutcome::Applied { score_delta } | ActionOutcome::Penalized { score_delta } => {
                score_delta
            }
            ActionOutcome::Ignored | ActionOutcome::Unrecognized => 0,
        }
    }

    pub fn is_applied(self) -> bool {
        matches!(self, ActionOutcome::Applied { .. })
    }
}

/// Applies actions to a [`World`] and records results in a [`Tally`].
#[derive(Clone, Debug, Default)]
pub struct ActionEngine {
    pub rules: ScoreRules,
}

impl ActionEngine {
    pub fn new(rules: ScoreRules) -> Self {
        Self { rules }
    }

    /// Dispatch `action` to the matching operation.
    pub fn apply(&self, world: &mut World, tally: &mut Tally, action: &Action) -> SimResult<ActionOutcome> {
        match action {
            Action::Load { cargo, airplane }    => self.load(world, tally, cargo, airplane),
            Action::Unload { cargo, airplane }  => self.unload(world, tally, cargo, airplane),
            Action::Move { airplane, from, to } => self.move_airplane(world, tally, airplane, from, to),
            Action::Other { method, .. } => {
                trace!(method = %method, "ignoring unrecognized action");
                Ok(ActionOutcome::Unrecognized)
            }
        }
    }

    /// Put `cargo` aboard `airplane` if both are at the same airport.
    pub fn load(
        &self,
        world:    &mut World,
        tally:    &mut Tally,
        cargo:    &str,
        airplane: &str,
    ) -> SimResult<ActionOutcome> {
        if !world.has_box(cargo) || !world.has_airplane(airplane) {
            return Ok(self.penalize(tally, "load", &[cargo, airplane]));
        }
        if world.board(cargo, airplane)? {
            debug!(cargo, airplane, "loaded");
            Ok(self.reward(tally, self.rules.transfer_reward))
        } else {
            trace!(cargo, airplane, "load not applicable");
            Ok(ActionOutcome::Ignored)
        }
    }

    /// Take `cargo` off `airplane` onto the ground of its airport.
    pub fn unload(
        &self,
        world:    &mut World,
        tally:    &mut Tally,
        cargo:    &str,
        airplane: &str,
    ) -> SimResult<ActionOutcome> {
        if !world.has_box(cargo) || !world.has_airplane(airplane) {
            return Ok(self.penalize(tally, "unload", &[cargo, airplane]));
        }
        if world.unboard(cargo, airplane) {
            debug!(cargo, airplane, "unloaded");
            Ok(self.reward(tally, self.rules.transfer_reward))
        } else {
            trace!(cargo, airplane, "unload not applicable");
            Ok(ActionOutcome::Ignored)
        }
    }

    /// Fly `airplane` from `from` to `to`.
    ///
    /// The reward scales with the weight `to` records for its link to `from`.
    /// A missing link is [`SimError::NoLink`].
    pub fn move_airplane(
        &self,
        world:    &mut World,
        tally:    &mut Tally,
        airplane: &str,
        from:     &str,
        to:       &str,
    ) -> SimResult<ActionOutcome> {
        if !world.has_airport(from) || !world.has_airport(to) || !world.has_airplane(airplane) {
            return Ok(self.penalize(tally, "move", &[airplane, from, to]));
        }
        if world.locate_airplane(airplane) != Some(from) {
            trace!(airplane, from, to, "move not applicable");
            return Ok(ActionOutcome::Ignored);
        }
        let weight = world
            .airport(to)
            .and_then(|airport| airport.weight_to(from))
            .ok_or_else(|| SimError::NoLink { from: from.to_owned(), to: to.to_owned() })?;

        if !world.relocate_airplane(airplane, from, to) {
            return Ok(ActionOutcome::Ignored);
        }
        debug!(airplane, from, to, weight, "moved");
        Ok(self.reward(tally, self.rules.move_reward_per_weight * i64::from(weight)))
    }

    fn reward(&self, tally: &mut Tally, reward: i64) -> ActionOutcome {
        tally.record_success(reward);
        ActionOutcome::Applied { score_delta: reward }
    }

    fn penalize(&self, tally: &mut Tally, method: &str, args: &[&str]) -> ActionOutcome {
        let penalty = self.rules.unknown_entity_penalty;
        warn!(method, ?args, penalty, "action names an unknown entity");
        tally.record_penalty(penalty);
        ActionOutcome::Penalized { score_delta: penalty }
    }
}
