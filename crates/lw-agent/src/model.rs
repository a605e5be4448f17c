//! The `Agent` trait: the extension point for decision-makers.

use lw_world::{GoalView, StatusSnapshot};

use crate::{Action, Tally};

/// Pluggable decision-maker.
///
/// Each decision cycle the simulator calls [`solve`](Self::solve) once with
/// an owned snapshot of the world and the goal, then applies the returned
/// actions in order.  Outcomes are recorded in the agent's [`Tally`].
///
/// The snapshot and goal view are copies; changing them has no effect on the
/// simulation.
///
/// # Example
///
/// ```rust,ignore
/// struct LoadEverything { tally: Tally }
///
/// impl Agent for LoadEverything {
///     fn solve(&mut self, status: StatusSnapshot, _goal: GoalView) -> Vec<Action> {
///         status.airports.values()
///             .flat_map(|airport| airport.airplanes.keys()
///                 .flat_map(|plane| airport.boxes.iter()
///                     .map(move |cargo| Action::load(cargo.clone(), plane.clone()))))
///             .collect()
///     }
///     fn tally(&self) -> &Tally { &self.tally }
///     fn tally_mut(&mut self) -> &mut Tally { &mut self.tally }
/// }
/// ```
pub trait Agent {
    /// Decide what to do given the current world state and goal.
    fn solve(&mut self, status: StatusSnapshot, goal: GoalView) -> Vec<Action>;

    /// Score and move count so far.
    fn tally(&self) -> &Tally;

    /// Mutable access for the simulator.
    fn tally_mut(&mut self) -> &mut Tally;

    /// Human-readable `"Score of {score} in {moves} moves!"`.
    fn score_report(&self) -> String {
        self.tally().to_string()
    }
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn solve(&mut self, status: StatusSnapshot, goal: GoalView) -> Vec<Action> {
        (**self).solve(status, goal)
    }

    fn tally(&self) -> &Tally {
        (**self).tally()
    }

    fn tally_mut(&mut self) -> &mut Tally {
        (**self).tally_mut()
    }
}
