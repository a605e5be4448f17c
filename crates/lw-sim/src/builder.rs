//! Fluent builder for constructing a [`Simulation`].

use std::path::Path;

use lw_agent::Agent;
use lw_world::{World, load_world_json};

use crate::{ActionEngine, ScoreRules, SimResult, Simulation};

/// Fluent builder for [`Simulation<A>`].
///
/// # Required inputs
///
/// - [`World`], usually from [`lw_world::WorldLoader`]
/// - `A: Agent`, the decision-maker
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                  |
/// |---------------|------------------------------------------|
/// | `.rules(r)`   | `ScoreRules::default()` (10 / 10 / −100) |
///
/// # Example
///
/// ```rust,ignore
/// let world = load_world_json(Path::new("world.json"))?;
/// let mut sim = SimBuilder::new(world, ScriptedAgent::new(plan)).build();
/// sim.execute()?;
/// ```
pub struct SimBuilder<A: Agent> {
    world: World,
    agent: A,
    rules: ScoreRules,
}

impl<A: Agent> SimBuilder<A> {
    pub fn new(world: World, agent: A) -> Self {
        Self { world, agent, rules: ScoreRules::default() }
    }

    /// Load the world from a JSON configuration file.
    pub fn load(path: &Path, agent: A) -> SimResult<Self> {
        Ok(Self::new(load_world_json(path)?, agent))
    }

    /// Override the scoring parameters.
    pub fn rules(mut self, rules: ScoreRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn build(self) -> Simulation<A> {
        Simulation {
            world:  self.world,
            agent:  self.agent,
            engine: ActionEngine::new(self.rules),
            cycles: 0,
        }
    }
}
