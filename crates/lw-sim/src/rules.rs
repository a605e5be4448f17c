//! Scoring parameters.

/// Score deltas applied by the [`ActionEngine`][crate::ActionEngine].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScoreRules {
    /// Reward for a successful load or unload.
    pub transfer_reward: i64,

    /// Reward per unit of link weight for a successful move.
    pub move_reward_per_weight: i64,

    /// Score delta when an action names an entity that does not exist.
    pub unknown_entity_penalty: i64,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            transfer_reward:        10,
            move_reward_per_weight: 10,
            unknown_entity_penalty: -100,
        }
    }
}
