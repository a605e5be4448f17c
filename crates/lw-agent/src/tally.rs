//! Running score and move counter.

use std::fmt;

/// An agent's score and the number of successful actions so far.
///
/// Both start at zero.  Only successful actions count as moves; penalties
/// change the score alone.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub score: i64,
    pub moves: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a successful action.
    #[inline]
    pub fn record_success(&mut self, reward: i64) {
        self.score += reward;
        self.moves += 1;
    }

    /// Apply a penalty without counting a move.
    #[inline]
    pub fn record_penalty(&mut self, penalty: i64) {
        self.score += penalty;
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score of {} in {} moves!", self.score, self.moves)
    }
}
