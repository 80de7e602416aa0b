use crate::core::{Direction, GameRng, GameState};

use super::Agent;

/// Picks uniformly among legal actions.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    index: usize,
    rng: GameRng,
}

impl RandomAgent {
    /// Create a random agent for `index`.
    #[must_use]
    pub fn new(index: usize, rng: GameRng) -> Self {
        Self { index, rng }
    }
}

impl Agent for RandomAgent {
    fn index(&self) -> usize {
        self.index
    }

    fn get_action(&mut self, state: &GameState) -> Option<Direction> {
        let legal = state.get_legal_actions(self.index).ok()?;
        self.rng.choose(&legal).copied()
    }
}
