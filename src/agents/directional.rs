use crate::core::{Direction, GameRng, GameState};

use super::Agent;

/// Ghost that usually closes in on Pacman, and usually runs while scared.
///
/// With probability `prob_attack` (or `prob_scared_flee` while scared) the
/// ghost takes one of the actions whose next position is best by Manhattan
/// distance to Pacman; the rest of the mass is spread over all legal
/// actions.
#[derive(Clone, Debug)]
pub struct DirectionalGhost {
    index: usize,
    rng: GameRng,
    prob_attack: f64,
    prob_scared_flee: f64,
}

impl DirectionalGhost {
    /// Create a directional ghost with the classic 0.8 / 0.8 probabilities.
    #[must_use]
    pub fn new(index: usize, rng: GameRng) -> Self {
        Self {
            index,
            rng,
            prob_attack: 0.8,
            prob_scared_flee: 0.8,
        }
    }

    /// Set the attack and flee probabilities.
    #[must_use]
    pub fn with_probabilities(mut self, prob_attack: f64, prob_scared_flee: f64) -> Self {
        self.prob_attack = prob_attack;
        self.prob_scared_flee = prob_scared_flee;
        self
    }

    /// Probability of each legal action, aligned with `get_legal_actions`.
    #[must_use]
    pub fn distribution(&self, state: &GameState) -> Vec<(Direction, f64)> {
        let (Ok(ghost), Ok(legal)) = (state.get_ghost_state(self.index), state.get_legal_actions(self.index)) else {
            return Vec::new();
        };
        if legal.is_empty() {
            return Vec::new();
        }

        let scared = ghost.is_scared();
        let mut speed = state.data().config().ghost_speed;
        if scared {
            speed /= 2.0;
        }

        let pacman = state.get_pacman_position();
        let distances: Vec<f64> = legal
            .iter()
            .map(|a| ghost.get_position().offset(a.to_vector(speed)).manhattan_distance(pacman))
            .collect();

        let (best_score, best_prob) = if scared {
            (distances.iter().copied().fold(f64::MIN, f64::max), self.prob_scared_flee)
        } else {
            (distances.iter().copied().fold(f64::MAX, f64::min), self.prob_attack)
        };
        let best_count = distances.iter().filter(|&&d| d == best_score).count() as f64;
        let uniform = (1.0 - best_prob) / legal.len() as f64;

        let mut dist: Vec<(Direction, f64)> = legal
            .iter()
            .zip(&distances)
            .map(|(&action, &d)| {
                let bonus = if d == best_score { best_prob / best_count } else { 0.0 };
                (action, bonus + uniform)
            })
            .collect();

        let total: f64 = dist.iter().map(|(_, p)| p).sum();
        if total > 0.0 {
            dist.iter_mut().for_each(|(_, p)| *p /= total);
        }
        dist
    }
}

impl Agent for DirectionalGhost {
    fn index(&self) -> usize {
        self.index
    }

    fn get_action(&mut self, state: &GameState) -> Option<Direction> {
        let dist = self.distribution(state);
        let weights: Vec<f64> = dist.iter().map(|&(_, p)| p).collect();
        let choice = self.rng.choose_weighted(&weights)?;
        Some(dist[choice].0)
    }
}
