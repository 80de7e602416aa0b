//! Classic rules for the controlled agent.

use crate::core::agent::Position;
use crate::core::data::StateData;
use crate::core::direction::{possible_actions, ActionList, Direction};
use crate::core::error::{GameError, Result};

use super::engine::ControlledRules;

/// Eating range: Pacman consumes a grid point when this close to it.
const CONSUME_RANGE: f64 = 0.5;

/// Pacman moves on open cells, eats food and capsules on arrival.
#[derive(Clone, Copy, Debug, Default)]
pub struct PacmanRules;

impl PacmanRules {
    fn consume(data: &mut StateData, position: Position) {
        let (x, y) = (position.x as usize, position.y as usize);

        if data.food.get(x, y).copied().unwrap_or(false) {
            data.score_change += data.config().food_score;
            data.food.set(x, y, false);
            data.food_eaten = Some((x, y));
        }

        if let Some(i) = data.capsules.iter().position(|&c| c == position) {
            data.capsules.remove(i);
            data.capsule_eaten = Some(position);
            let scared_time = data.config().scared_time;
            for ghost in data.agent_states.iter_mut().skip(1) {
                ghost.scared_timer = scared_time;
            }
        }
    }
}

impl ControlledRules for PacmanRules {
    fn legal_actions(&self, data: &StateData) -> ActionList {
        possible_actions(&data.agent_states[0].configuration, data.layout().walls())
    }

    fn apply_action(&self, data: &mut StateData, action: Direction) -> Result<()> {
        if !self.legal_actions(data).contains(&action) {
            return Err(GameError::IllegalAction { action, agent_index: 0 });
        }

        let vector = action.to_vector(data.config().pacman_speed);
        let pacman = &mut data.agent_states[0];
        pacman.configuration = pacman.configuration.generate_successor(vector);

        let next = pacman.get_position();
        let nearest = next.nearest_point();
        if nearest.manhattan_distance(next) <= CONSUME_RANGE {
            Self::consume(data, nearest);
        }
        Ok(())
    }
}
