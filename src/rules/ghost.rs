//! Classic rules for ghosts, and the collision / board-clear check that
//! runs after every move.

use crate::core::agent::AgentState;
use crate::core::data::{Outcome, StateData};
use crate::core::direction::{possible_actions, ActionList, Direction};
use crate::core::error::{GameError, Result};

use super::engine::AdversaryRules;

/// Ghosts never stop and only reverse at dead ends.
#[derive(Clone, Copy, Debug, Default)]
pub struct GhostRules;

impl GhostRules {
    fn can_kill(data: &StateData, ghost: &AgentState) -> bool {
        ghost.get_position().manhattan_distance(data.pacman_position()) <= data.config().collision_tolerance
    }

    fn collide(data: &mut StateData, agent_index: usize) {
        if data.agent_states[agent_index].is_scared() {
            data.score_change += data.config().ghost_score;
            let ghost = &mut data.agent_states[agent_index];
            ghost.configuration = ghost.start;
            ghost.scared_timer = 0;
            data.eaten[agent_index] = true;
            log::trace!("ghost {} eaten", agent_index);
        } else if data.outcome() != Outcome::Win {
            // Every dangerous ghost in reach charges the penalty.
            data.score_change -= data.config().lose_penalty;
            data.set_lose();
        }
    }

    /// Pacman just ate the last pellet.
    fn check_board_cleared(data: &mut StateData) {
        if data.food_eaten.is_some() && data.food.count() == 0 && data.set_win() {
            data.score_change += data.config().win_bonus;
        }
    }
}

impl AdversaryRules for GhostRules {
    fn legal_actions(&self, data: &StateData, agent_index: usize) -> ActionList {
        let config = &data.agent_states[agent_index].configuration;
        let mut actions = possible_actions(config, data.layout().walls());
        actions.retain(|a| *a != Direction::Stop);

        let reverse = config.direction.reverse();
        if actions.len() > 1 {
            actions.retain(|a| *a != reverse);
        }
        actions
    }

    fn apply_action(&self, data: &mut StateData, action: Direction, agent_index: usize) -> Result<()> {
        if !self.legal_actions(data, agent_index).contains(&action) {
            return Err(GameError::IllegalAction { action, agent_index });
        }

        let mut speed = data.config().ghost_speed;
        let ghost = &mut data.agent_states[agent_index];
        if ghost.is_scared() {
            speed /= 2.0;
        }
        ghost.configuration = ghost.configuration.generate_successor(action.to_vector(speed));
        Ok(())
    }

    fn decrement_timer(&self, agent: &mut AgentState) {
        if agent.scared_timer == 1 {
            agent.configuration.pos = agent.configuration.pos.nearest_point();
        }
        agent.scared_timer = agent.scared_timer.saturating_sub(1);
    }

    fn check_death(&self, data: &mut StateData, agent_index: usize) {
        if agent_index == 0 {
            Self::check_board_cleared(data);
            for index in 1..data.agent_states.len() {
                if Self::can_kill(data, &data.agent_states[index]) {
                    Self::collide(data, index);
                }
            }
        } else if Self::can_kill(data, &data.agent_states[agent_index]) {
            Self::collide(data, agent_index);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::agent::Position;
    use crate::core::config::RulesConfig;
    use crate::core::data::MAX_GHOSTS;
    use crate::core::layout::Layout;

    fn data(text: &str) -> StateData {
        let layout: Layout = text.parse().unwrap();
        let mut data = StateData::default();
        data.initialize(Arc::new(layout), MAX_GHOSTS, Arc::new(RulesConfig::default()));
        data
    }

    #[test]
    fn test_legal_actions_no_stop() {
        let data = data("%%%%%\n%P G%\n%%%%%");
        let actions = GhostRules.legal_actions(&data, 1);
        assert_eq!(actions.as_slice(), &[Direction::West]);
    }

    #[test]
    fn test_legal_actions_no_reverse() {
        let mut data = data("%%%%%%%\n%P G  %\n%%%%%%%");
        data.agent_states[1].configuration.direction = Direction::West;

        let actions = GhostRules.legal_actions(&data, 1);
        assert_eq!(actions.as_slice(), &[Direction::West]);
    }

    #[test]
    fn test_legal_actions_dead_end_reverses() {
        let mut data = data("%%%%%%\n%P  G%\n%%%%%%");
        data.agent_states[1].configuration.direction = Direction::East;

        let actions = GhostRules.legal_actions(&data, 1);
        assert_eq!(actions.as_slice(), &[Direction::West]);
    }

    #[test]
    fn test_scared_ghost_half_speed() {
        let mut data = data("%%%%%%\n%P  G%\n%%%%%%");
        data.agent_states[1].scared_timer = 3;

        GhostRules.apply_action(&mut data, Direction::West, 1).unwrap();
        assert_eq!(data.agent_states[1].get_position(), Position::new(3.5, 1.0));

        // Mid-move, the only option is to keep going.
        assert_eq!(GhostRules.legal_actions(&data, 1).as_slice(), &[Direction::West]);
    }

    #[test]
    fn test_decrement_timer_snaps_on_last_tick() {
        let mut data = data("%%%%%%\n%P  G%\n%%%%%%");
        let ghost = &mut data.agent_states[1];
        ghost.scared_timer = 1;
        ghost.configuration.pos = Position::new(3.5, 1.0);

        GhostRules.decrement_timer(ghost);
        assert_eq!(ghost.scared_timer, 0);
        assert_eq!(ghost.get_position(), Position::new(4.0, 1.0));

        GhostRules.decrement_timer(ghost);
        assert_eq!(ghost.scared_timer, 0);
    }

    #[test]
    fn test_collision_loses() {
        let mut data = data("%%%%\n%PG%\n%%%%");
        data.agent_states[1].configuration.pos = Position::new(1.5, 1.0);

        GhostRules.check_death(&mut data, 1);

        assert_eq!(data.outcome(), Outcome::Lose);
        assert_eq!(data.score_change, -500);
    }

    #[test]
    fn test_collision_with_scared_ghost_eats_it() {
        let mut data = data("%%%%%\n%P G%\n%%%%%");
        data.agent_states[1].scared_timer = 10;
        data.agent_states[1].configuration.pos = Position::new(1.0, 1.0);

        GhostRules.check_death(&mut data, 0);

        assert_eq!(data.outcome(), Outcome::Active);
        assert_eq!(data.score_change, 200);
        assert!(data.eaten[1]);
        assert_eq!(data.agent_states[1].get_position(), Position::new(3.0, 1.0));
        assert_eq!(data.agent_states[1].scared_timer, 0);
    }

    #[test]
    fn test_board_cleared_wins_over_collision() {
        let mut data = data("%%%%\n%PG%\n%%%%");
        data.food_eaten = Some((1, 1));
        data.agent_states[1].configuration.pos = Position::new(1.5, 1.0);

        GhostRules.check_death(&mut data, 0);

        assert_eq!(data.outcome(), Outcome::Win);
        assert_eq!(data.score_change, 500);
    }

    #[test]
    fn test_two_ghosts_both_charge() {
        let mut data = data("%%%%%\n%GPG%\n%%%%%");
        for ghost in &mut data.agent_states[1..] {
            ghost.configuration.pos = Position::new(2.0, 1.0);
        }

        GhostRules.check_death(&mut data, 0);

        assert_eq!(data.outcome(), Outcome::Lose);
        assert_eq!(data.score_change, -1000);
    }

    #[test]
    fn test_no_win_without_eating() {
        let mut data = data("%%%%%%\n%P  G%\n%%%%%%");

        GhostRules.check_death(&mut data, 0);

        assert_eq!(data.outcome(), Outcome::Active);
        assert_eq!(data.score_change, 0);
    }
}
