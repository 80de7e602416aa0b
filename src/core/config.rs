//! Rule constants shared by every state of a game.
//!
//! The classic values are the defaults. A `RulesConfig` is attached to the
//! state at initialization and shared (never written) by every successor.

use serde::{Deserialize, Serialize};

/// Score subtracted from every Pacman move.
pub const TIME_PENALTY: i64 = 1;

/// Scoring and movement constants consumed by the rule providers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Turns a ghost stays scared after Pacman eats a capsule.
    pub scared_time: u32,

    /// Manhattan distance at or under which Pacman and a ghost collide.
    pub collision_tolerance: f64,

    /// Score for each food pellet.
    pub food_score: i64,

    /// Bonus for clearing the board.
    pub win_bonus: i64,

    /// Score for eating a scared ghost.
    pub ghost_score: i64,

    /// Penalty for being caught.
    pub lose_penalty: i64,

    /// Cells Pacman moves per turn.
    pub pacman_speed: f64,

    /// Cells a ghost moves per turn (halved while scared).
    pub ghost_speed: f64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            scared_time: 40,
            collision_tolerance: 0.7,
            food_score: 10,
            win_bonus: 500,
            ghost_score: 200,
            lose_penalty: 500,
            pacman_speed: 1.0,
            ghost_speed: 1.0,
        }
    }
}

impl RulesConfig {
    /// Set the fright duration.
    #[must_use]
    pub fn with_scared_time(mut self, turns: u32) -> Self {
        self.scared_time = turns;
        self
    }

    /// Set the collision distance.
    #[must_use]
    pub fn with_collision_tolerance(mut self, tolerance: f64) -> Self {
        self.collision_tolerance = tolerance;
        self
    }

    /// Set the per-pellet score.
    #[must_use]
    pub fn with_food_score(mut self, score: i64) -> Self {
        self.food_score = score;
        self
    }

    /// Set win bonus and lose penalty together.
    #[must_use]
    pub fn with_terminal_scores(mut self, win_bonus: i64, lose_penalty: i64) -> Self {
        self.win_bonus = win_bonus;
        self.lose_penalty = lose_penalty;
        self
    }

    /// Set the scared-ghost capture score.
    #[must_use]
    pub fn with_ghost_score(mut self, score: i64) -> Self {
        self.ghost_score = score;
        self
    }

    /// Set the ghost base speed.
    #[must_use]
    pub fn with_ghost_speed(mut self, speed: f64) -> Self {
        self.ghost_speed = speed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RulesConfig::default();
        assert_eq!(config.scared_time, 40);
        assert!((config.collision_tolerance - 0.7).abs() < 1e-9);
        assert_eq!(config.food_score, 10);
        assert_eq!(config.win_bonus, 500);
        assert_eq!(config.lose_penalty, 500);
        assert_eq!(config.ghost_score, 200);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RulesConfig::default()
            .with_scared_time(10)
            .with_food_score(1)
            .with_terminal_scores(100, 50)
            .with_ghost_speed(0.5);

        assert_eq!(config.scared_time, 10);
        assert_eq!(config.food_score, 1);
        assert_eq!(config.win_bonus, 100);
        assert_eq!(config.lose_penalty, 50);
        assert!((config.ghost_speed - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_serialization() {
        let config = RulesConfig::default().with_scared_time(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
