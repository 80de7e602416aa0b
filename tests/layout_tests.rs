//! Layout parsing, state initialization and occupancy matrices.

use std::sync::Arc;

use pacman_core::{Direction, GameError, GameState, Layout, Position, RulesConfig, MAX_GHOSTS};

const MAZE: &str = "\
%%%%%%%%%%
%P...o...%
%.%%.%%%.%
%.%G...%.%
%...%%..G%
%o.......%
%%%%%%%%%%";

fn maze() -> Arc<Layout> {
    Arc::new(MAZE.parse().unwrap())
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_initial_state_mirrors_layout() {
    let layout = maze();
    let state = GameState::from_layout(layout.clone(), MAX_GHOSTS);

    assert_eq!(state.get_num_food(), 26);
    assert_eq!(state.get_food(), layout.food());
    assert_eq!(
        state.get_capsules(),
        &[Position::new(5.0, 5.0), Position::new(1.0, 1.0)]
    );
    assert_eq!(state.get_score(), 0.0);
    assert!(!state.is_terminal());
    assert_eq!(state.get_agent_moved(), None);
    assert_eq!(state.get_last_action(), None);
}

#[test]
fn test_agents_placed_in_marker_order() {
    let state = GameState::from_layout(maze(), MAX_GHOSTS);

    assert_eq!(state.get_pacman_position(), Position::new(1.0, 5.0));
    assert_eq!(
        state.get_ghost_positions(),
        vec![Position::new(3.0, 3.0), Position::new(8.0, 2.0)]
    );
    assert!(state.get_pacman_state().is_pacman);
    assert!(state.get_ghost_states().iter().all(|g| !g.is_pacman && !g.is_scared()));
    assert!(state.data().eaten.iter().all(|&e| !e));
}

#[test]
fn test_ghost_limit_drops_later_markers() {
    let state = GameState::from_layout(maze(), 1);

    assert_eq!(state.get_num_agents(), 2);
    assert_eq!(state.get_ghost_positions(), vec![Position::new(3.0, 3.0)]);
    assert!(state.get_ghost_state(2).is_err());
}

#[test]
fn test_ghost_accessors_reject_pacman_index() {
    let state = GameState::from_layout(maze(), MAX_GHOSTS);

    assert!(state.get_ghost_state(0).is_err());
    assert!(state.get_ghost_position(0).is_err());
    assert!(state.get_ghost_state(3).is_err());
    assert_eq!(state.get_ghost_position(2).unwrap(), Position::new(8.0, 2.0));
}

#[test]
fn test_initial_ghost_actions() {
    let state = GameState::from_layout(maze(), MAX_GHOSTS);

    let legal = state.get_legal_actions(1).unwrap();

    assert_eq!(legal.as_slice(), &[Direction::South, Direction::East]);
}

#[test]
fn test_walls_shared_with_layout() {
    let layout = maze();
    let state = GameState::from_layout(layout.clone(), MAX_GHOSTS);

    assert_eq!(state.get_walls(), layout.walls());
    assert!(state.has_wall(0, 0));
    assert!(state.has_wall(2, 4));
    assert!(!state.has_wall(1, 4));
    // Off the map is solid.
    assert!(state.has_wall(40, 40));
    assert!(state.has_wall(10, 3));
}

#[test]
fn test_open_edge_keeps_agents_on_map() {
    // The top row has no wall border.
    let state = GameState::from_layout(Arc::new("%G P%\n%%%%%".parse().unwrap()), MAX_GHOSTS);

    assert_eq!(state.get_legal_pacman_actions().as_slice(), &[Direction::West, Direction::Stop]);
    assert_eq!(state.get_legal_actions(1).unwrap().as_slice(), &[Direction::East]);
    assert_eq!(
        state.generate_successor(0, Direction::North),
        Err(GameError::IllegalAction { action: Direction::North, agent_index: 0 })
    );

    let next = state.generate_successor(0, Direction::West).unwrap();
    let pacman = next.get_pacman_matrix();
    assert_eq!(pacman.iter().filter(|&(_, &v)| v == 1).count(), 1);
    assert_eq!(pacman.get(2, 1), Some(&1));
}

// =============================================================================
// Occupancy Matrices
// =============================================================================

#[test]
fn test_matrices_mark_agent_cells() {
    let state = GameState::from_layout(maze(), MAX_GHOSTS);

    let pacman = state.get_pacman_matrix();
    let ghosts = state.get_ghost_matrix();

    assert_eq!((pacman.width(), pacman.height()), (10, 7));
    assert_eq!(pacman.iter().filter(|&(_, &v)| v == 1).count(), 1);
    assert_eq!(pacman.get(1, 5), Some(&1));
    assert_eq!(ghosts.iter().filter(|&(_, &v)| v == 1).count(), 2);
    assert_eq!(ghosts.get(3, 3), Some(&1));
    assert_eq!(ghosts.get(8, 2), Some(&1));
}

#[test]
fn test_matrix_truncates_half_step() {
    let state = GameState::from_layout(maze(), MAX_GHOSTS);
    let s1 = state.generate_successor(0, Direction::South).unwrap();
    let s2 = s1.generate_successor(0, Direction::South).unwrap();
    let s3 = s2.generate_successor(0, Direction::South).unwrap();
    // Pacman on (1, 2); one more step reaches the capsule at (1, 1).
    let s4 = s3.generate_successor(0, Direction::South).unwrap();
    assert!(s4.get_ghost_state(1).unwrap().is_scared());

    let s5 = s4.generate_successor(1, Direction::East).unwrap();

    assert_eq!(s5.get_ghost_position(1).unwrap(), Position::new(3.5, 3.0));
    let ghosts = s5.get_ghost_matrix();
    assert_eq!(ghosts.get(3, 3), Some(&1));
    assert_eq!(ghosts.get(4, 3), Some(&0));
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_layout_json_roundtrip() {
    let layout: Layout = MAZE.parse().unwrap();

    let json = serde_json::to_string(&layout).unwrap();
    let restored: Layout = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, layout);
}

#[test]
fn test_config_from_json() {
    let config: RulesConfig = serde_json::from_str(
        r#"{
            "scared_time": 20,
            "collision_tolerance": 0.5,
            "food_score": 5,
            "win_bonus": 100,
            "ghost_score": 50,
            "lose_penalty": 100,
            "pacman_speed": 1.0,
            "ghost_speed": 1.0
        }"#,
    )
    .unwrap();

    assert_eq!(config.scared_time, 20);
    let expected = RulesConfig::default()
        .with_scared_time(20)
        .with_collision_tolerance(0.5)
        .with_food_score(5)
        .with_terminal_scores(100, 100)
        .with_ghost_score(50);
    assert_eq!(config, expected);
}
