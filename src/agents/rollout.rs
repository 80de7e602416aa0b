use crate::core::{GameState, Result};

use super::Agent;

/// Result of one rollout.
#[derive(Clone, Debug)]
pub struct Episode {
    /// Final state.
    pub state: GameState,

    /// Single-agent moves made.
    pub moves: usize,

    /// True if the move cap ended the episode before a terminal state.
    pub truncated: bool,
}

impl Episode {
    /// Final score.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.state.get_score()
    }
}

/// Play `agents` in index order from `start` until the game ends or
/// `max_moves` single-agent moves have been made.
///
/// Agents are sorted by `index()`. An agent with no action skips its turn;
/// a round in which nobody moves ends the episode. `start` is not modified.
pub fn run_episode(start: &GameState, agents: &mut [Box<dyn Agent>], max_moves: usize) -> Result<Episode> {
    agents.sort_by_key(|agent| agent.index());

    let mut state = start.clone();
    let mut moves = 0;

    'outer: while !state.is_terminal() {
        let mut any_moved = false;
        for agent in agents.iter_mut() {
            if state.is_terminal() {
                break 'outer;
            }
            if moves >= max_moves {
                log::debug!("episode truncated after {} moves (score {})", moves, state.get_score());
                return Ok(Episode {
                    state,
                    moves,
                    truncated: true,
                });
            }
            let Some(action) = agent.get_action(&state) else {
                continue;
            };
            state = state.generate_successor(agent.index(), action)?;
            moves += 1;
            any_moved = true;
        }
        if !any_moved {
            break;
        }
    }

    log::debug!(
        "episode finished: {:?} after {} moves (score {})",
        state.outcome(),
        moves,
        state.get_score()
    );
    Ok(Episode {
        truncated: !state.is_terminal(),
        state,
        moves,
    })
}
