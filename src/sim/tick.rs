//! Fixed-period simulation step
//!
//! Advances the snake by exactly one cell and resolves reward and terminal
//! conditions. Terminal handling (stopping the clock, restarting) belongs to
//! the session controller.

use super::collision::{head_hits_body, head_hits_reward, head_hits_wall};
use super::state::GameState;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// Head moved onto another segment
    SelfCollision,
    /// Head left the board
    Wall,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Head reached the reward (score and length grew by one)
    pub ate_reward: bool,
    pub terminal: Option<Terminal>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) -> TickOutcome {
    state.snake.advance();
    state.ticks += 1;

    let mut outcome = TickOutcome::default();

    if head_hits_reward(&state.snake, state.reward) {
        state.score += 1;
        state.snake.grow();
        // Relocate after growing so the new tail is excluded too
        state.relocate_reward();
        outcome.ate_reward = true;
        log::debug!(
            "Reward eaten at tick {} (score {}, length {})",
            state.ticks,
            state.score,
            state.snake.len()
        );
    }

    if head_hits_body(&state.snake) {
        outcome.terminal = Some(Terminal::SelfCollision);
    } else if head_hits_wall(&state.grid, &state.snake) {
        outcome.terminal = Some(Terminal::Wall);
    }

    outcome
}
