//! Collision checks and free-cell placement
//!
//! Everything here is a pure function of the grid, the snake and (for
//! placement) an RNG. Movement is grid-quantized, so every test is exact
//! integer equality on `(row, column)`.

use rand::Rng;
use rand::seq::IteratorRandom;

use super::grid::{Cell, Grid};
use super::state::Snake;

/// Rejection-sampling attempts per board cell before falling back to a scan
const SAMPLES_PER_CELL: usize = 4;

pub fn head_hits_reward(snake: &Snake, reward: Option<Cell>) -> bool {
    reward.is_some_and(|cell| snake.head().cell == cell)
}

/// Head shares a cell with any other segment
pub fn head_hits_body(snake: &Snake) -> bool {
    let head = snake.head().cell;
    snake.segments()[1..].iter().any(|s| s.cell == head)
}

pub fn head_hits_wall(grid: &Grid, snake: &Snake) -> bool {
    !grid.in_bounds(snake.head().cell)
}

/// Pick a uniformly random in-bounds cell that no segment occupies
///
/// Samples blindly first, which is cheap while the board is mostly empty.
/// After a bounded number of misses it chooses among the remaining free
/// cells directly, so a nearly-full board still terminates. Returns None when
/// the snake covers the whole board.
pub fn random_free_cell<R: Rng>(grid: &Grid, snake: &Snake, rng: &mut R) -> Option<Cell> {
    let attempts = grid.cell_count() * SAMPLES_PER_CELL;
    for _ in 0..attempts {
        let cell = Cell::new(
            rng.random_range(1..=grid.size),
            rng.random_range(1..=grid.size),
        );
        if !snake.occupies(cell) {
            return Some(cell);
        }
    }

    log::debug!("Reward sampling fell back to free-cell scan");
    grid.cells().filter(|c| !snake.occupies(*c)).choose(rng)
}
