//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per tick, grid-quantized movement
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{head_hits_body, head_hits_reward, head_hits_wall, random_free_cell};
pub use grid::{Cell, Grid};
pub use state::{Axis, Direction, GameState, Segment, Snake};
pub use tick::{Terminal, TickOutcome, tick};
