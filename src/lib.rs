//! Grid Snake - A classic snake game on a square grid
//!
//! Core modules:
//! - `sim`: Grid model, entity state, collisions and the per-tick step
//! - `session`: Game session controller (start, tick, end, restart)
//! - `input`: Keyboard and swipe mapping with turn legality
//! - `clock`: Tick driver abstraction
//! - `renderer`: Visual surface abstraction and the board view
//! - `highscore`: Session-scoped high score reconciliation
//! - `platform`: Browser collaborators (wasm32 only)

pub mod clock;
pub mod highscore;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscore::{HighScore, KeyValueStore, MemoryStore};
pub use session::{GameSession, SessionPhase};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use crate::sim::{Cell, Direction};

    /// Edge length of one grid cell, as a percentage of the board edge
    pub const CELL_SIZE_PERCENT: f32 = 4.0;

    /// Fixed simulation period
    pub const TICK_PERIOD_MS: u64 = 100;
    /// Pause between a collision and the next session
    pub const RESTART_DELAY_MS: u64 = 500;

    /// Where the head appears at session start
    pub const SPAWN_CELL: Cell = Cell::new(10, 10);
    /// Intended direction of a freshly spawned head
    pub const INITIAL_DIRECTION: Direction = Direction::Right;

    /// Arrow key codes (`KeyboardEvent.keyCode`)
    pub const KEY_LEFT: u32 = 37;
    pub const KEY_UP: u32 = 38;
    pub const KEY_RIGHT: u32 = 39;
    pub const KEY_DOWN: u32 = 40;
}
