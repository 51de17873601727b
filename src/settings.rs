//! Game settings
//!
//! Fixed for the shipped game (`Settings::default()`); tests build smaller
//! boards or different spawn points through the same struct.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::input::KeyBindings;
use crate::sim::{Cell, Direction, Grid};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Edge length of one cell, percent of the board edge
    pub cell_size_percent: f32,
    /// Tick period in milliseconds
    pub tick_period_ms: u64,
    /// Delay between a collision and the next session, in milliseconds
    pub restart_delay_ms: u64,
    /// Head position at session start
    pub spawn: Cell,
    /// Intended direction before any input
    pub initial_direction: Direction,
    pub keys: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size_percent: CELL_SIZE_PERCENT,
            tick_period_ms: TICK_PERIOD_MS,
            restart_delay_ms: RESTART_DELAY_MS,
            spawn: SPAWN_CELL,
            initial_direction: INITIAL_DIRECTION,
            keys: KeyBindings::default(),
        }
    }
}

impl Settings {
    pub fn grid(&self) -> Grid {
        Grid::from_cell_size(self.cell_size_percent)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.grid().size, 25);
        assert_eq!(settings.tick_period(), Duration::from_millis(100));
        assert_eq!(settings.restart_delay(), Duration::from_millis(500));
        assert_eq!(settings.spawn, Cell::new(10, 10));
        assert_eq!(settings.initial_direction, Direction::Right);
        assert!(settings.grid().in_bounds(settings.spawn));
    }

    #[test]
    fn test_json_round_trip_keeps_keys() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.keys, settings.keys);
        assert_eq!(back.spawn, settings.spawn);
    }
}
