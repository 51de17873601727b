//! Directional input mapping
//!
//! Keyboard codes and touch swipes are normalized to a [`Direction`] and then
//! written to the snake as its intended direction, subject to the turn rule
//! in [`Snake::queue_turn`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP};
use crate::sim::{Direction, Snake};

/// The four designated direction key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left: u32,
    pub up: u32,
    pub right: u32,
    pub down: u32,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: KEY_LEFT,
            up: KEY_UP,
            right: KEY_RIGHT,
            down: KEY_DOWN,
        }
    }
}

impl KeyBindings {
    pub fn direction_for(&self, key_code: u32) -> Option<Direction> {
        match key_code {
            c if c == self.left => Some(Direction::Left),
            c if c == self.up => Some(Direction::Up),
            c if c == self.right => Some(Direction::Right),
            c if c == self.down => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Swipe gesture state
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<Vec2>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gesture began (a missing point clears any stale start)
    pub fn begin(&mut self, point: Option<Vec2>) {
        self.start = point;
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Gesture moved; returns the swiped direction and ends the gesture
    ///
    /// A move without a touch point leaves the gesture open.
    pub fn advance(&mut self, point: Option<Vec2>) -> Option<Direction> {
        let (start, point) = (self.start?, point?);
        self.start = None;
        Some(swipe_direction(start - point))
    }
}

/// Direction of a swipe from `start - end`, dominant axis wins (ties vertical)
///
/// A zero displacement counts as a tie and maps to `Down`.
fn swipe_direction(diff: Vec2) -> Direction {
    if diff.x.abs() > diff.y.abs() {
        if diff.x > 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if diff.y > 0.0 {
        // Finger travelled toward the top of the screen
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Routes raw key and touch events to the snake's intended direction
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    pub bindings: KeyBindings,
    swipe: SwipeTracker,
}

impl InputMapper {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            swipe: SwipeTracker::new(),
        }
    }

    /// Returns true when the key produced an accepted turn
    pub fn on_key(&self, key_code: u32, snake: &mut Snake) -> bool {
        match self.bindings.direction_for(key_code) {
            Some(direction) => snake.queue_turn(direction),
            None => false,
        }
    }

    pub fn on_touch_start(&mut self, point: Option<Vec2>) {
        self.swipe.begin(point);
    }

    /// Returns true when the swipe produced an accepted turn
    pub fn on_touch_move(&mut self, point: Option<Vec2>, snake: &mut Snake) -> bool {
        match self.swipe.advance(point) {
            Some(direction) => snake.queue_turn(direction),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Cell, Segment};

    fn moving(direction: Direction) -> Snake {
        let head = Segment {
            cell: Cell::new(10, 10),
            direction: Some(direction),
        };
        Snake::from_segments(vec![head], direction).unwrap()
    }

    #[test]
    fn test_arrow_keys() {
        let keys = KeyBindings::default();
        assert_eq!(keys.direction_for(37), Some(Direction::Left));
        assert_eq!(keys.direction_for(38), Some(Direction::Up));
        assert_eq!(keys.direction_for(39), Some(Direction::Right));
        assert_eq!(keys.direction_for(40), Some(Direction::Down));
        assert_eq!(keys.direction_for(32), None);
        assert_eq!(keys.direction_for(0), None);
    }

    #[test]
    fn test_unknown_key_leaves_intent() {
        let mapper = InputMapper::default();
        let mut snake = moving(Direction::Right);
        snake.queue_turn(Direction::Up);

        for code in [0, 13, 27, 65, 87, 41] {
            assert!(!mapper.on_key(code, &mut snake));
            assert_eq!(snake.intended, Direction::Up);
        }
    }

    #[test]
    fn test_reverse_key_rejected() {
        let mapper = InputMapper::default();
        let mut snake = moving(Direction::Right);

        assert!(!mapper.on_key(KEY_LEFT, &mut snake));
        assert_eq!(snake.intended, Direction::Right);
        assert!(mapper.on_key(KEY_DOWN, &mut snake));
        assert_eq!(snake.intended, Direction::Down);
    }

    #[test]
    fn test_swipe_directions() {
        let start = Vec2::new(100.0, 100.0);
        let cases = [
            (Vec2::new(40.0, 90.0), Direction::Left),
            (Vec2::new(160.0, 110.0), Direction::Right),
            (Vec2::new(95.0, 30.0), Direction::Up),
            (Vec2::new(105.0, 170.0), Direction::Down),
        ];
        for (end, expected) in cases {
            let mut swipe = SwipeTracker::new();
            swipe.begin(Some(start));
            assert_eq!(swipe.advance(Some(end)), Some(expected));
            assert!(!swipe.is_tracking());
        }
    }

    #[test]
    fn test_swipe_tie_goes_vertical() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(Some(Vec2::new(50.0, 50.0)));
        assert_eq!(swipe.advance(Some(Vec2::new(40.0, 40.0))), Some(Direction::Up));
    }

    #[test]
    fn test_swipe_at_origin_is_tracked() {
        // A touch at (0, 0) is a real start point
        let mut swipe = SwipeTracker::new();
        swipe.begin(Some(Vec2::ZERO));
        assert_eq!(swipe.advance(Some(Vec2::new(30.0, 0.0))), Some(Direction::Right));
    }

    #[test]
    fn test_move_without_start_ignored() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.advance(Some(Vec2::new(10.0, 10.0))), None);

        swipe.begin(None);
        assert_eq!(swipe.advance(Some(Vec2::new(10.0, 10.0))), None);
    }

    #[test]
    fn test_move_without_point_keeps_start() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(Some(Vec2::new(10.0, 10.0)));

        assert_eq!(swipe.advance(None), None);
        assert!(swipe.is_tracking());
        assert_eq!(swipe.advance(Some(Vec2::new(10.0, 50.0))), Some(Direction::Down));
        assert!(!swipe.is_tracking());
    }

    #[test]
    fn test_zero_length_swipe_goes_down_and_ends_gesture() {
        let mut mapper = InputMapper::default();
        let mut snake = Snake::spawn(Cell::new(10, 10), Direction::Right);

        mapper.on_touch_start(Some(Vec2::new(50.0, 50.0)));
        assert!(mapper.on_touch_move(Some(Vec2::new(50.0, 50.0)), &mut snake));
        assert_eq!(snake.intended, Direction::Down);

        // Start point consumed even though the finger never moved
        assert!(!mapper.on_touch_move(Some(Vec2::new(50.0, 10.0)), &mut snake));
        assert_eq!(snake.intended, Direction::Down);
    }

    #[test]
    fn test_zero_length_swipe_still_obeys_turn_rule() {
        let mut mapper = InputMapper::default();
        let mut snake = moving(Direction::Up);

        mapper.on_touch_start(Some(Vec2::new(50.0, 50.0)));
        assert!(!mapper.on_touch_move(Some(Vec2::new(50.0, 50.0)), &mut snake));
        assert_eq!(snake.intended, Direction::Up);
    }

    #[test]
    fn test_second_move_needs_new_gesture() {
        let mut mapper = InputMapper::default();
        let mut snake = Snake::spawn(Cell::new(10, 10), Direction::Right);

        mapper.on_touch_start(Some(Vec2::new(100.0, 100.0)));
        assert!(mapper.on_touch_move(Some(Vec2::new(100.0, 20.0)), &mut snake));
        assert_eq!(snake.intended, Direction::Up);

        // Same gesture keeps moving, but the start point was consumed
        assert!(!mapper.on_touch_move(Some(Vec2::new(20.0, 20.0)), &mut snake));
        assert_eq!(snake.intended, Direction::Up);
    }

    #[test]
    fn test_swipe_respects_turn_rule() {
        let mut mapper = InputMapper::default();
        let mut snake = moving(Direction::Up);

        mapper.on_touch_start(Some(Vec2::new(100.0, 100.0)));
        assert!(!mapper.on_touch_move(Some(Vec2::new(100.0, 180.0)), &mut snake));
        assert_eq!(snake.intended, Direction::Up);
    }
}
