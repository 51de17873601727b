//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::random_free_cell;
use super::grid::{Cell, Grid};

/// Movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Direction a segment can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The neighbouring cell one step along this direction
    pub fn step(&self, cell: Cell) -> Cell {
        match self {
            Direction::Up => cell.offset(-1, 0),
            Direction::Down => cell.offset(1, 0),
            Direction::Left => cell.offset(0, -1),
            Direction::Right => cell.offset(0, 1),
        }
    }
}

/// One unit cell of the snake's body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub cell: Cell,
    /// Direction this segment last moved along (None before the first tick)
    pub direction: Option<Direction>,
}

impl Segment {
    pub fn new(cell: Cell) -> Self {
        Self {
            cell,
            direction: None,
        }
    }
}

/// The snake: head first, tail last
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    segments: Vec<Segment>,
    /// Requested direction for the next tick
    pub intended: Direction,
}

impl Snake {
    /// A single-segment snake that has not moved yet
    pub fn spawn(cell: Cell, intended: Direction) -> Self {
        Self {
            segments: vec![Segment::new(cell)],
            intended,
        }
    }

    /// Build a snake from explicit segments (head first)
    ///
    /// Returns None for an empty body.
    pub fn from_segments(segments: Vec<Segment>, intended: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self { segments, intended })
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn tail(&self) -> &Segment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Pairs with `len` for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Current active direction of the head
    pub fn heading(&self) -> Option<Direction> {
        self.head().direction
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.iter().any(|s| s.cell == cell)
    }

    /// Whether `direction` may be queued given the head's active axis
    pub fn can_turn(&self, direction: Direction) -> bool {
        match self.heading() {
            Some(active) => active.axis() != direction.axis(),
            None => true,
        }
    }

    /// Queue a turn for the next tick. Returns false when the turn is illegal.
    pub fn queue_turn(&mut self, direction: Direction) -> bool {
        if !self.can_turn(direction) {
            return false;
        }
        self.intended = direction;
        true
    }

    /// Move every segment one step: body follows, head adopts `intended`
    pub fn advance(&mut self) {
        // Tail first so each segment reads its predecessor before it moves
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }

        let direction = self.intended;
        let head = &mut self.segments[0];
        head.direction = Some(direction);
        head.cell = direction.step(head.cell);
    }

    /// Append a segment one cell behind the tail, against the tail's direction
    pub fn grow(&mut self) {
        let tail = *self.tail();
        let cell = match tail.direction {
            Some(direction) => direction.opposite().step(tail.cell),
            None => tail.cell,
        };
        self.segments.push(Segment {
            cell,
            direction: tail.direction,
        });
    }
}

/// Complete state of one play-through
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    /// Reward cell (None only when no free cell remains)
    pub reward: Option<Cell>,
    pub score: u32,
    /// Simulation tick counter
    pub ticks: u64,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh session: one-segment snake at `spawn`, reward on a free cell
    pub fn new(grid: Grid, spawn: Cell, intended: Direction, seed: u64) -> Self {
        let snake = Snake::spawn(spawn, intended);
        Self::with_snake(grid, snake, seed)
    }

    /// Session state around an existing snake
    pub fn with_snake(grid: Grid, snake: Snake, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let reward = random_free_cell(&grid, &snake, &mut rng);
        Self {
            grid,
            snake,
            reward,
            score: 0,
            ticks: 0,
            seed,
            rng,
        }
    }

    /// Put the reward on a fresh free cell
    pub fn relocate_reward(&mut self) {
        self.reward = random_free_cell(&self.grid, &self.snake, &mut self.rng);
    }
}
