//! Board view: maps simulation state onto surface elements

use super::surface::{ElementKind, VisualSurface};
use crate::sim::{Cell, GameState};

pub struct BoardView<V: VisualSurface> {
    surface: V,
    /// Handle per snake segment, same index as `Snake::segments`
    segments: Vec<V::Handle>,
    reward: Option<V::Handle>,
}

impl<V: VisualSurface> BoardView<V> {
    pub fn new(surface: V) -> Self {
        Self {
            surface,
            segments: Vec::new(),
            reward: None,
        }
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn segment_handles(&self) -> &[V::Handle] {
        &self.segments
    }

    /// Bring every element in line with `state`
    ///
    /// New segments get a fresh element; existing ones are only repositioned.
    pub fn sync(&mut self, state: &GameState) {
        let board = self.surface.board();

        for (i, segment) in state.snake.segments().iter().enumerate() {
            if i == self.segments.len() {
                let kind = if i == 0 {
                    ElementKind::SnakeHead
                } else {
                    ElementKind::SnakeSegment
                };
                let Some(handle) = self.surface.create_element(kind) else {
                    // Retried on the next sync
                    log::warn!("Could not create element for segment {}", i);
                    break;
                };
                self.surface.append_child(&board, &handle);
                self.segments.push(handle);
            }
            let (x, y) = state.grid.cell_to_screen_offset(segment.cell);
            self.surface.set_position(&self.segments[i], x, y);
        }

        // A full board leaves the reward where it was last drawn
        if let Some(cell) = state.reward {
            self.place_reward(state, cell);
        }
    }

    fn place_reward(&mut self, state: &GameState, cell: Cell) {
        let handle = match &self.reward {
            Some(handle) => handle.clone(),
            None => {
                let board = self.surface.board();
                let Some(handle) = self.surface.create_element(ElementKind::Reward) else {
                    log::warn!("Could not create reward element");
                    return;
                };
                self.surface.append_child(&board, &handle);
                self.reward = Some(handle.clone());
                handle
            }
        };
        let (x, y) = state.grid.cell_to_screen_offset(cell);
        self.surface.set_position(&handle, x, y);
    }

    pub fn show_score(&mut self, score: u32) {
        let label = self.surface.score_label();
        self.surface.set_text(&label, &format!("Score: {}", score));
    }

    pub fn show_high_score(&mut self, best: u32) {
        let label = self.surface.high_score_label();
        self.surface.set_text(&label, &format!("High Score: {}", best));
    }

    pub fn notify(&mut self, message: &str) {
        self.surface.notify(message);
    }

    /// Remove every board element and forget their handles
    pub fn clear(&mut self) {
        let board = self.surface.board();
        self.surface.remove_all_children(&board);
        self.segments.clear();
        self.reward = None;
    }
}
