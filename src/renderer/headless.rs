//! In-memory surface for tests and the native build

use super::surface::{ElementKind, VisualSurface};

const BOARD: usize = 0;
const SCORE_LABEL: usize = 1;
const HIGH_SCORE_LABEL: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct HeadlessElement {
    /// None for the three fixed page elements
    pub kind: Option<ElementKind>,
    pub children: Vec<usize>,
    pub position: Option<(f32, f32)>,
    pub text: String,
}

/// Records every call so the resulting "page" can be inspected
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    pub elements: Vec<HeadlessElement>,
    pub notifications: Vec<String>,
    pub position_updates: usize,
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self {
            elements: vec![HeadlessElement::default(); 3],
            notifications: Vec::new(),
            position_updates: 0,
        }
    }

    /// Elements currently attached to the board, in append order
    pub fn board_children(&self) -> Vec<&HeadlessElement> {
        self.elements[BOARD]
            .children
            .iter()
            .map(|&i| &self.elements[i])
            .collect()
    }

    /// Attached elements of one kind
    pub fn attached(&self, kind: ElementKind) -> Vec<&HeadlessElement> {
        self.board_children()
            .into_iter()
            .filter(|e| e.kind == Some(kind))
            .collect()
    }

    pub fn score_text(&self) -> &str {
        &self.elements[SCORE_LABEL].text
    }

    pub fn high_score_text(&self) -> &str {
        &self.elements[HIGH_SCORE_LABEL].text
    }
}

impl VisualSurface for HeadlessSurface {
    type Handle = usize;

    fn board(&self) -> usize {
        BOARD
    }

    fn score_label(&self) -> usize {
        SCORE_LABEL
    }

    fn high_score_label(&self) -> usize {
        HIGH_SCORE_LABEL
    }

    fn create_element(&mut self, kind: ElementKind) -> Option<usize> {
        self.elements.push(HeadlessElement {
            kind: Some(kind),
            ..Default::default()
        });
        Some(self.elements.len() - 1)
    }

    fn append_child(&mut self, parent: &usize, child: &usize) {
        self.elements[*parent].children.push(*child);
    }

    fn remove_all_children(&mut self, parent: &usize) {
        self.elements[*parent].children.clear();
    }

    fn set_position(&mut self, handle: &usize, x_percent: f32, y_percent: f32) {
        self.elements[*handle].position = Some((x_percent, y_percent));
        self.position_updates += 1;
    }

    fn set_text(&mut self, handle: &usize, text: &str) {
        log::trace!("text[{}] = {}", handle, text);
        self.elements[*handle].text = text.to_string();
    }

    fn notify(&mut self, message: &str) {
        log::info!("{}", message);
        self.notifications.push(message.to_string());
    }
}
