//! Visual surface collaborator

/// What a created element represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    SnakeHead,
    SnakeSegment,
    Reward,
}

/// Narrow interface to whatever draws the board (DOM, headless recorder)
///
/// Handles are opaque; callers only hand them back.
pub trait VisualSurface {
    type Handle: Clone;

    /// Container all board elements are appended to
    fn board(&self) -> Self::Handle;
    fn score_label(&self) -> Self::Handle;
    fn high_score_label(&self) -> Self::Handle;

    /// None when the surface could not create the element
    fn create_element(&mut self, kind: ElementKind) -> Option<Self::Handle>;
    fn append_child(&mut self, parent: &Self::Handle, child: &Self::Handle);
    fn remove_all_children(&mut self, parent: &Self::Handle);
    fn set_position(&mut self, handle: &Self::Handle, x_percent: f32, y_percent: f32);
    fn set_text(&mut self, handle: &Self::Handle, text: &str);

    /// User-facing announcement (e.g. a new high score)
    fn notify(&mut self, _message: &str) {}
}
