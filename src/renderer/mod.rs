//! Rendering module
//!
//! The simulation never touches visual handles. [`BoardView`] keeps the
//! segment-index → handle mapping and pushes positions and labels to a
//! [`VisualSurface`] after each step.

pub mod board_view;
pub mod headless;
pub mod surface;

pub use board_view::BoardView;
pub use headless::HeadlessSurface;
pub use surface::{ElementKind, VisualSurface};
