//! Platform abstraction layer
//!
//! Browser implementations of the collaborators the core talks to:
//! - `VisualSurface` over DOM elements
//! - `KeyValueStore` over `sessionStorage`
//! - `TickDriver` over `setInterval` / `setTimeout`
//!
//! Native builds use the headless counterparts shipped with the core.

#[cfg(target_arch = "wasm32")]
pub mod web;
