//! Rendering module
//!
//! Builds platform-free draw commands; the browser shell replays them on a
//! Canvas 2D context.

pub mod overlay;
pub mod scene;

pub use overlay::DebugOverlay;
pub use scene::{DrawCmd, Style, build_scene};
