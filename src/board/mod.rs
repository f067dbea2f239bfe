//! Presentation-facing board: pointer input, controller, rendering boundary.
//!
//! - `PointerEvent`: discrete input from the hit-testing layer
//! - `Board`: drives the selection machine and the session together
//! - `Frame` / `Renderer`: read-only snapshot and the trait that draws it

pub mod controller;
pub mod input;
pub mod render;

pub use controller::Board;
pub use input::PointerEvent;
pub use render::{Frame, Renderer, TextRenderer};
