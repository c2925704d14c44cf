//! Input handling and the box edit state machine.
//!
//! This module translates host pointer and keyboard events into box edits.
//! It owns the gesture state machine (idle, drawing a new box, dragging the
//! selected boxes) and applies the resulting edits to the configured renderers.

pub mod events;
pub mod modifiers;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Key, PointerEvent, UiEvent};
pub use modifiers::Modifiers;
pub use state::{BoxEditTool, GestureState};
