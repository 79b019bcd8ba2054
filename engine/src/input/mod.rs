//! Input Module
//!
//! Provides platform-agnostic input handling for keyboard movement keys and
//! cursor capture. This module is decoupled from any specific windowing
//! system (like winit) to allow for flexible integration.
//!
//! # Example
//!
//! ```rust,ignore
//! use gridwalk_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//!
//! input.keyboard.handle_key(KeyCode::W, true);
//! assert_eq!(input.keyboard.movement.forward_intent(), 1);
//!
//! // Mouse-look only runs while the cursor is captured
//! if input.cursor.is_captured() {
//!     // camera.apply_look(dx, dy);
//! }
//! ```

pub mod cursor;
pub mod keyboard;

// Re-export commonly used types at module level
pub use cursor::CursorCapture;
pub use keyboard::{KeyCode, KeyboardState, MovementKeys};

/// Combined input state for the demo: keyboard plus cursor capture.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub cursor: CursorCapture,
}

impl InputState {
    /// Create a new input state with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.cursor = CursorCapture::default();
    }

    /// Check if any movement key is currently pressed.
    pub fn is_moving(&self) -> bool {
        self.keyboard.movement.any_pressed()
    }
}
