//! Cursor Capture Module
//!
//! Tracks cursor capture for mouse-look. The demo grabs the cursor at
//! startup and releases it when the window loses focus; raw pointer deltas
//! are only fed to the camera while the cursor is captured.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gridwalk_engine::input::CursorCapture;
//!
//! let mut cursor = CursorCapture::new();
//! cursor.capture();
//! cursor.apply_to_window(&window);
//!
//! // On WindowEvent::Focused(focused):
//! cursor.handle_focus(focused);
//! if cursor.take_dirty() {
//!     cursor.apply_to_window(&window);
//! }
//! ```

use winit::window::{CursorGrabMode, Window};

/// Cursor capture state for mouse-look.
#[derive(Debug, Clone, Default)]
pub struct CursorCapture {
    /// Whether the cursor should be grabbed and hidden.
    captured: bool,
    /// Set when the desired state changed and must be re-applied to the window.
    dirty: bool,
}

impl CursorCapture {
    /// Create a new state with the cursor released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the cursor is currently captured.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Request cursor capture (grabbed and hidden).
    pub fn capture(&mut self) {
        if !self.captured {
            self.captured = true;
            self.dirty = true;
        }
    }

    /// Request cursor release (free and visible).
    pub fn release(&mut self) {
        if self.captured {
            self.captured = false;
            self.dirty = true;
        }
    }

    /// React to a window focus change: release on focus loss, re-capture on
    /// refocus.
    pub fn handle_focus(&mut self, focused: bool) {
        if focused {
            self.capture();
        } else {
            self.release();
        }
    }

    /// Take the dirty flag, returning whether `apply_to_window` is needed.
    pub fn take_dirty(&mut self) -> bool {
        let was = self.dirty;
        self.dirty = false;
        was
    }

    /// Push the desired capture state to the window.
    ///
    /// Tries `Confined` first and falls back to `Locked` for platforms that
    /// only support one of the two grab modes (e.g. macOS vs X11).
    pub fn apply_to_window(&self, window: &Window) {
        if self.captured {
            let grabbed = window
                .set_cursor_grab(CursorGrabMode::Confined)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked));
            if let Err(err) = grabbed {
                eprintln!("[Gridwalk] cursor grab unavailable: {err}");
            }
            window.set_cursor_visible(false);
        } else {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_released() {
        let cursor = CursorCapture::new();
        assert!(!cursor.is_captured());
    }

    #[test]
    fn test_capture_release() {
        let mut cursor = CursorCapture::new();
        cursor.capture();
        assert!(cursor.is_captured());
        assert!(cursor.take_dirty());

        cursor.release();
        assert!(!cursor.is_captured());
        assert!(cursor.take_dirty());
    }

    #[test]
    fn test_dirty_only_on_change() {
        let mut cursor = CursorCapture::new();
        cursor.capture();
        assert!(cursor.take_dirty());
        // Capturing again is a no-op.
        cursor.capture();
        assert!(!cursor.take_dirty());
    }

    #[test]
    fn test_focus_tracking() {
        let mut cursor = CursorCapture::new();
        cursor.capture();
        cursor.take_dirty();

        cursor.handle_focus(false);
        assert!(!cursor.is_captured());

        cursor.handle_focus(true);
        assert!(cursor.is_captured());
    }
}
