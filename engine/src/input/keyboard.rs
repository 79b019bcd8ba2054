//! Keyboard Input Module
//!
//! Contains keyboard state tracking for movement keys.
//! Decoupled from winit to use generic key codes.

/// Generic key codes for the demo's input, independent of windowing system.
///
/// These map to standard keyboard keys but are not tied to winit::keyboard::KeyCode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,

    // Control keys
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks the current state of movement keys.
///
/// This struct maintains which movement keys are currently pressed,
/// allowing smooth continuous movement when keys are held down.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W key - walk forward
    pub forward: bool,
    /// S key - walk backward
    pub backward: bool,
    /// A key - strafe left
    pub left: bool,
    /// D key - strafe right
    pub right: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => {
                self.forward = pressed;
                true
            }
            KeyCode::S => {
                self.backward = pressed;
                true
            }
            KeyCode::A => {
                self.left = pressed;
                true
            }
            KeyCode::D => {
                self.right = pressed;
                true
            }
            _ => false,
        }
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The forward/backward movement intent (+1 forward, -1 backward, 0 idle).
    ///
    /// Deliberate tie-break: when both keys are held, forward wins. The keys
    /// are checked in order rather than summed, so opposing keys never
    /// cancel into a standstill.
    pub fn forward_intent(&self) -> i32 {
        if self.forward {
            1
        } else if self.backward {
            -1
        } else {
            0
        }
    }

    /// The strafe movement intent (+1 right, -1 left, 0 idle).
    ///
    /// Same first-checked-wins rule as [`forward_intent`]: right beats left.
    ///
    /// [`forward_intent`]: MovementKeys::forward_intent
    pub fn strafe_intent(&self) -> i32 {
        if self.right {
            1
        } else if self.left {
            -1
        } else {
            0
        }
    }
}

/// Complete keyboard state tracking for the demo.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    /// Movement key states
    pub movement: MovementKeys,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key was handled as a movement key.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.movement.handle_key(key, pressed)
    }

    /// Reset all keyboard state.
    pub fn reset(&mut self) {
        self.movement.reset();
    }
}
