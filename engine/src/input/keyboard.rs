//! Keyboard Input Module
//!
//! Key identifiers and per-frame key state, decoupled from any windowing
//! backend. The host translates its native key events into [`KeyCode`]s.

use std::collections::HashSet;

/// Key codes used by the default bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Action keys
    E,
    F,
    Q,
    Escape,
    Enter,

    // Consumable slots
    Digit1,
    Digit2,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Held keys plus the keys that went down since the last frame.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Key repeat events for an already held key do not count as a new press.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if key == KeyCode::Unknown {
            return;
        }
        if pressed {
            if self.held.insert(key) {
                self.pressed.insert(key);
            }
        } else {
            self.held.remove(&key);
        }
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Went down during the current frame.
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Forget this frame's presses. Call once per tick after sampling.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }

    /// Reset all keyboard state (e.g. on focus loss).
    pub fn reset(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }
}
