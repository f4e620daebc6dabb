//! Mouse Input Module
//!
//! Pointer position and button state, decoupled from the windowing backend.

use glam::Vec2;

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// State of all mouse buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl ButtonState {
    /// Update button state for a specific button.
    pub fn set(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Middle => self.middle = pressed,
            MouseButton::Right => self.right = pressed,
        }
    }

    pub fn is_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Middle => self.middle,
            MouseButton::Right => self.right,
        }
    }

    pub fn any_pressed(&self) -> bool {
        self.left || self.middle || self.right
    }
}

/// Complete mouse state tracking.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    /// Pointer position in screen pixels (origin top-left, y down).
    pub position: Option<Vec2>,
    /// Buttons currently held.
    pub buttons: ButtonState,
    /// Buttons that went down since the last frame.
    pub clicked: ButtonState,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    /// Handle a mouse button press/release event.
    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed && !self.buttons.is_pressed(button) {
            self.clicked.set(button, true);
        }
        self.buttons.set(button, pressed);
    }

    pub fn just_clicked(&self, button: MouseButton) -> bool {
        self.clicked.is_pressed(button)
    }

    /// Pointer in world space given the camera's top-left world position.
    pub fn world_position(&self, camera_offset: Vec2) -> Option<Vec2> {
        self.position.map(|p| p + camera_offset)
    }

    /// Handle mouse leaving the window.
    pub fn leave_window(&mut self) {
        self.position = None;
    }

    /// Forget this frame's clicks.
    pub fn end_frame(&mut self) {
        self.clicked = ButtonState::default();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
