//! Input Module
//!
//! Platform-agnostic keyboard and mouse state, bindings, and the per-tick
//! [`InputSnapshot`] the simulation consumes. The simulation never polls
//! devices itself; the host samples once per tick and passes the snapshot in.
//!
//! # Example
//!
//! ```rust,ignore
//! use eldoria_engine::input::{KeyBindings, KeyboardState, MouseState, KeyCode};
//!
//! let bindings = KeyBindings::new();
//! let mut keyboard = KeyboardState::new();
//! let mouse = MouseState::new();
//!
//! keyboard.handle_key(KeyCode::D, true);
//! let input = bindings.snapshot(&keyboard, &mouse, None);
//! assert_eq!(input.horizontal(), 1.0);
//! keyboard.end_frame();
//! ```

pub mod bindings;
pub mod keyboard;
pub mod mouse;

use glam::Vec2;

pub use bindings::{Binding, InputAction, KeyBindings};
pub use keyboard::{KeyCode, KeyboardState};
pub use mouse::{ButtonState, MouseButton, MouseState};

/// Player intent for one simulation tick.
///
/// Held flags reflect the state at sampling time; action flags are edges and
/// fire once per press.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    /// Fall through one-way platforms
    pub drop_through: bool,
    pub jump: bool,
    pub attack: bool,
    pub mine: bool,
    pub place_platform: bool,
    pub interact: bool,
    pub escape: bool,
    pub use_consumable: [bool; 2],
    /// Pointer in world space, if over the window
    pub pointer: Option<Vec2>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// -1, 0 or +1. Left wins when both directions are held.
    pub fn horizontal(&self) -> f32 {
        if self.move_left {
            -1.0
        } else if self.move_right {
            1.0
        } else {
            0.0
        }
    }

    pub fn with_left(mut self) -> Self {
        self.move_left = true;
        self
    }

    pub fn with_right(mut self) -> Self {
        self.move_right = true;
        self
    }

    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }

    pub fn with_drop_through(mut self) -> Self {
        self.drop_through = true;
        self
    }

    pub fn with_attack(mut self, pointer: Vec2) -> Self {
        self.attack = true;
        self.pointer = Some(pointer);
        self
    }

    pub fn with_mine(mut self, pointer: Vec2) -> Self {
        self.mine = true;
        self.pointer = Some(pointer);
        self
    }

    pub fn with_place(mut self, pointer: Vec2) -> Self {
        self.place_platform = true;
        self.pointer = Some(pointer);
        self
    }

    pub fn with_interact(mut self) -> Self {
        self.interact = true;
        self
    }

    pub fn with_escape(mut self) -> Self {
        self.escape = true;
        self
    }

    /// Use consumable slot 0 or 1.
    pub fn with_consumable(mut self, slot: usize) -> Self {
        if let Some(flag) = self.use_consumable.get_mut(slot) {
            *flag = true;
        }
        self
    }
}

/// Combined input state for both keyboard and mouse.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
    pub bindings: KeyBindings,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample this tick's snapshot and clear the edge state.
    pub fn take_snapshot(&mut self, camera_offset: Vec2) -> InputSnapshot {
        let pointer = self.mouse.world_position(camera_offset);
        let snapshot = self.bindings.snapshot(&self.keyboard, &self.mouse, pointer);
        self.keyboard.end_frame();
        self.mouse.end_frame();
        snapshot
    }

    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse.reset();
    }
}
