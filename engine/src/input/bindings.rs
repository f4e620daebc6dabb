//! Input Bindings Module
//!
//! Maps physical keys and mouse buttons to logical actions and samples them
//! into an [`InputSnapshot`] once per tick.

use std::collections::HashMap;

use glam::Vec2;

use super::{InputSnapshot, KeyCode, KeyboardState, MouseButton, MouseState};

/// Logical input actions that can be bound to physical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Walk left (default: A, Left arrow)
    MoveLeft,
    /// Walk right (default: D, Right arrow)
    MoveRight,
    /// Jump (default: W, Up arrow, Space)
    Jump,
    /// Fall through one-way platforms while held (default: S, Down arrow)
    DropThrough,
    /// Swing or fire the equipped weapon (default: left mouse)
    Attack,
    /// Hit the block under the pointer (default: right mouse)
    Mine,
    /// Build a platform under the pointer (default: Q)
    PlacePlatform,
    /// Use a nearby building or exit (default: E)
    Interact,
    /// Close menu / cancel (default: Escape)
    Escape,
    /// Use the first consumable slot (default: 1)
    UseConsumable1,
    /// Use the second consumable slot (default: 2)
    UseConsumable2,
}

/// A physical input that can carry a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    Key(KeyCode),
    Mouse(MouseButton),
}

impl From<KeyCode> for Binding {
    fn from(key: KeyCode) -> Self {
        Binding::Key(key)
    }
}

impl From<MouseButton> for Binding {
    fn from(button: MouseButton) -> Self {
        Binding::Mouse(button)
    }
}

/// Maps physical inputs to logical actions.
///
/// Each physical input drives at most one action; an action may have several
/// inputs (WASD and arrows).
#[derive(Debug, Clone)]
pub struct KeyBindings {
    input_to_action: HashMap<Binding, InputAction>,
    action_to_inputs: HashMap<InputAction, Vec<Binding>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Bindings with no entries.
    pub fn empty() -> Self {
        Self {
            input_to_action: HashMap::new(),
            action_to_inputs: HashMap::new(),
        }
    }

    /// Default key mappings.
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);
        bindings.bind(KeyCode::W, InputAction::Jump);
        bindings.bind(KeyCode::ArrowUp, InputAction::Jump);
        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::S, InputAction::DropThrough);
        bindings.bind(KeyCode::ArrowDown, InputAction::DropThrough);
        bindings.bind(MouseButton::Left, InputAction::Attack);
        bindings.bind(MouseButton::Right, InputAction::Mine);
        bindings.bind(KeyCode::Q, InputAction::PlacePlatform);
        bindings.bind(KeyCode::E, InputAction::Interact);
        bindings.bind(KeyCode::Escape, InputAction::Escape);
        bindings.bind(KeyCode::Digit1, InputAction::UseConsumable1);
        bindings.bind(KeyCode::Digit2, InputAction::UseConsumable2);

        bindings
    }

    /// Bind a physical input to a logical action.
    ///
    /// If the input was previously bound to another action, that binding is removed.
    pub fn bind(&mut self, input: impl Into<Binding>, action: InputAction) {
        let input = input.into();
        self.unbind(input);
        self.input_to_action.insert(input, action);
        self.action_to_inputs.entry(action).or_default().push(input);
    }

    /// Remove the binding for a specific input.
    pub fn unbind(&mut self, input: impl Into<Binding>) {
        let input = input.into();
        let Some(action) = self.input_to_action.remove(&input) else {
            return;
        };
        if let Some(inputs) = self.action_to_inputs.get_mut(&action) {
            inputs.retain(|b| *b != input);
        }
    }

    /// Remove every binding for a specific action.
    pub fn unbind_action(&mut self, action: InputAction) {
        if let Some(inputs) = self.action_to_inputs.remove(&action) {
            for input in inputs {
                self.input_to_action.remove(&input);
            }
        }
    }

    pub fn get_action(&self, input: impl Into<Binding>) -> Option<InputAction> {
        self.input_to_action.get(&input.into()).copied()
    }

    /// Inputs bound to an action, in binding order.
    pub fn inputs_for(&self, action: InputAction) -> &[Binding] {
        self.action_to_inputs.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Any bound input is held.
    pub fn is_held(&self, action: InputAction, keyboard: &KeyboardState, mouse: &MouseState) -> bool {
        self.inputs_for(action).iter().any(|b| match b {
            Binding::Key(k) => keyboard.is_held(*k),
            Binding::Mouse(m) => mouse.buttons.is_pressed(*m),
        })
    }

    /// Any bound input went down this frame.
    pub fn just_pressed(&self, action: InputAction, keyboard: &KeyboardState, mouse: &MouseState) -> bool {
        self.inputs_for(action).iter().any(|b| match b {
            Binding::Key(k) => keyboard.just_pressed(*k),
            Binding::Mouse(m) => mouse.just_clicked(*m),
        })
    }

    /// Sample the current devices into a per-tick snapshot.
    ///
    /// `pointer` is the pointer already converted to world space.
    pub fn snapshot(&self, keyboard: &KeyboardState, mouse: &MouseState, pointer: Option<Vec2>) -> InputSnapshot {
        use InputAction::*;
        InputSnapshot {
            move_left: self.is_held(MoveLeft, keyboard, mouse),
            move_right: self.is_held(MoveRight, keyboard, mouse),
            drop_through: self.is_held(DropThrough, keyboard, mouse),
            jump: self.just_pressed(Jump, keyboard, mouse),
            attack: self.just_pressed(Attack, keyboard, mouse),
            mine: self.just_pressed(Mine, keyboard, mouse),
            place_platform: self.just_pressed(PlacePlatform, keyboard, mouse),
            interact: self.just_pressed(Interact, keyboard, mouse),
            escape: self.just_pressed(Escape, keyboard, mouse),
            use_consumable: [
                self.just_pressed(UseConsumable1, keyboard, mouse),
                self.just_pressed(UseConsumable2, keyboard, mouse),
            ],
            pointer,
        }
    }
}
