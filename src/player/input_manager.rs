//! # Input Manager
//!
//! This module turns discrete key-down/key-up window events into per-step
//! input samples. It keeps old/new raw state maps for every tracked key
//! and button, and resolves them into transition phases exactly once per
//! simulation step, so no consumer ever polls live keyboard state.

use std::collections::HashMap;

use winit::{
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::input_state::{InputSample, KeyPhase};

/// Keys that select a placement block type, in hotkey-slot order.
pub const TYPE_SELECT_KEYS: [KeyCode; 5] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
];

/// The key that triggers the shout.
pub const SHOUT_KEY: KeyCode = KeyCode::KeyF;

const TRACKED_KEYS: [KeyCode; 12] = [
    KeyCode::KeyW,
    KeyCode::KeyS,
    KeyCode::KeyA,
    KeyCode::KeyD,
    KeyCode::Space,
    KeyCode::ShiftLeft,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::KeyF,
];

const TRACKED_BUTTONS: [MouseButton; 3] =
    [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// Tracks raw input state between steps and produces per-step samples.
///
/// Keyboard and mouse state each live in an old/new pair of maps: `new`
/// is written by discrete window events as they arrive, `old` holds the
/// state the previous sample was taken against. The pair yields the
/// transition phase for every tracked key when sampled.
pub struct InputManager {
    /// Raw down-state of tracked keys at the previous sample.
    pub keyboard_old: HashMap<KeyCode, bool>,
    /// Raw down-state of tracked keys right now.
    pub keyboard_new: HashMap<KeyCode, bool>,

    /// Raw down-state of tracked mouse buttons at the previous sample.
    pub mouse_buttons_old: HashMap<MouseButton, bool>,
    /// Raw down-state of tracked mouse buttons right now.
    pub mouse_buttons_new: HashMap<MouseButton, bool>,

    /// Accumulated mouse movement delta since the last sample (x, y).
    pub mouse_delta: Option<(f64, f64)>,
}

impl InputManager {
    /// Creates a manager with every tracked key and button released.
    pub fn new() -> Self {
        let mut keyboard_old = HashMap::new();
        let mut keyboard_new = HashMap::new();
        for key in TRACKED_KEYS {
            keyboard_old.insert(key, false);
            keyboard_new.insert(key, false);
        }

        let mut mouse_buttons_old = HashMap::new();
        let mut mouse_buttons_new = HashMap::new();
        for button in TRACKED_BUTTONS {
            mouse_buttons_old.insert(button, false);
            mouse_buttons_new.insert(button, false);
        }

        Self {
            keyboard_old,
            keyboard_new,
            mouse_buttons_old,
            mouse_buttons_new,
            mouse_delta: None,
        }
    }

    /// Processes a window event and updates the raw state maps.
    ///
    /// Untracked keys and buttons are ignored.
    ///
    /// # Arguments
    /// * `event` - The window event to process
    pub fn intake_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => {
                if let Some(down) = self.keyboard_new.get_mut(key) {
                    *down = *state == ElementState::Pressed;
                }
            }
            WindowEvent::MouseInput { button, state, .. } => {
                if let Some(down) = self.mouse_buttons_new.get_mut(button) {
                    *down = *state == ElementState::Pressed;
                }
            }
            _ => {}
        }
    }

    /// Accumulates a mouse movement delta.
    ///
    /// # Arguments
    /// * `delta` - The (x, y) movement since the last motion event
    pub fn intake_mouse_motion(&mut self, delta: (f64, f64)) {
        self.mouse_delta = match self.mouse_delta {
            Some((x, y)) => Some((x + delta.0, y + delta.1)),
            None => Some(delta),
        };
    }

    /// Takes the per-step sample and rolls state forward.
    ///
    /// Each tracked key's phase is derived from its old/new raw states;
    /// afterwards the new state becomes the old state and the mouse delta
    /// is cleared, ready for the next step's events.
    pub fn sample_and_reset(&mut self) -> InputSample {
        let mut keyboard_phases = HashMap::new();
        for (key, &current) in self.keyboard_new.iter() {
            let previous = self.keyboard_old.get(key).copied().unwrap_or(false);
            keyboard_phases.insert(*key, KeyPhase::from_transition(previous, current));
        }

        let mut mouse_button_phases = HashMap::new();
        for (button, &current) in self.mouse_buttons_new.iter() {
            let previous = self.mouse_buttons_old.get(button).copied().unwrap_or(false);
            mouse_button_phases.insert(*button, KeyPhase::from_transition(previous, current));
        }

        let sample = InputSample {
            keyboard_phases,
            mouse_button_phases,
            mouse_delta: self.mouse_delta,
        };

        self.roll_state_forward();
        sample
    }

    /// Releases everything, as when the window loses focus, so no key
    /// stays stuck down.
    pub fn release_all(&mut self) {
        for down in self.keyboard_new.values_mut() {
            *down = false;
        }
        for down in self.mouse_buttons_new.values_mut() {
            *down = false;
        }
        self.mouse_delta = None;
    }

    fn roll_state_forward(&mut self) {
        for (key, current) in self.keyboard_new.iter() {
            if let Some(previous) = self.keyboard_old.get_mut(key) {
                *previous = *current;
            }
        }
        for (button, current) in self.mouse_buttons_new.iter() {
            if let Some(previous) = self.mouse_buttons_old.get_mut(button) {
                *previous = *current;
            }
        }
        self.mouse_delta = None;
    }
}

impl Default for InputManager {
    fn default() -> Self {
        InputManager::new()
    }
}
