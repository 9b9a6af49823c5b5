//! # Input Sample Module
//!
//! This module defines the snapshot types produced by the input manager.
//! Raw pressed/released booleans are translated into per-step transition
//! phases so consumers can distinguish a fresh press from a held key
//! without polling global state.

use std::collections::HashMap;

use winit::{event::MouseButton, keyboard::KeyCode};

/// The transition phase of a key or button over one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPhase {
    /// Not pressed this step or the last.
    #[default]
    Idle,
    /// Went down this step.
    Pressed,
    /// Down this step and the last.
    Held,
    /// Went up this step.
    Released,
}

impl KeyPhase {
    /// Whether the key is actively down (pressed or held).
    pub fn is_active(&self) -> bool {
        matches!(self, KeyPhase::Pressed | KeyPhase::Held)
    }

    /// Whether the key went down this step.
    pub fn is_just_pressed(&self) -> bool {
        matches!(self, KeyPhase::Pressed)
    }

    /// Whether the key went up this step.
    pub fn is_just_released(&self) -> bool {
        matches!(self, KeyPhase::Released)
    }

    /// Derives the phase from the previous and current raw down states.
    pub fn from_transition(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => KeyPhase::Pressed,
            (true, true) => KeyPhase::Held,
            (true, false) => KeyPhase::Released,
            (false, false) => KeyPhase::Idle,
        }
    }
}

/// A per-step snapshot of all tracked input, with transitions resolved.
///
/// Produced once per simulation step by the input manager and consumed by
/// the session; nothing else reads input state.
pub struct InputSample {
    /// Phase of every tracked keyboard key this step.
    pub keyboard_phases: HashMap<KeyCode, KeyPhase>,

    /// Phase of every tracked mouse button this step.
    pub mouse_button_phases: HashMap<MouseButton, KeyPhase>,

    /// Mouse movement delta since the last step (x, y), if any.
    pub mouse_delta: Option<(f64, f64)>,
}

impl InputSample {
    /// The phase of a keyboard key; untracked keys read as idle.
    pub fn key_phase(&self, key: KeyCode) -> KeyPhase {
        self.keyboard_phases.get(&key).copied().unwrap_or_default()
    }

    /// The phase of a mouse button; untracked buttons read as idle.
    pub fn mouse_button_phase(&self, button: MouseButton) -> KeyPhase {
        self.mouse_button_phases
            .get(&button)
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_cover_all_four_phases() {
        assert_eq!(KeyPhase::from_transition(false, true), KeyPhase::Pressed);
        assert_eq!(KeyPhase::from_transition(true, true), KeyPhase::Held);
        assert_eq!(KeyPhase::from_transition(true, false), KeyPhase::Released);
        assert_eq!(KeyPhase::from_transition(false, false), KeyPhase::Idle);
    }

    #[test]
    fn only_pressed_and_held_are_active() {
        assert!(KeyPhase::Pressed.is_active());
        assert!(KeyPhase::Held.is_active());
        assert!(!KeyPhase::Released.is_active());
        assert!(!KeyPhase::Idle.is_active());
    }

    #[test]
    fn untracked_keys_read_as_idle() {
        let sample = InputSample {
            keyboard_phases: HashMap::new(),
            mouse_button_phases: HashMap::new(),
            mouse_delta: None,
        };
        assert_eq!(sample.key_phase(KeyCode::KeyW), KeyPhase::Idle);
        assert_eq!(sample.mouse_button_phase(MouseButton::Left), KeyPhase::Idle);
    }
}
