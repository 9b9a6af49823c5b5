//! # Session Module
//!
//! The top-level controller for one sandbox session. A `Session` owns the
//! three stateful collaborators — the world store, the camera, and the
//! input manager — and is the only place where sampled input turns into
//! mutations. Window events stream in as they arrive; once per simulation
//! step the session takes a single input sample and applies hotkey
//! selection, the shout, and camera movement from it.

use cgmath::{Deg, Point3};
use log::info;
use web_time::Duration;
use winit::event::WindowEvent;
use winit::keyboard::KeyCode;

use crate::effects;
use crate::interaction::event::PointerEvent;
use crate::interaction::router::{self, PointerResponse};
use crate::player::camera::{Camera, MovementIntent};
use crate::player::input_manager::{InputManager, SHOUT_KEY, TYPE_SELECT_KEYS};
use crate::player::input_state::InputSample;
use crate::world::block::BlockTypeSize;
use crate::world::{generation, World};

/// Initial camera position above the generated terrain.
const SPAWN_POSITION: Point3<f32> = Point3::new(0.0, 6.0, 10.0);

/// Default movement speed in blocks per second.
const MOVE_SPEED: f32 = 8.0;

/// Default mouse-look sensitivity.
const LOOK_SENSITIVITY: f32 = 0.4;

/// One running sandbox session.
///
/// All reads and writes of world state go through the session's store;
/// the rendering layer holds only the snapshots it is handed.
pub struct Session {
    world: World,
    camera: Camera,
    input: InputManager,
}

impl Session {
    /// Creates a session with freshly generated terrain for `seed`.
    ///
    /// # Arguments
    /// * `seed` - Terrain seed; the same seed always yields the same world
    pub fn new(seed: u32) -> Self {
        let mut world = World::new();
        world.replace_all(generation::generate(seed));
        info!("session started with seed {}", seed);

        Session {
            world,
            camera: Camera::new(
                SPAWN_POSITION,
                Deg(-90.0),
                Deg(-20.0),
                MOVE_SPEED,
                LOOK_SENSITIVITY,
            ),
            input: InputManager::new(),
        }
    }

    /// Read access to the world store, for the rendering layer's block
    /// enumeration and HUD highlighting.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Read access to the camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Feeds a window event into the input manager.
    pub fn intake_window_event(&mut self, event: &WindowEvent) {
        if matches!(event, WindowEvent::Focused(false)) {
            self.input.release_all();
        } else {
            self.input.intake_event(event);
        }
    }

    /// Feeds a raw mouse-motion delta into the input manager.
    pub fn intake_mouse_motion(&mut self, delta: (f64, f64)) {
        self.input.intake_mouse_motion(delta);
    }

    /// Routes a pointer-down event that landed on the block at `target`.
    ///
    /// # Arguments
    /// * `target` - Grid coordinates of the block under the pointer
    /// * `event` - The raw pointer event
    ///
    /// # Returns
    /// The boundary response, including context-menu suppression.
    pub fn handle_block_pointer(
        &mut self,
        target: Point3<i32>,
        event: &PointerEvent,
    ) -> PointerResponse {
        router::handle_pointer_event(&mut self.world, target, event)
    }

    /// Advances the session by one simulation step.
    ///
    /// Takes the step's input sample exactly once, then applies, in order:
    /// block-type hotkeys, the shout, and camera movement. The per-frame
    /// update never mutates the world except through these discrete
    /// just-pressed triggers.
    ///
    /// # Arguments
    /// * `dt` - Time elapsed since the previous step
    pub fn step(&mut self, dt: Duration) {
        let sample = self.input.sample_and_reset();

        for (slot, key) in TYPE_SELECT_KEYS.iter().enumerate() {
            if sample.key_phase(*key).is_just_pressed() {
                self.world.select_type_by_index(slot as BlockTypeSize);
            }
        }

        if sample.key_phase(SHOUT_KEY).is_just_pressed() {
            effects::shout(&mut self.world, self.camera.position, self.camera.forward());
        }

        let intent = movement_intent(&sample);
        self.camera.apply_movement(&intent, dt);
    }
}

/// Translates an input sample into this step's movement intent.
fn movement_intent(sample: &InputSample) -> MovementIntent {
    MovementIntent {
        forward: sample.key_phase(KeyCode::KeyW).is_active(),
        backward: sample.key_phase(KeyCode::KeyS).is_active(),
        left: sample.key_phase(KeyCode::KeyA).is_active(),
        right: sample.key_phase(KeyCode::KeyD).is_active(),
        up: sample.key_phase(KeyCode::Space).is_active(),
        down: sample.key_phase(KeyCode::ShiftLeft).is_active(),
        rotate_view: sample.mouse_delta,
    }
}
