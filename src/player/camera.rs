//! # Camera Implementation
//!
//! A first-person camera holding the player's position and orientation.
//! The session feeds it a per-step movement intent derived from the input
//! sample; the area effect reads its position and forward vector for the
//! shout's origin and facing. Projection and GPU concerns live entirely in
//! the rendering layer and are not represented here.

use cgmath::{Angle, InnerSpace, Point3, Rad, Vector3};
use std::f32::consts::FRAC_PI_2;
use web_time::Duration;

/// Safe limit for pitch to prevent gimbal lock.
const SAFE_FRAC_PI_2: f32 = FRAC_PI_2 - 0.0001;

/// Per-step movement and look input for the camera.
///
/// Built fresh from each input sample; movement flags are level-triggered
/// (true while the key is down), the look delta is edge-triggered per
/// sample.
#[derive(Debug, Default)]
pub struct MovementIntent {
    /// Move along the camera's horizontal forward direction.
    pub forward: bool,
    /// Move against the camera's horizontal forward direction.
    pub backward: bool,
    /// Strafe left.
    pub left: bool,
    /// Strafe right.
    pub right: bool,
    /// Rise vertically.
    pub up: bool,
    /// Sink vertically.
    pub down: bool,
    /// Mouse-look delta (x, y) for this step, if the mouse moved.
    pub rotate_view: Option<(f64, f64)>,
}

/// Represents a first-person camera in 3D space.
#[derive(Debug)]
pub struct Camera {
    /// The camera's position in world space.
    pub position: Point3<f32>,
    /// Horizontal rotation (around Y axis) in radians.
    pub yaw: Rad<f32>,
    /// Vertical rotation (around X axis) in radians.
    pub pitch: Rad<f32>,
    /// Movement speed in blocks per second.
    speed: f32,
    /// Mouse-look sensitivity multiplier.
    sensitivity: f32,
}

impl Camera {
    /// Creates a new camera with the specified position and orientation.
    ///
    /// # Arguments
    /// * `position` - Initial position in world space
    /// * `yaw` - Initial yaw (horizontal rotation around Y axis)
    /// * `pitch` - Initial pitch (vertical rotation around X axis)
    /// * `speed` - Movement speed in blocks per second
    /// * `sensitivity` - Mouse-look sensitivity multiplier
    pub fn new<V: Into<Point3<f32>>, Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(
        position: V,
        yaw: Y,
        pitch: P,
        speed: f32,
        sensitivity: f32,
    ) -> Self {
        Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: pitch.into(),
            speed,
            sensitivity,
        }
    }

    /// The camera's normalized forward direction.
    ///
    /// This is the facing vector the shout projects its center along.
    pub fn forward(&self) -> Vector3<f32> {
        let (yaw_sin, yaw_cos) = self.yaw.sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.sin_cos();
        Vector3::new(pitch_cos * yaw_cos, pitch_sin, pitch_cos * yaw_sin).normalize()
    }

    /// Applies one step of movement and look input.
    ///
    /// Horizontal movement follows the yaw only (walking while looking up
    /// does not lift the player); vertical movement is world-axis up and
    /// down. Pitch is clamped to keep the view short of straight up or
    /// down.
    ///
    /// # Arguments
    /// * `intent` - The movement intent for this step
    /// * `dt` - Time elapsed since the last step
    pub fn apply_movement(&mut self, intent: &MovementIntent, dt: Duration) {
        let dt = dt.as_secs_f32();

        let (yaw_sin, yaw_cos) = self.yaw.sin_cos();
        let forward = Vector3::new(yaw_cos, 0.0, yaw_sin).normalize();
        let right = Vector3::new(-yaw_sin, 0.0, yaw_cos).normalize();

        let axis = |positive: bool, negative: bool| match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        };

        self.position += forward * axis(intent.forward, intent.backward) * self.speed * dt;
        self.position += right * axis(intent.right, intent.left) * self.speed * dt;
        self.position.y += axis(intent.up, intent.down) * self.speed * dt;

        if let Some((delta_x, delta_y)) = intent.rotate_view {
            self.yaw += Rad(delta_x as f32) * self.sensitivity * dt;
            self.pitch += Rad(-delta_y as f32) * self.sensitivity * dt;
        }

        // Clamp pitch to prevent gimbal lock
        if self.pitch < -Rad(SAFE_FRAC_PI_2) {
            self.pitch = -Rad(SAFE_FRAC_PI_2);
        } else if self.pitch > Rad(SAFE_FRAC_PI_2) {
            self.pitch = Rad(SAFE_FRAC_PI_2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Deg;

    fn camera() -> Camera {
        Camera::new(Point3::new(0.0, 2.0, 0.0), Deg(0.0), Deg(0.0), 10.0, 1.0)
    }

    #[test]
    fn forward_is_normalized() {
        let mut camera = camera();
        camera.yaw = Rad(0.7);
        camera.pitch = Rad(-0.4);
        let forward = camera.forward();
        assert!((forward.magnitude() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn walking_forward_ignores_pitch() {
        let mut camera = camera();
        camera.pitch = Rad(1.0);

        let intent = MovementIntent {
            forward: true,
            ..Default::default()
        };
        camera.apply_movement(&intent, Duration::from_secs(1));

        assert_eq!(camera.position.y, 2.0);
        assert!((camera.position.x - 10.0).abs() < 1e-4);
    }

    #[test]
    fn opposing_keys_cancel_out() {
        let mut camera = camera();
        let intent = MovementIntent {
            forward: true,
            backward: true,
            up: true,
            down: true,
            ..Default::default()
        };
        camera.apply_movement(&intent, Duration::from_secs(1));
        assert_eq!(camera.position, Point3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn pitch_is_clamped_short_of_vertical() {
        let mut camera = camera();
        let intent = MovementIntent {
            rotate_view: Some((0.0, -10_000.0)),
            ..Default::default()
        };
        camera.apply_movement(&intent, Duration::from_secs(1));
        assert!(camera.pitch.0 <= SAFE_FRAC_PI_2);
        assert!(camera.pitch.0 > 0.0);
    }
}
