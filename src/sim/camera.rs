//! Player camera
//!
//! The gameplay core only reads `position` and `target`; moving the camera
//! is the controller's job.

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::direction_between;

/// Keep pitch just short of straight up/down so yaw stays defined
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
const NEAR_PLANE: f32 = 0.01;
const FAR_PLANE: f32 = 1000.0;

/// Perspective camera record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fovy: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(1.0, PLAYER_HEIGHT, 1.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy: PLAYER_FOVY,
        }
    }
}

impl Camera {
    /// Normalized view direction (position → target)
    pub fn direction(&self) -> Vec3 {
        direction_between(self.position, self.target)
    }

    /// Spawn point and velocity of a shot fired along the view direction
    pub fn muzzle(&self, gun_length: f32, speed: f32) -> (Vec3, Vec3) {
        let dir = self.direction();
        (self.position + dir * gun_length, dir * speed)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

/// Per-frame look/move input consumed by a [`CameraController`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LookInput {
    /// Pointer movement in pixels since the last frame (+x right, +y down)
    pub look_delta: Vec2,
    /// Strafe (x, +right) and walk (y, +forward), each in -1..=1
    pub movement: Vec2,
}

/// Moves the camera from player input
pub trait CameraController {
    fn update(&mut self, camera: &mut Camera, input: &LookInput, dt: f32);
}

/// Mouse-look plus planar walking at a fixed eye height.
///
/// Yaw and pitch are re-derived from the camera every frame, so anything
/// that re-aims the camera directly (e.g. the aim reset) sticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstPersonController {
    /// Radians per pixel of pointer movement
    pub sensitivity: f32,
    /// Units per second
    pub move_speed: f32,
    pub invert_y: bool,
}

impl Default for FirstPersonController {
    fn default() -> Self {
        Self {
            sensitivity: 0.003,
            move_speed: 5.0,
            invert_y: false,
        }
    }
}

impl CameraController for FirstPersonController {
    fn update(&mut self, camera: &mut Camera, input: &LookInput, dt: f32) {
        let forward = camera.direction();
        let forward = if forward == Vec3::ZERO { Vec3::NEG_Z } else { forward };

        let pitch_sign = if self.invert_y { 1.0 } else { -1.0 };
        let yaw = forward.z.atan2(forward.x) + input.look_delta.x * self.sensitivity;
        let pitch = (forward.y.clamp(-1.0, 1.0).asin()
            + pitch_sign * input.look_delta.y * self.sensitivity)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let look = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos());
        let walk = Vec3::new(yaw.cos(), 0.0, yaw.sin());
        let strafe = walk.cross(camera.up).normalize_or_zero();

        let movement = input.movement.clamp_length_max(1.0);
        camera.position += (walk * movement.y + strafe * movement.x) * self.move_speed * dt;
        camera.target = camera.position + look;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_default_camera() {
        let camera = Camera::default();
        assert_eq!(camera.position, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.fovy, 45.0);
        assert!((camera.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_muzzle_offsets_along_view() {
        let camera = Camera {
            position: Vec3::new(0.0, 1.0, 0.0),
            target: Vec3::new(0.0, 1.0, -10.0),
            ..Default::default()
        };
        let (origin, velocity) = camera.muzzle(PLAYER_GUN_LENGTH, PROJECTILE_SPEED);
        assert!(approx_eq(origin, Vec3::new(0.0, 1.0, -0.5)));
        assert!(approx_eq(velocity, Vec3::new(0.0, 0.0, -5.0)));
    }

    #[test]
    fn test_degenerate_camera_fires_nowhere() {
        let camera = Camera {
            position: Vec3::ONE,
            target: Vec3::ONE,
            ..Default::default()
        };
        assert_eq!(camera.muzzle(0.5, 5.0), (Vec3::ONE, Vec3::ZERO));
    }

    #[test]
    fn test_idle_controller_keeps_aim() {
        let mut camera = Camera {
            position: Vec3::new(0.0, 1.0, 0.0),
            target: Vec3::new(3.0, 1.0, 4.0),
            ..Default::default()
        };
        let before = camera.direction();
        FirstPersonController::default().update(&mut camera, &LookInput::default(), 1.0 / 60.0);

        assert_eq!(camera.position, Vec3::new(0.0, 1.0, 0.0));
        assert!(approx_eq(camera.direction(), before));
    }

    #[test]
    fn test_walk_forward_stays_level() {
        let mut camera = Camera {
            position: Vec3::new(0.0, 1.0, 0.0),
            target: Vec3::new(1.0, 2.0, 0.0),
            ..Default::default()
        };
        let input = LookInput {
            movement: Vec2::new(0.0, 1.0),
            ..Default::default()
        };
        let mut controller = FirstPersonController::default();
        controller.update(&mut camera, &input, 1.0);

        assert!(approx_eq(camera.position, Vec3::new(5.0, 1.0, 0.0)));
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = Camera {
            position: Vec3::ZERO,
            target: Vec3::X,
            ..Default::default()
        };
        let input = LookInput {
            look_delta: Vec2::new(0.0, -100_000.0),
            ..Default::default()
        };
        FirstPersonController::default().update(&mut camera, &input, 0.0);

        let dir = camera.direction();
        assert!(dir.y > 0.99);
        assert!(dir.y < 1.0);
    }
}
