//! Pillar Range - a tiny first-person shooting range
//!
//! Core modules:
//! - `sim`: Renderer-free gameplay (projectile pool, pillar lattice, camera)
//! - `game`: Per-frame orchestration (input → simulate → camera → draw)
//! - `renderer`: Draw primitives and the WebGPU pipeline
//! - `settings`: Player preferences

pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameInput, Game};
pub use settings::Settings;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Window size in pixels
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;
    /// Target frame rate (frame delta still comes from the platform timer)
    pub const SCREEN_FPS: u32 = 60;

    /// Maximum number of projectiles in flight
    pub const PROJECTILE_CAPACITY: usize = 1000;
    /// Projectile box extents (world units)
    pub const PROJECTILE_WIDTH: f32 = 0.1;
    pub const PROJECTILE_HEIGHT: f32 = 0.1;
    pub const PROJECTILE_LENGTH: f32 = 0.1;
    /// Muzzle speed (units/s)
    pub const PROJECTILE_SPEED: f32 = 5.0;
    /// Seconds a projectile stays alive
    pub const PROJECTILE_LIFETIME: f32 = 5.0;

    /// Distance from the eye to the projectile spawn point
    pub const PLAYER_GUN_LENGTH: f32 = 0.5;
    /// Eye height above the ground plane
    pub const PLAYER_HEIGHT: f32 = 1.0;
    /// Vertical field of view (degrees)
    pub const PLAYER_FOVY: f32 = 45.0;

    /// Pillar lattice
    pub const PILLARS_GRID_WIDTH: usize = 3;
    pub const PILLARS_GRID_HEIGHT: usize = 23;
    pub const PILLARS_GRID_SPACING_X: f32 = 2.0;
    pub const PILLARS_GRID_SPACING_Y: f32 = 2.0;
    pub const PILLARS_CAPACITY: usize = PILLARS_GRID_WIDTH * PILLARS_GRID_HEIGHT;
    pub const PILLAR_HEIGHT: f32 = 5.0;
    pub const PILLAR_SIZE_X: f32 = 1.0;
    pub const PILLAR_SIZE_Z: f32 = 1.0;

    /// Ground grid (slices, spacing)
    pub const GROUND_GRID_SLICES: u32 = 10;
    pub const GROUND_GRID_SPACING: f32 = 1.0;

    /// HUD text placement
    pub const HUD_X: i32 = 10;
    pub const HUD_Y: i32 = 10;
    pub const HUD_FONT_SIZE: u32 = 20;
}

/// Normalized direction from `from` toward `to` (zero if they coincide)
#[inline]
pub fn direction_between(from: Vec3, to: Vec3) -> Vec3 {
    (to - from).normalize_or_zero()
}

/// Format a vector the way the HUD shows it: `{x, y, z}` with six decimals
#[inline]
pub fn format_vec3(v: Vec3) -> String {
    format!("{{{:.6}, {:.6}, {:.6}}}", v.x, v.y, v.z)
}
